//! One-shot loading of the people list, bound to the mount lifecycle.
//!
//! Every mount opens a new epoch. The list request carries the epoch it was
//! issued in, and a response is only applied while that epoch is still the
//! live one. Unmounting closes the epoch, so a response that arrives after
//! the component is gone (or after it was mounted again) is dropped.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::FetchError;
use crate::event::PersonId;
use crate::model::PersonSummary;

/// Tag attached to an in-flight list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTicket {
    pub epoch: u64,
    pub request_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    Applied { count: usize },
    Failed(FetchError),
    Stale,
}

#[derive(Debug, Default)]
pub struct PeopleList {
    epoch: u64,
    mounted: bool,
    in_flight: Option<ListTicket>,
    people: Vec<PersonSummary>,
}

impl PeopleList {
    /// Activates the component. Returns the ticket for the single list
    /// request of this mount, or `None` if already mounted.
    pub fn mount(&mut self) -> Option<ListTicket> {
        if self.mounted {
            return None;
        }

        self.mounted = true;
        self.epoch = self.epoch.wrapping_add(1);

        let ticket = ListTicket {
            epoch: self.epoch,
            request_id: Uuid::new_v4(),
        };
        self.in_flight = Some(ticket.clone());
        Some(ticket)
    }

    /// Deactivates the component and discards the list. Returns `false`
    /// when it was not mounted.
    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }

        self.mounted = false;
        self.epoch = self.epoch.wrapping_add(1);
        self.in_flight = None;
        self.people.clear();
        true
    }

    pub fn accept(
        &mut self,
        ticket: &ListTicket,
        result: Result<Vec<PersonSummary>, FetchError>,
    ) -> ListOutcome {
        if self.in_flight.as_ref() != Some(ticket) {
            debug!(
                epoch = ticket.epoch,
                current_epoch = self.epoch,
                request_id = %ticket.request_id,
                "people list response outlived its mount"
            );
            return ListOutcome::Stale;
        }

        self.in_flight = None;

        match result {
            Ok(people) => {
                self.people = people;
                ListOutcome::Applied {
                    count: self.people.len(),
                }
            }
            Err(error) => ListOutcome::Failed(error),
        }
    }

    #[must_use]
    pub fn people(&self) -> &[PersonSummary] {
        &self.people
    }

    #[must_use]
    pub fn contains(&self, id: &PersonId) -> bool {
        self.people.iter().any(|person| &person.id == id)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<&ListTicket> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
