//! Detail loading keyed on the selected person.
//!
//! Each selection change runs teardown first (the held detail is cleared),
//! then opens a new generation and hands out a ticket for the fetch. Only
//! the response carrying the live ticket may fill the detail slot; anything
//! older is dropped, so a slow response for an earlier selection can never
//! overwrite the current one.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::FetchError;
use crate::event::PersonId;
use crate::model::PersonDetail;
use crate::CLEANUP_TRACE_MESSAGE;

/// Tag attached to an in-flight detail request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailTicket {
    pub id: PersonId,
    pub generation: u64,
    pub request_id: Uuid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading(DetailTicket),
    Loaded(PersonDetail),
    Failed {
        id: PersonId,
        error: FetchError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Applied,
    Failed(FetchError),
    Stale,
}

#[derive(Debug, Default)]
pub struct DetailLoader {
    selected: Option<PersonId>,
    generation: u64,
    state: DetailState,
}

impl DetailLoader {
    /// Points the loader at `id`.
    ///
    /// Returns the ticket of the fetch to issue, or `None` when `id` is
    /// already selected (nothing changed, nothing to refetch).
    pub fn select(&mut self, id: PersonId) -> Option<DetailTicket> {
        if self.selected.as_ref() == Some(&id) {
            return None;
        }

        self.teardown();
        self.generation = self.generation.wrapping_add(1);

        let ticket = DetailTicket {
            id: id.clone(),
            generation: self.generation,
            request_id: Uuid::new_v4(),
        };
        self.selected = Some(id);
        self.state = DetailState::Loading(ticket.clone());
        Some(ticket)
    }

    /// Drops the selection. Returns `false` if nothing was selected.
    pub fn deselect(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.reset();
        true
    }

    /// Teardown for component deactivation.
    pub fn reset(&mut self) {
        self.teardown();
        self.selected = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Clears whatever the previous selection left behind. Only a live
    /// selection has anything to clean up.
    fn teardown(&mut self) {
        if let Some(previous) = &self.selected {
            debug!(id = %previous, generation = self.generation, "{CLEANUP_TRACE_MESSAGE}");
            self.state = DetailState::Idle;
        }
    }

    pub fn accept(
        &mut self,
        ticket: &DetailTicket,
        result: Result<PersonDetail, FetchError>,
    ) -> DetailOutcome {
        if self.in_flight() != Some(ticket) {
            debug!(
                id = %ticket.id,
                generation = ticket.generation,
                current_generation = self.generation,
                request_id = %ticket.request_id,
                "person response no longer matches the selection"
            );
            return DetailOutcome::Stale;
        }

        let result = result.and_then(|person| {
            if person.id == ticket.id {
                Ok(person)
            } else {
                Err(FetchError::Decode(format!(
                    "requested person {} but received person {}",
                    ticket.id, person.id
                )))
            }
        });

        match result {
            Ok(person) => {
                self.state = DetailState::Loaded(person);
                DetailOutcome::Applied
            }
            Err(error) => {
                self.state = DetailState::Failed {
                    id: ticket.id.clone(),
                    error: error.clone(),
                };
                DetailOutcome::Failed(error)
            }
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&PersonId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn person(&self) -> Option<&PersonDetail> {
        match &self.state {
            DetailState::Loaded(person) => Some(person),
            _ => None,
        }
    }

    #[must_use]
    pub fn in_flight(&self) -> Option<&DetailTicket> {
        match &self.state {
            DetailState::Loading(ticket) => Some(ticket),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight().is_some()
    }

    #[must_use]
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
