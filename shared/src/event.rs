use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{PersonDetail, PersonSummary};
use crate::people_list::ListTicket;
use crate::person_detail::DetailTicket;

// --- Typed IDs ---

/// Identifier of a person as handed out by the people service.
///
/// The service may encode ids as JSON strings or integers; both decode to
/// the same value, so `1` and `"1"` name the same person.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "RawPersonId")]
pub struct PersonId(String);

impl PersonId {
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for PersonId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPersonId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl From<RawPersonId> for PersonId {
    fn from(raw: RawPersonId) -> Self {
        match raw {
            RawPersonId::Unsigned(n) => Self(n.to_string()),
            RawPersonId::Signed(n) => Self(n.to_string()),
            RawPersonId::Text(s) => Self(s),
        }
    }
}

// --- Events ---

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub enum Event {
    #[default]
    Noop,

    /// The component became active; loads the people list once.
    Mounted,
    /// The component is being destroyed; clears everything it held.
    Unmounted,
    /// Sent by the shell after every paint.
    Rendered,

    ApiConfigured {
        base_url: String,
    },

    PersonSelected {
        id: PersonId,
    },
    PersonDeselected,

    #[serde(skip)]
    PeopleFetched {
        ticket: ListTicket,
        result: Box<crux_http::Result<crux_http::Response<Vec<PersonSummary>>>>,
    },
    #[serde(skip)]
    PersonFetched {
        ticket: DetailTicket,
        result: Box<crux_http::Result<crux_http::Response<PersonDetail>>>,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::Mounted => "mounted",
            Self::Unmounted => "unmounted",
            Self::Rendered => "rendered",
            Self::ApiConfigured { .. } => "api_configured",
            Self::PersonSelected { .. } => "person_selected",
            Self::PersonDeselected => "person_deselected",
            Self::PeopleFetched { .. } => "people_fetched",
            Self::PersonFetched { .. } => "person_fetched",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::PersonSelected { .. } | Self::PersonDeselected
        )
    }
}
