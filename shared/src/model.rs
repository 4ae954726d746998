use serde::{Deserialize, Deserializer, Serialize};

use crate::config::ApiConfig;
use crate::event::PersonId;
use crate::people_list::PeopleList;
use crate::person_detail::DetailLoader;
use crate::view::join_hobbies;

/// Minimal record used for listing and selection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
}

/// Full record of the selected person.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PersonDetail {
    pub id: PersonId,
    pub name: String,
    pub age: u32,
    /// A missing or `null` list decodes as empty.
    #[serde(default, deserialize_with = "nullable_list")]
    pub hobbies: Vec<String>,
}

impl PersonDetail {
    #[must_use]
    pub fn hobbies_line(&self) -> String {
        join_hobbies(&self.hobbies)
    }
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Component-local state. Nothing here outlives the component except the
/// endpoint configuration.
#[derive(Debug, Default)]
pub struct Model {
    pub config: ApiConfig,
    pub people: PeopleList,
    pub detail: DetailLoader,
}

impl Model {
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.people.is_mounted()
    }

    /// The detail currently on display, if any.
    #[must_use]
    pub fn person(&self) -> Option<&PersonDetail> {
        self.detail.person()
    }
}
