use serde::{Deserialize, Serialize};

use crate::model::{PersonDetail, PersonSummary};
use crate::{HOBBY_SEPARATOR, PLACEHOLDER_TITLE};

/// Joins hobbies into the single line shown in the detail panel.
#[must_use]
pub fn join_hobbies(hobbies: &[String]) -> String {
    hobbies.join(HOBBY_SEPARATOR)
}

/// One selectable control per person, in list order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonButton {
    pub id: String,
    pub label: String,
    pub is_selected: bool,
}

impl PersonButton {
    #[must_use]
    pub fn new(person: &PersonSummary, is_selected: bool) -> Self {
        Self {
            id: person.id.to_string(),
            label: person.name.clone(),
            is_selected,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonPanel {
    pub title: String,
    pub age: String,
    pub hobbies: String,
}

impl PersonPanel {
    /// What the panel shows while no detail is held.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            age: String::new(),
            hobbies: String::new(),
        }
    }
}

impl From<&PersonDetail> for PersonPanel {
    fn from(person: &PersonDetail) -> Self {
        Self {
            title: person.name.clone(),
            age: person.age.to_string(),
            hobbies: person.hobbies_line(),
        }
    }
}

impl Default for PersonPanel {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ViewModel {
    pub heading: String,
    pub people: Vec<PersonButton>,
    pub detail: PersonPanel,
    pub is_loading_people: bool,
    pub is_loading_person: bool,
}
