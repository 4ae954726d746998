// lib.rs - People directory core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capabilities;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod people_list;
pub mod person_detail;
pub mod view;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::ApiConfig;
pub use error::{ConfigError, FetchError};
pub use event::{Event, PersonId};
pub use model::{Model, PersonDetail, PersonSummary};
pub use view::{PersonButton, PersonPanel, ViewModel};

pub const HEADING: &str = "People";
pub const PLACEHOLDER_TITLE: &str = "Select a person";
pub const HOBBY_SEPARATOR: &str = ", ";
pub const RENDER_TRACE_MESSAGE: &str = "rendering...";
pub const CLEANUP_TRACE_MESSAGE: &str = "cleaning up the person effect";

mod app {
    use tracing::{debug, error, info, warn};

    use crate::capabilities::{response_body, Capabilities};
    use crate::config::ApiConfig;
    use crate::error::FetchError;
    use crate::event::{Event, PersonId};
    use crate::model::{Model, PersonDetail, PersonSummary};
    use crate::people_list::{ListOutcome, ListTicket};
    use crate::person_detail::{DetailOutcome, DetailTicket};
    use crate::view::{PersonButton, PersonPanel, ViewModel};
    use crate::{HEADING, RENDER_TRACE_MESSAGE};

    #[derive(Default)]
    pub struct App;

    impl App {
        fn fetch_people(ticket: ListTicket, model: &Model, caps: &Capabilities) {
            let url = model.config.people_url();
            debug!(
                epoch = ticket.epoch,
                request_id = %ticket.request_id,
                %url,
                "fetching people"
            );

            caps.http
                .get(url)
                .expect_json::<Vec<PersonSummary>>()
                .send(move |result| Event::PeopleFetched {
                    ticket,
                    result: Box::new(result),
                });
        }

        fn fetch_person(ticket: DetailTicket, model: &Model, caps: &Capabilities) {
            let url = model.config.person_url(&ticket.id);
            debug!(
                id = %ticket.id,
                generation = ticket.generation,
                request_id = %ticket.request_id,
                %url,
                "fetching person"
            );

            caps.http
                .get(url)
                .expect_json::<PersonDetail>()
                .send(move |result| Event::PersonFetched {
                    ticket,
                    result: Box::new(result),
                });
        }

        fn select_person(id: PersonId, model: &mut Model, caps: &Capabilities) {
            if !model.is_mounted() {
                warn!(%id, "ignoring selection while unmounted");
                return;
            }

            if !model.people.contains(&id) {
                warn!(%id, "ignoring selection of a person not in the list");
                return;
            }

            if let Some(ticket) = model.detail.select(id) {
                Self::fetch_person(ticket, model, caps);
                caps.render.render();
            }
        }

        fn handle_people_response(
            ticket: &ListTicket,
            result: Result<Vec<PersonSummary>, FetchError>,
            model: &mut Model,
            caps: &Capabilities,
        ) {
            match model.people.accept(ticket, result) {
                ListOutcome::Applied { count } => {
                    info!(count, epoch = ticket.epoch, "people list loaded");
                    caps.render.render();
                }
                ListOutcome::Failed(e) => {
                    error!(
                        code = e.code(),
                        error = %e,
                        request_id = %ticket.request_id,
                        "failed to fetch people"
                    );
                    caps.render.render();
                }
                ListOutcome::Stale => {}
            }
        }

        fn handle_person_response(
            ticket: &DetailTicket,
            result: Result<PersonDetail, FetchError>,
            model: &mut Model,
            caps: &Capabilities,
        ) {
            match model.detail.accept(ticket, result) {
                DetailOutcome::Applied => {
                    info!(id = %ticket.id, generation = ticket.generation, "person loaded");
                    caps.render.render();
                }
                DetailOutcome::Failed(e) => {
                    error!(
                        id = %ticket.id,
                        code = e.code(),
                        error = %e,
                        request_id = %ticket.request_id,
                        "failed to fetch person"
                    );
                    caps.render.render();
                }
                DetailOutcome::Stale => {}
            }
        }

        fn build_buttons(model: &Model) -> Vec<PersonButton> {
            let selected = model.detail.selected();
            model
                .people
                .people()
                .iter()
                .map(|person| PersonButton::new(person, selected == Some(&person.id)))
                .collect()
        }
    }

    impl crux_core::App for App {
        type Event = Event;
        type Model = Model;
        type ViewModel = ViewModel;
        type Capabilities = Capabilities;

        fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
            debug!(
                event = event.name(),
                user_initiated = event.is_user_initiated(),
                "update"
            );

            match event {
                Event::Noop => {}

                Event::Rendered => {
                    debug!("{RENDER_TRACE_MESSAGE}");
                }

                Event::ApiConfigured { base_url } => match ApiConfig::new(&base_url) {
                    Ok(config) => {
                        info!(
                            base_url = %config.base_url(),
                            host = config.base_url().host(),
                            "API endpoint configured"
                        );
                        model.config = config;
                    }
                    Err(e) => {
                        error!(error = %e, "rejected API configuration");
                    }
                },

                Event::Mounted => {
                    let Some(ticket) = model.people.mount() else {
                        warn!("already mounted, people list is not fetched again");
                        return;
                    };

                    Self::fetch_people(ticket, model, caps);
                    caps.render.render();
                }

                Event::Unmounted => {
                    if !model.people.unmount() {
                        warn!("unmount requested while not mounted");
                        return;
                    }

                    model.detail.reset();
                    caps.render.render();
                }

                Event::PersonSelected { id } => {
                    Self::select_person(id, model, caps);
                }

                Event::PersonDeselected => {
                    if model.detail.deselect() {
                        caps.render.render();
                    }
                }

                Event::PeopleFetched { ticket, result } => {
                    Self::handle_people_response(&ticket, response_body(*result), model, caps);
                }

                Event::PersonFetched { ticket, result } => {
                    Self::handle_person_response(&ticket, response_body(*result), model, caps);
                }
            }
        }

        fn view(&self, model: &Model) -> ViewModel {
            let detail = model
                .detail
                .person()
                .map_or_else(PersonPanel::placeholder, PersonPanel::from);

            ViewModel {
                heading: HEADING.to_string(),
                people: Self::build_buttons(model),
                detail,
                is_loading_people: model.people.is_loading(),
                is_loading_person: model.detail.is_loading(),
            }
        }
    }
}
