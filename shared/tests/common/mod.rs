#![allow(dead_code)]

use crux_core::testing::AppTester;
use crux_core::Request;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use crux_http::testing::ResponseBuilder;
use crux_http::HttpError;
use people_shared::person_detail::DetailTicket;
use people_shared::{App, Effect, Event, Model, PersonDetail, PersonId, PersonSummary};

pub type Tester = AppTester<App, Effect>;

pub fn summary(id: u64, name: &str) -> PersonSummary {
    PersonSummary {
        id: PersonId::from(id),
        name: name.to_string(),
    }
}

pub fn detail(id: u64, name: &str, age: u32, hobbies: &[&str]) -> PersonDetail {
    PersonDetail {
        id: PersonId::from(id),
        name: name.to_string(),
        age,
        hobbies: hobbies.iter().map(|h| (*h).to_string()).collect(),
    }
}

pub fn http_urls(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request.operation.url.clone()),
            _ => None,
        })
        .collect()
}

/// Takes the single HTTP request out of a batch of effects.
pub fn take_http(effects: Vec<Effect>) -> Request<HttpRequest> {
    effects
        .into_iter()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("an HTTP request was issued")
}

/// Answers `request` the way the shell would and returns the events the
/// core produced from the response, without applying them yet.
pub fn answer(app: &Tester, mut request: Request<HttpRequest>, response: HttpResponse) -> Vec<Event> {
    app.resolve(&mut request, HttpResult::Ok(response))
        .expect("request resolves")
        .events
}

pub fn deliver(app: &Tester, model: &mut Model, events: Vec<Event>) -> Vec<Effect> {
    events
        .into_iter()
        .flat_map(|event| app.update(event, model).effects)
        .collect()
}

/// Mounts the app and answers its list request with `people` as JSON.
pub fn mounted_with(app: &Tester, model: &mut Model, people: Vec<PersonSummary>) {
    let request = take_http(app.update(Event::Mounted, model).effects);
    let body = serde_json::to_vec(&people).expect("people serialize");
    let events = answer(app, request, HttpResponse::ok().body(body).build());
    deliver(app, model, events);
}

/// Selects `id` and returns the ticket of the detail request it issued.
pub fn select(app: &Tester, model: &mut Model, id: u64) -> DetailTicket {
    app.update(Event::PersonSelected { id: PersonId::from(id) }, model);
    model
        .detail
        .in_flight()
        .cloned()
        .expect("selection issues a detail request")
}

pub fn resolve_person(app: &Tester, model: &mut Model, ticket: DetailTicket, person: PersonDetail) {
    app.update(
        Event::PersonFetched {
            ticket,
            result: Box::new(Ok(ResponseBuilder::ok().body(person).build())),
        },
        model,
    );
}

pub fn fail_person(app: &Tester, model: &mut Model, ticket: DetailTicket) {
    app.update(
        Event::PersonFetched {
            ticket,
            result: Box::new(Err(HttpError::Io("connection reset".into()))),
        },
        model,
    );
}
