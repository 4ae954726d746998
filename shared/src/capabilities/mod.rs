mod http;

pub use self::http::response_body;

// Crux's built-in Render capability covers view updates; HTTP goes through
// crux_http, with the shell performing the actual transport.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::event::Event;

/// Everything the core asks the shell to do: fetch over HTTP and repaint.
#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
}
