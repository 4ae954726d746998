use crux_http::{HttpError, Response};

use crate::error::FetchError;

impl From<HttpError> for FetchError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Json(message) => FetchError::Decode(message),
            other => FetchError::Network(other.to_string()),
        }
    }
}

/// Unwraps a JSON response resolved by the shell into its decoded body.
///
/// `crux_http` already reports non-2xx statuses as `HttpError::Http`, so
/// those arrive here as network failures. A response that decoded to
/// nothing is a decode failure.
pub fn response_body<T>(result: crux_http::Result<Response<T>>) -> Result<T, FetchError> {
    result
        .map_err(FetchError::from)?
        .take_body()
        .ok_or_else(|| FetchError::Decode("response carried no body".to_string()))
}
