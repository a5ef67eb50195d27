use reqwest::{Request, Response};

use super::ApiClientError;

/// Hooks around every request sent by `ApiClient`.
///
/// `on_request` sees the fully built request before it leaves and `on_response`
/// sees successful (2xx) responses. `on_error` sees every failure: transport
/// errors, non-2xx statuses and JSON decode errors from `get_json`/`post_json`.
/// All hooks default to passing values through.
pub trait Interceptor: Send + Sync {
    fn on_request(&self, request: Request) -> Result<Request, ApiClientError> {
        Ok(request)
    }

    fn on_response(&self, response: Response) -> Result<Response, ApiClientError> {
        Ok(response)
    }

    fn on_error(&self, error: ApiClientError) -> ApiClientError {
        error
    }
}

/// Leaves requests, responses and errors untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl Interceptor for PassThrough {}
