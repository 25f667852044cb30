//! The I/O seam between the view-model and the network.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one plain-data HTTP request.
///
/// Implementations must return non-2xx responses as `Ok` so that status
/// interpretation stays in `TodoApi`; `Err` is reserved for requests that
/// never produced a response.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}
