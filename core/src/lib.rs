//! Todo list client core.
//!
//! # Overview
//! `TodoApi` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. `TodoClient` is the page view-model on top
//! of it: it owns the list, draft, error and loading state, and drives one
//! request at a time through a caller-supplied `Transport`.
//!
//! # Design
//! - Every mutation re-fetches the full list; nothing is patched locally.
//! - Users see one fixed message per failed operation; the typed `ApiError`
//!   behind it only goes to the log.
//! - `view::render` turns the state into the text a front end prints.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;
pub mod view;

pub use api::{TodoApi, DEFAULT_BASE_URL};
pub use client::{Observer, TodoClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{ClientState, Operation, EMPTY_TITLE_ERROR};
pub use transport::Transport;
pub use types::{CreateTodo, Todo, TodoId};
