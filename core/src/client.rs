//! Stateful view-model over the todo API.
//!
//! # Design
//! `TodoClient` owns the page state and a `Transport`. Every operation sets
//! `loading`, performs exactly one call through `TodoApi`, and on a
//! successful mutation re-fetches the whole collection instead of patching
//! the local list. Failures are logged with their typed `ApiError` and then
//! collapsed into the operation's fixed message in the single `error` slot.
//!
//! Operations take `&mut self`, so two of them can never be in flight on the
//! same client at once.

use tracing::{debug, warn};

use crate::api::TodoApi;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::state::{ClientState, Operation, EMPTY_TITLE_ERROR};
use crate::transport::Transport;
use crate::types::TodoId;

/// Callback invoked with the new state after every transition.
pub type Observer = Box<dyn FnMut(&ClientState)>;

pub struct TodoClient<T> {
    api: TodoApi,
    transport: T,
    state: ClientState,
    observers: Vec<Observer>,
}

impl<T: Transport> TodoClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self::with_api(TodoApi::new(base_url), transport)
    }

    pub fn with_api(api: TodoApi, transport: T) -> Self {
        Self {
            api,
            transport,
            state: ClientState::default(),
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Register a callback that sees every state transition, including the
    /// intermediate ones where `loading` is true.
    pub fn subscribe(&mut self, observer: impl FnMut(&ClientState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Initial load when the view first appears.
    pub fn mount(&mut self) {
        self.refresh();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| state.draft_title = text);
    }

    /// Add whatever is currently in the draft.
    pub fn submit_draft(&mut self) {
        let title = self.state.draft_title.clone();
        self.add(&title);
    }

    /// Replace the local list with the server's. On failure the previous list
    /// is kept and the fetch message is shown.
    pub fn refresh(&mut self) {
        self.update(|state| state.loading = true);

        let request = self.api.build_list_todos();
        let outcome = self
            .execute(request)
            .and_then(|response| self.api.parse_list_todos(response));

        match outcome {
            Ok(todos) => {
                debug!(count = todos.len(), "fetched todos");
                self.update(|state| state.todos = todos);
            }
            Err(err) => self.fail(Operation::Fetch, &err),
        }

        self.update(|state| state.loading = false);
    }

    /// Blank titles are rejected locally. A successful add clears both the
    /// draft and the error, even if the follow-up fetch failed.
    pub fn add(&mut self, title: &str) {
        if title.trim().is_empty() {
            debug!("rejecting blank todo title");
            self.update(|state| state.error = Some(EMPTY_TITLE_ERROR.to_string()));
            return;
        }

        let request = self.api.build_create_todo(title);
        self.mutate(Operation::Add, request, |state| {
            state.draft_title.clear();
            state.error = None;
        });
    }

    pub fn toggle(&mut self, id: &TodoId) {
        let request = Ok(self.api.build_toggle_todo(id));
        self.mutate(Operation::Toggle, request, |_| {});
    }

    pub fn delete(&mut self, id: &TodoId) {
        let request = Ok(self.api.build_delete_todo(id));
        self.mutate(Operation::Delete, request, |_| {});
    }

    fn mutate(
        &mut self,
        operation: Operation,
        request: Result<HttpRequest, ApiError>,
        on_success: impl FnOnce(&mut ClientState),
    ) {
        self.update(|state| state.loading = true);

        let outcome = request
            .and_then(|request| self.execute(request))
            .and_then(|response| self.api.parse_mutation(response));

        match outcome {
            Ok(()) => {
                self.refresh();
                self.update(on_success);
            }
            Err(err) => self.fail(operation, &err),
        }

        self.update(|state| state.loading = false);
    }

    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    fn fail(&mut self, operation: Operation, err: &ApiError) {
        let message = operation.failure_message();
        warn!(?operation, error = %err, "{message}");
        self.update(|state| state.error = Some(message.to_string()));
    }

    fn update(&mut self, apply: impl FnOnce(&mut ClientState)) {
        apply(&mut self.state);
        for observer in &mut self.observers {
            observer(&self.state);
        }
    }
}
