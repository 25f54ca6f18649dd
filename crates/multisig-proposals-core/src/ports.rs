use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::domain::{DraftField, TokenInfo};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// What caused a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    Button,
    EnterKey,
}

/// The originating form-submission event handed to [`ProposalCreationHandler::on_submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEvent {
    pub trigger: SubmitTrigger,
}

impl SubmitEvent {
    pub fn button() -> Self {
        Self {
            trigger: SubmitTrigger::Button,
        }
    }

    pub fn enter_key() -> Self {
        Self {
            trigger: SubmitTrigger::EnterKey,
        }
    }
}

/// Callbacks of the proposal creation modal. Implemented by the parent that
/// owns the draft.
pub trait ProposalCreationHandler {
    fn on_close(&mut self);
    fn on_submit(&mut self, event: SubmitEvent);
    fn on_field_change(&mut self, field: DraftField, value: String);
    fn on_token_select(&mut self, token: TokenInfo);
    fn on_open_template_selector(&mut self);
    fn on_save_as_template(&mut self);
}

/// Callbacks of the proposal detail modal.
pub trait ProposalDetailHandler {
    fn on_close(&mut self);
}

pub type TokenFuture = Pin<Box<dyn Future<Output = Result<Option<TokenInfo>, PortError>> + Send>>;

/// Resolves a token address typed by the user into a descriptor.
///
/// `Ok(None)` means the address is well-formed but unknown.
pub trait CustomTokenResolver: Send + Sync {
    fn resolve(&self, address: &str) -> TokenFuture;
}
