//! View logic of the proposal creation modal.
//!
//! The modal never owns form state. [`CreationView::build`] turns the current
//! props into what should be drawn, and [`CreationProps::resolve`] turns a UI
//! event into the callbacks the parent should receive. Keeping the two apart
//! lets a parent that both owns the props and implements the handler resolve
//! first and invoke afterwards.

use crate::amount::{
    format_token_amount, format_token_balance, parse_token_amount, remaining_after_transfer,
    sanitize_amount,
};
use crate::domain::{DraftField, ProposalDraft, TokenHolding, TokenInfo};
use crate::ports::{CustomTokenResolver, ProposalCreationHandler, SubmitEvent};

pub const TITLE: &str = "Create New Proposal";
pub const RECIPIENT_HINT: &str = "G... or C... (Stellar address)";
pub const AMOUNT_HINT: &str = "0.00";
pub const MEMO_HINT: &str = "Add a description or note for this proposal...";
pub const SUBMIT_LABEL: &str = "Submit Proposal";
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Inputs of the creation modal, borrowed from the parent for one frame.
#[derive(Clone, Copy)]
pub struct CreationProps<'a> {
    pub is_open: bool,
    pub loading: bool,
    pub selected_template_name: Option<&'a str>,
    pub draft: &'a ProposalDraft,
    pub holdings: &'a [TokenHolding],
    pub selected_token: Option<&'a TokenInfo>,
    pub amount_error: Option<&'a str>,
    /// Forwarded untouched to the token selector.
    pub custom_token_resolver: Option<&'a dyn CustomTokenResolver>,
}

/// User interaction inside the creation modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationEvent {
    Close,
    Submit(SubmitEvent),
    RecipientEdited(String),
    /// Raw text as typed; sanitized before it reaches the parent.
    AmountEdited(String),
    MemoEdited(String),
    TokenChosen(TokenInfo),
    SetMax,
    OpenTemplateSelector,
    SaveAsTemplate,
}

/// A single callback invocation destined for the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationCallback {
    Close,
    Submit(SubmitEvent),
    FieldChange(DraftField, String),
    TokenSelect(TokenInfo),
    OpenTemplateSelector,
    SaveAsTemplate,
}

impl CreationCallback {
    pub fn invoke<H: ProposalCreationHandler + ?Sized>(self, handler: &mut H) {
        match self {
            CreationCallback::Close => handler.on_close(),
            CreationCallback::Submit(event) => handler.on_submit(event),
            CreationCallback::FieldChange(field, value) => handler.on_field_change(field, value),
            CreationCallback::TokenSelect(token) => handler.on_token_select(token),
            CreationCallback::OpenTemplateSelector => handler.on_open_template_selector(),
            CreationCallback::SaveAsTemplate => handler.on_save_as_template(),
        }
    }
}

/// Holding whose token address matches the selected token, if any.
pub fn selected_holding<'a>(
    holdings: &'a [TokenHolding],
    selected_token: Option<&TokenInfo>,
) -> Option<&'a TokenHolding> {
    let selected = selected_token?;
    holdings.iter().find(|h| h.token.address == selected.address)
}

/// Submit is disabled while loading, on an amount error, or with an empty
/// recipient or amount.
pub fn submit_enabled(loading: bool, amount_error: Option<&str>, draft: &ProposalDraft) -> bool {
    !(loading || amount_error.is_some() || draft.recipient.is_empty() || draft.amount.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPreview {
    pub sending: String,
    pub remaining: String,
    pub symbol: String,
}

/// "You're sending / remaining balance" summary. Only produced with a selected
/// holding, a non-empty amount and no amount error.
pub fn transfer_preview(
    holding: Option<&TokenHolding>,
    amount: &str,
    amount_error: Option<&str>,
) -> Option<TransferPreview> {
    let holding = holding?;
    if amount.is_empty() || amount_error.is_some() {
        return None;
    }
    let decimals = holding.token.decimals;
    let sending = parse_token_amount(amount, decimals).ok()?;
    let remaining = remaining_after_transfer(&holding.balance, amount, decimals).ok()?;

    Some(TransferPreview {
        sending: format_token_amount(sending, decimals),
        remaining: format_token_amount(remaining, decimals),
        symbol: holding.token.symbol.clone(),
    })
}

/// Everything the creation modal draws in one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationView {
    pub title: &'static str,
    pub template_badge: Option<String>,
    pub recipient: String,
    pub amount: String,
    pub memo: String,
    /// Symbol shown inside the amount field.
    pub amount_suffix: Option<String>,
    pub max_label: Option<String>,
    pub amount_error: Option<String>,
    pub preview: Option<TransferPreview>,
    pub loading: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub can_add_custom_token: bool,
}

impl CreationView {
    /// `None` when the modal is closed.
    pub fn build(props: &CreationProps<'_>) -> Option<Self> {
        if !props.is_open {
            return None;
        }
        let holding = selected_holding(props.holdings, props.selected_token);

        Some(Self {
            title: TITLE,
            template_badge: props
                .selected_template_name
                .map(|name| format!("Template: {}", name)),
            recipient: props.draft.recipient.clone(),
            amount: props.draft.amount.clone(),
            memo: props.draft.memo.clone(),
            amount_suffix: props.selected_token.map(|t| t.symbol.clone()),
            max_label: holding.map(|h| {
                format!(
                    "Max: {} {}",
                    format_token_balance(&h.balance, h.token.decimals),
                    h.token.symbol
                )
            }),
            amount_error: props.amount_error.map(str::to_owned),
            preview: transfer_preview(holding, &props.draft.amount, props.amount_error),
            loading: props.loading,
            submit_enabled: submit_enabled(props.loading, props.amount_error, props.draft),
            submit_label: if props.loading {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            can_add_custom_token: props.custom_token_resolver.is_some(),
        })
    }
}

impl<'a> CreationProps<'a> {
    pub fn selected_holding(&self) -> Option<&'a TokenHolding> {
        selected_holding(self.holdings, self.selected_token)
    }

    /// Map one UI event onto the callbacks it fires, in firing order.
    pub fn resolve(&self, event: CreationEvent) -> Vec<CreationCallback> {
        if !self.is_open {
            return Vec::new();
        }
        match event {
            CreationEvent::Close => vec![CreationCallback::Close],
            CreationEvent::Submit(submit) => {
                if submit_enabled(self.loading, self.amount_error, self.draft) {
                    vec![CreationCallback::Submit(submit)]
                } else {
                    Vec::new()
                }
            }
            CreationEvent::RecipientEdited(value) => {
                vec![CreationCallback::FieldChange(DraftField::Recipient, value)]
            }
            CreationEvent::AmountEdited(raw) => vec![CreationCallback::FieldChange(
                DraftField::Amount,
                sanitize_amount(&raw),
            )],
            CreationEvent::MemoEdited(value) => {
                vec![CreationCallback::FieldChange(DraftField::Memo, value)]
            }
            CreationEvent::TokenChosen(token) => vec![
                CreationCallback::FieldChange(DraftField::Token, token.address.clone()),
                CreationCallback::TokenSelect(token),
            ],
            // The balance is already well-formed, so it bypasses the sanitizer.
            CreationEvent::SetMax => self
                .selected_holding()
                .map(|h| CreationCallback::FieldChange(DraftField::Amount, h.balance.clone()))
                .into_iter()
                .collect(),
            CreationEvent::OpenTemplateSelector => vec![CreationCallback::OpenTemplateSelector],
            CreationEvent::SaveAsTemplate => vec![CreationCallback::SaveAsTemplate],
        }
    }

    /// Resolve an event and deliver its callbacks to `handler`.
    pub fn dispatch<H: ProposalCreationHandler + ?Sized>(&self, event: CreationEvent, handler: &mut H) {
        for callback in self.resolve(event) {
            callback.invoke(handler);
        }
    }
}
