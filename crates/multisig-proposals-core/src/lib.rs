pub mod amount;
pub mod creation;
pub mod detail;
pub mod domain;
pub mod ports;

pub use amount::{
    format_token_amount, format_token_balance, parse_token_amount, remaining_after_transfer,
    sanitize_amount, AmountError,
};
pub use creation::{
    selected_holding, submit_enabled, transfer_preview, CreationCallback, CreationEvent,
    CreationProps, CreationView, TransferPreview,
};
pub use detail::{approval_progress, DetailBody, DetailEvent, DetailRow, DetailView, RowKind};
pub use domain::{DraftField, ProposalDraft, ProposalRecord, TokenHolding, TokenInfo};
pub use ports::{
    CustomTokenResolver, PortError, ProposalCreationHandler, ProposalDetailHandler, SubmitEvent,
    SubmitTrigger, TokenFuture,
};
