use serde::{Deserialize, Serialize};

/// Token descriptor as handed out by the token list / custom token resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A token balance available to the acting account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    pub token: TokenInfo,
    /// Human-readable decimal string, e.g. `"42.5"`.
    pub balance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Recipient,
    Token,
    Amount,
    Memo,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Recipient => "recipient",
            DraftField::Token => "token",
            DraftField::Amount => "amount",
            DraftField::Memo => "memo",
        }
    }
}

/// In-progress proposal form data. Owned by the parent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDraft {
    pub recipient: String,
    pub token: String,
    pub amount: String,
    pub memo: String,
}

impl ProposalDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Recipient => self.recipient = value,
            DraftField::Token => self.token = value,
            DraftField::Amount => self.amount = value,
            DraftField::Memo => self.memo = value,
        }
    }
}

/// An already-created proposal, shown read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalRecord {
    pub id: u64,
    pub proposer: String,
    pub recipient: String,
    pub amount: String,
    /// Token symbol.
    pub token: String,
    pub memo: String,
    pub status: String,
    pub approvals: u32,
    pub threshold: u32,
    pub created_at: String,
}
