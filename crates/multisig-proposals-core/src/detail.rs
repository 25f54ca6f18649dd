//! View logic of the read-only proposal detail modal.

use crate::domain::ProposalRecord;
use crate::ports::ProposalDetailHandler;

pub const EMPTY_TITLE: &str = "Proposal details";
pub const EMPTY_MESSAGE: &str = "No proposal selected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Text,
    /// Rendered monospace with copy / explorer affordances.
    Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
    pub kind: RowKind,
}

impl DetailRow {
    fn text(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            kind: RowKind::Text,
        }
    }

    fn address(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_owned(),
            kind: RowKind::Address,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Fields {
        rows: Vec<DetailRow>,
        approval_progress: f32,
    },
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub body: DetailBody,
}

impl DetailView {
    /// `None` when the modal is closed.
    pub fn build(is_open: bool, proposal: Option<&ProposalRecord>) -> Option<Self> {
        if !is_open {
            return None;
        }
        let Some(p) = proposal else {
            return Some(Self {
                title: EMPTY_TITLE.to_owned(),
                body: DetailBody::Empty(EMPTY_MESSAGE),
            });
        };

        let rows = vec![
            DetailRow::text("Memo", p.memo.clone()),
            DetailRow::text("Amount", format!("{} {}", p.amount, p.token)),
            DetailRow::text("Status", p.status.clone()),
            DetailRow::text("Approvals", format!("{}/{}", p.approvals, p.threshold)),
            DetailRow::address("Recipient", &p.recipient),
            DetailRow::address("Proposer", &p.proposer),
            DetailRow::text("Created", p.created_at.clone()),
        ];

        Some(Self {
            title: format!("Proposal #{}", p.id),
            body: DetailBody::Fields {
                rows,
                approval_progress: approval_progress(p.approvals, p.threshold),
            },
        })
    }
}

/// Fraction of the threshold reached, clamped to `[0, 1]`.
pub fn approval_progress(approvals: u32, threshold: u32) -> f32 {
    if threshold == 0 {
        return 0.0;
    }
    (approvals as f32 / threshold as f32).clamp(0.0, 1.0)
}

/// Pointer interaction with the detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    /// Click on the dimmed backdrop outside the panel.
    OverlayClicked,
    /// Click anywhere on the panel itself.
    PanelClicked,
    CloseClicked,
}

impl DetailEvent {
    pub fn closes(self) -> bool {
        match self {
            DetailEvent::OverlayClicked | DetailEvent::CloseClicked => true,
            DetailEvent::PanelClicked => false,
        }
    }

    pub fn dispatch<H: ProposalDetailHandler + ?Sized>(self, handler: &mut H) {
        if self.closes() {
            handler.on_close();
        }
    }
}
