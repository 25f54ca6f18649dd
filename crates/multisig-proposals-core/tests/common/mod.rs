#![allow(dead_code)]

use multisig_proposals_core::{
    DraftField, ProposalCreationHandler, ProposalDetailHandler, ProposalDraft, ProposalRecord,
    SubmitEvent, TokenHolding, TokenInfo,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Close,
    Submit(SubmitEvent),
    FieldChange(DraftField, String),
    TokenSelect(TokenInfo),
    OpenTemplateSelector,
    SaveAsTemplate,
}

#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub calls: Vec<Call>,
}

impl ProposalCreationHandler for RecordingHandler {
    fn on_close(&mut self) {
        self.calls.push(Call::Close);
    }

    fn on_submit(&mut self, event: SubmitEvent) {
        self.calls.push(Call::Submit(event));
    }

    fn on_field_change(&mut self, field: DraftField, value: String) {
        self.calls.push(Call::FieldChange(field, value));
    }

    fn on_token_select(&mut self, token: TokenInfo) {
        self.calls.push(Call::TokenSelect(token));
    }

    fn on_open_template_selector(&mut self) {
        self.calls.push(Call::OpenTemplateSelector);
    }

    fn on_save_as_template(&mut self) {
        self.calls.push(Call::SaveAsTemplate);
    }
}

#[derive(Debug, Default)]
pub struct CloseCounter {
    pub closes: usize,
}

impl ProposalDetailHandler for CloseCounter {
    fn on_close(&mut self) {
        self.closes += 1;
    }
}

pub fn xlm() -> TokenInfo {
    TokenInfo {
        address: "CDLZFC3SYJYDZT7K67VZ75HPJVIEUVNIXF47ZG2FB2RMQQVU2HHGCYSC".to_owned(),
        symbol: "XLM".to_owned(),
        decimals: 7,
        name: Some("Stellar Lumens".to_owned()),
    }
}

pub fn usdc() -> TokenInfo {
    TokenInfo {
        address: "CCW67TSZV3SSS2HXMBQ5JFGCKJNXKZM7UQUWUZPUTHXSTZLEO7SJMI75".to_owned(),
        symbol: "USDC".to_owned(),
        decimals: 6,
        name: None,
    }
}

pub fn holdings() -> Vec<TokenHolding> {
    vec![
        TokenHolding {
            token: xlm(),
            balance: "42.5".to_owned(),
        },
        TokenHolding {
            token: usdc(),
            balance: "10".to_owned(),
        },
    ]
}

pub fn filled_draft() -> ProposalDraft {
    ProposalDraft {
        recipient: "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H".to_owned(),
        token: usdc().address,
        amount: "5".to_owned(),
        memo: "payroll".to_owned(),
    }
}

pub fn record() -> ProposalRecord {
    ProposalRecord {
        id: 7,
        proposer: "GAPROPOSER".to_owned(),
        recipient: "GBRECIPIENT".to_owned(),
        amount: "250".to_owned(),
        token: "USDC".to_owned(),
        memo: "Q3 grant".to_owned(),
        status: "Pending".to_owned(),
        approvals: 1,
        threshold: 2,
        created_at: "2026-10-01 12:00 UTC".to_owned(),
    }
}
