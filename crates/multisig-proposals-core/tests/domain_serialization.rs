use multisig_proposals_core::{ProposalRecord, TokenHolding};

#[test]
fn holding_deserializes_from_front_end_shape() {
    let json = r#"{
        "token": {"address": "CXLM", "symbol": "XLM", "decimals": 7},
        "balance": "100.5"
    }"#;
    let holding: TokenHolding = serde_json::from_str(json).expect("holding");
    assert_eq!(holding.token.symbol, "XLM");
    assert_eq!(holding.token.decimals, 7);
    assert!(holding.token.name.is_none());
    assert_eq!(holding.balance, "100.5");
}

#[test]
fn record_uses_camel_case_created_at() {
    let json = r#"{
        "id": 3,
        "proposer": "GA",
        "recipient": "GB",
        "amount": "1",
        "token": "XLM",
        "memo": "",
        "status": "Executed",
        "approvals": 2,
        "threshold": 2,
        "createdAt": "2026-01-01"
    }"#;
    let record: ProposalRecord = serde_json::from_str(json).expect("record");
    assert_eq!(record.created_at, "2026-01-01");

    let back = serde_json::to_value(&record).expect("serialize");
    assert_eq!(back["createdAt"], "2026-01-01");
}
