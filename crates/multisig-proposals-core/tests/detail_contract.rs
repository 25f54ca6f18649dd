mod common;

use multisig_proposals_core::detail::{EMPTY_MESSAGE, EMPTY_TITLE};
use multisig_proposals_core::{approval_progress, DetailBody, DetailEvent, DetailView, RowKind};

use common::{record, CloseCounter};

#[test]
fn closed_detail_modal_renders_nothing() {
    let proposal = record();
    assert!(DetailView::build(false, Some(&proposal)).is_none());
    assert!(DetailView::build(false, None).is_none());
}

#[test]
fn reopening_restores_the_same_content() {
    let proposal = record();
    let first = DetailView::build(true, Some(&proposal)).expect("open");
    assert!(DetailView::build(false, Some(&proposal)).is_none());
    let again = DetailView::build(true, Some(&proposal)).expect("open");
    assert_eq!(first, again);
}

#[test]
fn record_fields_are_interpolated_verbatim() {
    let proposal = record();
    let view = DetailView::build(true, Some(&proposal)).expect("open");
    assert_eq!(view.title, "Proposal #7");

    let DetailBody::Fields {
        rows,
        approval_progress: progress,
    } = view.body
    else {
        panic!("expected field rows");
    };
    let pairs: Vec<(&str, &str)> = rows.iter().map(|r| (r.label, r.value.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            ("Memo", "Q3 grant"),
            ("Amount", "250 USDC"),
            ("Status", "Pending"),
            ("Approvals", "1/2"),
            ("Recipient", "GBRECIPIENT"),
            ("Proposer", "GAPROPOSER"),
            ("Created", "2026-10-01 12:00 UTC"),
        ]
    );
    assert_eq!(rows[4].kind, RowKind::Address);
    assert_eq!(rows[5].kind, RowKind::Address);
    assert_eq!(progress, 0.5);
}

#[test]
fn missing_record_shows_placeholder_only() {
    let view = DetailView::build(true, None).expect("open");
    assert_eq!(view.title, EMPTY_TITLE);
    assert_eq!(view.body, DetailBody::Empty(EMPTY_MESSAGE));
}

#[test]
fn panel_click_never_closes() {
    let mut handler = CloseCounter::default();
    DetailEvent::PanelClicked.dispatch(&mut handler);
    DetailEvent::PanelClicked.dispatch(&mut handler);
    assert_eq!(handler.closes, 0);
}

#[test]
fn overlay_click_closes_exactly_once() {
    let mut handler = CloseCounter::default();
    DetailEvent::OverlayClicked.dispatch(&mut handler);
    assert_eq!(handler.closes, 1);
}

#[test]
fn close_button_closes() {
    let mut handler = CloseCounter::default();
    DetailEvent::CloseClicked.dispatch(&mut handler);
    assert_eq!(handler.closes, 1);
}

#[test]
fn approval_progress_is_clamped() {
    assert_eq!(approval_progress(0, 3), 0.0);
    assert_eq!(approval_progress(3, 3), 1.0);
    assert_eq!(approval_progress(5, 3), 1.0);
    assert_eq!(approval_progress(2, 0), 0.0);
}
