//! Create-proposal modal

use eframe::egui;
use multisig_proposals_core::creation::{AMOUNT_HINT, MEMO_HINT, RECIPIENT_HINT};
use multisig_proposals_core::{CreationEvent, CreationProps, CreationView, SubmitEvent};

use crate::token_selector::TokenSelector;
use crate::ui;

const MODAL_WIDTH: f32 = 560.0;

/// Draw the modal for this frame and report what the user did.
/// Nothing is drawn and no events are produced while the modal is closed.
pub fn render(ctx: &egui::Context, props: &CreationProps<'_>) -> Vec<CreationEvent> {
    let Some(view) = CreationView::build(props) else {
        return Vec::new();
    };
    let mut events = Vec::new();

    ui::modal_backdrop(ctx, egui::Id::new("proposal_creation_backdrop"));
    ui::modal_panel(
        ctx,
        egui::Id::new("proposal_creation_modal"),
        egui::Order::Foreground,
        MODAL_WIDTH,
        |ui| render_form(ui, props, &view, &mut events),
    );

    events
}

fn render_form(
    ui: &mut egui::Ui,
    props: &CreationProps<'_>,
    view: &CreationView,
    events: &mut Vec<CreationEvent>,
) {
    // Header
    ui.horizontal(|ui| {
        ui::styled_heading(ui, view.title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Close").clicked() {
                events.push(CreationEvent::Close);
            }
            if let Some(badge) = &view.template_badge {
                ui::badge(ui, badge);
            }
        });
    });
    ui.add_space(12.0);

    // Recipient
    ui::field_label(ui, "Recipient Address");
    let mut recipient = view.recipient.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut recipient)
            .hint_text(RECIPIENT_HINT)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace),
    );
    if response.changed() {
        events.push(CreationEvent::RecipientEdited(recipient));
    }
    if submitted_with_enter(ui, &response) {
        events.push(CreationEvent::Submit(SubmitEvent::enter_key()));
    }
    ui.add_space(10.0);

    // Token
    ui::field_label(ui, "Select Token");
    let chosen = TokenSelector {
        id_salt: "proposal_token_selector",
        tokens: props.holdings,
        selected_token: props.selected_token,
        on_add_custom_token: props
            .custom_token_resolver
            .filter(|_| view.can_add_custom_token),
        show_balance: true,
        placeholder: "Select a token",
    }
    .show(ui);
    if let Some(token) = chosen {
        events.push(CreationEvent::TokenChosen(token));
    }
    ui.add_space(10.0);

    // Amount
    ui.horizontal(|ui| {
        ui::field_label(ui, "Amount");
        if let Some(max_label) = &view.max_label {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let max = egui::RichText::new(max_label.as_str()).size(12.0).color(ui::ACCENT);
                if ui.add(egui::Button::new(max).frame(false)).clicked() {
                    events.push(CreationEvent::SetMax);
                }
            });
        }
    });

    let border = if view.amount_error.is_some() {
        egui::Stroke::new(1.0, ui::ERROR_RED)
    } else {
        ui.visuals().widgets.inactive.bg_stroke
    };
    egui::Frame::none()
        .stroke(border)
        .fill(ui.visuals().extreme_bg_color)
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 4.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let suffix_width = if view.amount_suffix.is_some() { 60.0 } else { 0.0 };
                let mut amount = view.amount.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut amount)
                        .hint_text(AMOUNT_HINT)
                        .frame(false)
                        .desired_width(ui.available_width() - suffix_width)
                        .font(egui::TextStyle::Monospace),
                );
                if response.changed() {
                    events.push(CreationEvent::AmountEdited(amount));
                }
                if submitted_with_enter(ui, &response) {
                    events.push(CreationEvent::Submit(SubmitEvent::enter_key()));
                }
                if let Some(symbol) = &view.amount_suffix {
                    ui.label(egui::RichText::new(symbol.as_str()).color(egui::Color32::GRAY));
                }
            });
        });
    if let Some(err) = &view.amount_error {
        ui.add_space(4.0);
        ui::error_message(ui, err);
    }
    ui.add_space(10.0);

    // Memo
    ui::field_label(ui, "Memo (Optional)");
    let mut memo = view.memo.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut memo)
                .hint_text(MEMO_HINT)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        events.push(CreationEvent::MemoEdited(memo));
    }

    // Transfer preview
    if let Some(preview) = &view.preview {
        ui.add_space(10.0);
        ui::card(ui, |ui| {
            ui::spread_row(
                ui,
                egui::RichText::new("You're sending").color(egui::Color32::GRAY),
                egui::RichText::new(format!("{} {}", preview.sending, preview.symbol)).strong(),
            );
            ui::spread_row(
                ui,
                egui::RichText::new("Remaining balance after transfer")
                    .size(12.0)
                    .weak(),
                egui::RichText::new(format!("{} {}", preview.remaining, preview.symbol))
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
        });
    }

    // Actions
    ui.add_space(14.0);
    ui.horizontal(|ui| {
        if ui::secondary_button(ui, "Use Template").clicked() {
            events.push(CreationEvent::OpenTemplateSelector);
        }
        if ui::secondary_button(ui, "Save as Template").clicked() {
            events.push(CreationEvent::SaveAsTemplate);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui::primary_button_enabled(ui, view.submit_label, view.submit_enabled).clicked() {
                events.push(CreationEvent::Submit(SubmitEvent::button()));
            }
            if view.loading {
                ui.spinner();
            }
            if ui::secondary_button(ui, "Cancel").clicked() {
                events.push(CreationEvent::Close);
            }
        });
    });
}

fn submitted_with_enter(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
