//! Read-only proposal detail modal

use eframe::egui;
use multisig_proposals_core::{DetailBody, DetailEvent, DetailView, RowKind};

use crate::config::AppConfig;
use crate::ui;

const MODAL_WIDTH: f32 = 460.0;

/// Draw the modal and report pointer interaction. `view` is `None` while the
/// modal is closed.
pub fn render(ctx: &egui::Context, view: Option<DetailView>, config: &AppConfig) -> Vec<DetailEvent> {
    let Some(view) = view else {
        return Vec::new();
    };
    let mut events = Vec::new();

    let backdrop = ui::modal_backdrop(ctx, egui::Id::new("proposal_detail_backdrop"));
    let panel = ui::modal_panel(
        ctx,
        egui::Id::new("proposal_detail_modal"),
        egui::Order::Foreground,
        MODAL_WIDTH,
        |ui| render_body(ui, &view, config, &mut events),
    );

    // Pointer position decides which surface a click belongs to, so a click
    // on the panel can never reach the backdrop's close handler.
    let panel_rect = panel.response.rect;
    let click_pos = ctx.input(|i| {
        if i.pointer.primary_clicked() {
            i.pointer.interact_pos()
        } else {
            None
        }
    });
    match click_pos {
        Some(pos) if panel_rect.contains(pos) => events.push(DetailEvent::PanelClicked),
        Some(_) if backdrop.clicked() => events.push(DetailEvent::OverlayClicked),
        _ => {}
    }

    events
}

fn render_body(
    ui: &mut egui::Ui,
    view: &DetailView,
    config: &AppConfig,
    events: &mut Vec<DetailEvent>,
) {
    ui.horizontal(|ui| {
        ui::styled_heading(ui, &view.title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Close").clicked() {
                events.push(DetailEvent::CloseClicked);
            }
        });
    });
    ui.separator();
    ui.add_space(6.0);

    match &view.body {
        DetailBody::Empty(message) => {
            ui.label(egui::RichText::new(*message).color(egui::Color32::GRAY));
        }
        DetailBody::Fields {
            rows,
            approval_progress,
        } => {
            egui::Grid::new("proposal_detail_rows")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for row in rows {
                        ui.label(
                            egui::RichText::new(format!("{}:", row.label)).color(egui::Color32::GRAY),
                        );
                        match row.kind {
                            RowKind::Text => {
                                ui.label(egui::RichText::new(row.value.as_str()).strong());
                            }
                            RowKind::Address => {
                                ui.horizontal(|ui| {
                                    ui::address_value(ui, &row.value, config.explorer_url(&row.value));
                                });
                            }
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
            ui.add(
                egui::ProgressBar::new(*approval_progress)
                    .desired_width(f32::INFINITY)
                    .text("Approval progress"),
            );
        }
    }
}
