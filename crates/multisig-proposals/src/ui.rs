//! UI helper components

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(150, 110, 230);
pub const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);

/// Open URL in a new browser tab
#[cfg(target_arch = "wasm32")]
pub fn open_url_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_url_new_tab(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!("failed to open {}: {}", url, e);
    }
}

/// Copy to clipboard (platform-specific)
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let navigator = window.navigator();
        let clipboard = navigator.clipboard();
        let _ = clipboard.write_text(text);
    }
}

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Small grey label above a form control
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).color(egui::Color32::GRAY).size(13.0));
}

/// Rounded pill, used for the template badge
pub fn badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, ACCENT.linear_multiply(0.6)))
        .fill(ACCENT.linear_multiply(0.1))
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(10.0, 3.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(ACCENT));
        });
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("⚠").color(ERROR_RED));
        ui.label(egui::RichText::new(message).size(12.0).color(ERROR_RED));
    });
}

/// Success message display
pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(80, 200, 120)));
    });
}

// =============================================================================
// STYLED BUTTONS
// =============================================================================

/// Primary button with enabled state
pub fn primary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(ACCENT);
    ui.add_enabled(enabled, btn)
}

/// Secondary action button - subdued, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 34.0));
    ui.add(btn)
}

// =============================================================================
// VISUAL GROUPING
// =============================================================================

/// Render content in a subtle card/frame
pub fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents);
}

/// Label on the left, value pushed to the right edge
pub fn spread_row(ui: &mut egui::Ui, label: egui::RichText, value: egui::RichText) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(value);
        });
    });
}

// =============================================================================
// MODAL SCAFFOLDING
// =============================================================================

/// Full-screen dimmed backdrop that swallows clicks meant for the page below.
pub fn modal_backdrop(ctx: &egui::Context, id: egui::Id) -> egui::Response {
    egui::Area::new(id)
        .order(egui::Order::Middle)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(150));
            ui.allocate_rect(screen, egui::Sense::click())
        })
        .inner
}

/// Centered window-styled panel drawn above the backdrop.
pub fn modal_panel<R>(
    ctx: &egui::Context,
    id: egui::Id,
    order: egui::Order,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Area::new(id)
        .order(order)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_width(width);
                    egui::ScrollArea::vertical()
                        .max_height(ctx.screen_rect().height() * 0.85)
                        .show(ui, add_contents)
                        .inner
                })
                .inner
        })
}

/// Address shown monospace with copy and explorer buttons.
pub fn address_value(ui: &mut egui::Ui, address: &str, explorer_url: Option<String>) {
    ui.label(egui::RichText::new(address).monospace().size(12.0));
    if ui
        .small_button("📋")
        .on_hover_text("Copy to clipboard")
        .clicked()
    {
        copy_to_clipboard(address);
    }
    if let Some(url) = explorer_url {
        if ui
            .small_button("🔗")
            .on_hover_text("Open in block explorer")
            .clicked()
        {
            open_url_new_tab(&url);
        }
    }
}
