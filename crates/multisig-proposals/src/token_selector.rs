//! Token picker used by the creation modal.
//!
//! Lists the account's holdings and, when a resolver is supplied, lets the
//! user add a token by contract address. Resolution runs off the UI thread and
//! its result is polled from a shared slot each frame. The selector keeps its
//! own state in egui memory, keyed by the widget id.

use std::sync::{Arc, Mutex};

use eframe::egui;
use multisig_proposals_core::{
    format_token_balance, CustomTokenResolver, PortError, TokenHolding, TokenInfo,
};

use crate::ui;

type ResolveSlot = Arc<Mutex<Option<Result<Option<TokenInfo>, PortError>>>>;

#[derive(Clone, Default)]
struct SelectorState {
    custom_address: String,
    pending: Option<ResolveSlot>,
    status: Option<String>,
}

pub struct TokenSelector<'a> {
    pub id_salt: &'a str,
    pub tokens: &'a [TokenHolding],
    pub selected_token: Option<&'a TokenInfo>,
    pub on_add_custom_token: Option<&'a dyn CustomTokenResolver>,
    pub show_balance: bool,
    pub placeholder: &'a str,
}

impl TokenSelector<'_> {
    /// Draw the selector; returns the token picked this frame, if any.
    pub fn show(self, ui: &mut egui::Ui) -> Option<TokenInfo> {
        let id = ui.make_persistent_id(self.id_salt);
        let mut state = ui.data_mut(|d| d.get_temp::<SelectorState>(id).unwrap_or_default());
        let mut chosen = None;

        let selected_text = self
            .selected_token
            .map(|t| t.symbol.clone())
            .unwrap_or_else(|| self.placeholder.to_owned());

        egui::ComboBox::from_id_salt(id.with("combo"))
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                if self.tokens.is_empty() {
                    ui.label(egui::RichText::new("No tokens available").weak());
                }
                for holding in self.tokens {
                    let is_selected = self
                        .selected_token
                        .is_some_and(|t| t.address == holding.token.address);
                    let label = if self.show_balance {
                        format!(
                            "{}   {}",
                            holding.token.symbol,
                            format_token_balance(&holding.balance, holding.token.decimals)
                        )
                    } else {
                        holding.token.symbol.clone()
                    };
                    let response = ui.selectable_label(is_selected, label);
                    let response = match &holding.token.name {
                        Some(name) => response.on_hover_text(name.as_str()),
                        None => response,
                    };
                    if response.clicked() {
                        chosen = Some(holding.token.clone());
                    }
                }
            });

        if let Some(resolver) = self.on_add_custom_token {
            if let Some(token) = custom_token_row(ui, &mut state, resolver) {
                chosen = Some(token);
            }
        }

        ui.data_mut(|d| d.insert_temp(id, state));
        chosen
    }
}

fn custom_token_row(
    ui: &mut egui::Ui,
    state: &mut SelectorState,
    resolver: &dyn CustomTokenResolver,
) -> Option<TokenInfo> {
    let resolved = poll_pending(state);

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.custom_address)
                .hint_text("Custom token address (C...)")
                .desired_width((ui.available_width() - 70.0).max(120.0))
                .font(egui::TextStyle::Monospace),
        );
        let busy = state.pending.is_some();
        let can_add = !busy && !state.custom_address.trim().is_empty();
        if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
            state.status = None;
            state.pending = Some(spawn_resolve(ui.ctx(), resolver, &state.custom_address));
        }
        if busy {
            ui.spinner();
        }
    });

    if let Some(status) = &state.status {
        ui::error_message(ui, status);
    }

    resolved
}

fn poll_pending(state: &mut SelectorState) -> Option<TokenInfo> {
    let slot = state.pending.as_ref()?;
    let result = {
        let mut guard = slot.lock().unwrap_or_else(|e| e.into_inner());
        guard.take()
    }?;
    state.pending = None;

    match result {
        Ok(Some(token)) => {
            tracing::info!("Added custom token {} ({})", token.symbol, token.address);
            state.custom_address.clear();
            state.status = None;
            Some(token)
        }
        Ok(None) => {
            state.status = Some("Token not found".to_owned());
            None
        }
        Err(e) => {
            tracing::warn!("Custom token lookup failed: {}", e);
            state.status = Some(e.to_string());
            None
        }
    }
}

fn spawn_resolve(ctx: &egui::Context, resolver: &dyn CustomTokenResolver, address: &str) -> ResolveSlot {
    let slot: ResolveSlot = Arc::new(Mutex::new(None));
    let result = Arc::clone(&slot);
    let future = resolver.resolve(address);
    let ctx = ctx.clone();

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::spawn_local;
        spawn_local(async move {
            let outcome = future.await;
            *result.lock().unwrap_or_else(|e| e.into_inner()) = Some(outcome);
            ctx.request_repaint();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::thread::spawn(move || {
            let outcome = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(future),
                Err(e) => Err(PortError::Transport(format!("failed to start runtime: {e}"))),
            };
            *result.lock().unwrap_or_else(|e| e.into_inner()) = Some(outcome);
            ctx.request_repaint();
        });
    }

    slot
}
