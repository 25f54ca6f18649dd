//! Main application state and update loop
//!
//! `App` is the parent of both modals: it owns the draft, the selected token,
//! the holdings and the session's proposals, and receives every modal
//! callback through the handler traits.

use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use multisig_proposals_core::{
    format_token_balance, parse_token_amount, selected_holding, CreationCallback, CreationProps,
    CustomTokenResolver, DetailView, DraftField, ProposalCreationHandler, ProposalDetailHandler,
    ProposalDraft, ProposalRecord, SubmitEvent, TokenHolding, TokenInfo,
};
use web_time::Instant;

use crate::config::AppConfig;
use crate::demo::{self, DemoFixture, RegistryResolver};
use crate::{creation_modal, detail_modal, ui};

const CUSTOM_TOKENS_STORAGE_KEY: &str = "multisig_proposals_custom_tokens";

/// A named snapshot of a draft, kept for the current session only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalTemplate {
    pub name: String,
    pub draft: ProposalDraft,
}

pub struct App {
    config: AppConfig,
    /// Tokens held by the acting account
    holdings: Vec<TokenHolding>,
    /// Tokens added by address; persisted across sessions
    custom_tokens: Vec<TokenInfo>,
    resolver: Arc<dyn CustomTokenResolver>,

    // Creation modal
    creation_open: bool,
    draft: ProposalDraft,
    selected_token: Option<TokenInfo>,
    selected_template_name: Option<String>,
    /// Set while a submission is in flight
    pending_submit: Option<Instant>,

    // Templates
    templates: Vec<ProposalTemplate>,
    template_picker_open: bool,

    // Proposals + detail modal
    proposals: Vec<ProposalRecord>,
    detail_open: bool,
    detail_index: Option<usize>,

    notice: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let fixture = demo::load_fixture().unwrap_or_else(|e| {
            tracing::warn!("Starting without demo data: {:#}", e);
            DemoFixture::default()
        });
        let custom_tokens = load_custom_tokens(cc.storage);
        Self::from_parts(config, fixture, custom_tokens)
    }

    pub fn from_parts(config: AppConfig, fixture: DemoFixture, custom_tokens: Vec<TokenInfo>) -> Self {
        let mut holdings = fixture.holdings;
        for token in &custom_tokens {
            if !holdings.iter().any(|h| h.token.address == token.address) {
                holdings.push(TokenHolding {
                    token: token.clone(),
                    balance: "0".to_owned(),
                });
            }
        }
        tracing::info!(
            "Loaded {} holdings and {} proposals",
            holdings.len(),
            fixture.proposals.len()
        );

        Self {
            config,
            holdings,
            custom_tokens,
            resolver: Arc::new(RegistryResolver::new(fixture.registry)),
            creation_open: false,
            draft: ProposalDraft::default(),
            selected_token: None,
            selected_template_name: None,
            pending_submit: None,
            templates: Vec::new(),
            template_picker_open: false,
            proposals: fixture.proposals,
            detail_open: false,
            detail_index: None,
            notice: None,
        }
    }

    fn loading(&self) -> bool {
        self.pending_submit.is_some()
    }

    /// Validation message for the entered amount, if any.
    pub fn amount_error(&self) -> Option<String> {
        if self.draft.amount.is_empty() {
            return None;
        }
        let holding = selected_holding(&self.holdings, self.selected_token.as_ref())?;
        let decimals = holding.token.decimals;

        let amount = match parse_token_amount(&self.draft.amount, decimals) {
            Ok(amount) => amount,
            Err(e) => return Some(format!("Invalid amount: {}", e)),
        };
        if amount.is_zero() {
            return Some("Amount must be greater than zero".to_owned());
        }
        let balance = parse_token_amount(&holding.balance, decimals).unwrap_or_default();
        if amount > balance {
            return Some(format!(
                "Insufficient balance. Available: {} {}",
                format_token_balance(&holding.balance, decimals),
                holding.token.symbol
            ));
        }
        None
    }

    fn open_creation(&mut self) {
        self.creation_open = true;
        self.notice = None;
    }

    fn open_detail(&mut self, index: usize) {
        self.detail_index = Some(index);
        self.detail_open = true;
    }

    /// Finish an in-flight submission once its simulated latency has passed.
    fn poll_submission(&mut self, ctx: &egui::Context) {
        let Some(started) = self.pending_submit else {
            return;
        };
        let latency = Duration::from_millis(self.config.submit_latency_ms);
        if started.elapsed() >= latency {
            self.complete_submission();
        } else {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }

    fn complete_submission(&mut self) {
        self.pending_submit = None;
        let symbol = self
            .selected_token
            .as_ref()
            .map(|t| t.symbol.clone())
            .unwrap_or_default();
        let id = self.proposals.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        let record = ProposalRecord {
            id,
            proposer: self.config.proposer.clone(),
            recipient: self.draft.recipient.trim().to_owned(),
            amount: self.draft.amount.clone(),
            token: symbol,
            memo: self.draft.memo.clone(),
            status: "Pending".to_owned(),
            approvals: 1,
            threshold: self.config.approval_threshold,
            created_at: chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        };
        tracing::info!(
            "Proposal #{} created: {} {} to {}",
            record.id,
            record.amount,
            record.token,
            record.recipient
        );
        self.notice = Some(format!("Proposal #{} submitted", record.id));
        self.proposals.push(record);

        self.draft = ProposalDraft::default();
        self.selected_token = None;
        self.selected_template_name = None;
        self.creation_open = false;
    }

    fn apply_template(&mut self, index: usize) {
        let Some(template) = self.templates.get(index).cloned() else {
            return;
        };
        tracing::info!("Applying template {}", template.name);
        self.selected_token = self
            .holdings
            .iter()
            .find(|h| h.token.address == template.draft.token)
            .map(|h| h.token.clone());
        self.draft = template.draft;
        self.selected_template_name = Some(template.name);
        self.template_picker_open = false;
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    fn render_proposals(&mut self, ui: &mut egui::Ui) {
        ui::styled_heading(ui, "Proposals");
        ui.add_space(8.0);

        if let Some(notice) = &self.notice {
            ui::success_message(ui, notice);
            ui.add_space(6.0);
        }

        if self.proposals.is_empty() {
            ui.label(egui::RichText::new("No proposals yet.").weak());
            return;
        }

        let mut clicked = None;
        egui::Grid::new("proposals_grid")
            .num_columns(6)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.strong("#");
                ui.strong("Memo");
                ui.strong("Amount");
                ui.strong("Status");
                ui.strong("Approvals");
                ui.label("");
                ui.end_row();

                for (index, proposal) in self.proposals.iter().enumerate().rev() {
                    ui.label(proposal.id.to_string());
                    ui.label(proposal.memo.as_str());
                    ui.label(format!("{} {}", proposal.amount, proposal.token));
                    ui.label(proposal.status.as_str());
                    ui.label(format!("{}/{}", proposal.approvals, proposal.threshold));
                    if ui.small_button("View").clicked() {
                        clicked = Some(index);
                    }
                    ui.end_row();
                }
            });

        if let Some(index) = clicked {
            self.open_detail(index);
        }
    }

    fn show_creation_modal(&mut self, ctx: &egui::Context) {
        let amount_error = self.amount_error();
        let callbacks: Vec<CreationCallback> = {
            let props = CreationProps {
                is_open: self.creation_open,
                loading: self.loading(),
                selected_template_name: self.selected_template_name.as_deref(),
                draft: &self.draft,
                holdings: &self.holdings,
                selected_token: self.selected_token.as_ref(),
                amount_error: amount_error.as_deref(),
                custom_token_resolver: Some(self.resolver.as_ref()),
            };
            creation_modal::render(ctx, &props)
                .into_iter()
                .flat_map(|event| props.resolve(event))
                .collect()
        };
        for callback in callbacks {
            callback.invoke(self);
        }
    }

    fn show_detail_modal(&mut self, ctx: &egui::Context) {
        let proposal = self.detail_index.and_then(|i| self.proposals.get(i));
        let view = DetailView::build(self.detail_open, proposal);
        for event in detail_modal::render(ctx, view, &self.config) {
            event.dispatch(self);
        }
    }

    fn show_template_picker(&mut self, ctx: &egui::Context) {
        if !(self.creation_open && self.template_picker_open) {
            return;
        }
        let mut picked = None;
        let mut close = false;
        ui::modal_panel(
            ctx,
            egui::Id::new("template_picker"),
            egui::Order::Tooltip,
            320.0,
            |ui| {
                ui::styled_heading(ui, "Templates");
                ui.separator();
                if self.templates.is_empty() {
                    ui.label(egui::RichText::new("No templates saved in this session.").weak());
                }
                for (index, template) in self.templates.iter().enumerate() {
                    if ui.button(template.name.as_str()).clicked() {
                        picked = Some(index);
                    }
                }
                ui.add_space(8.0);
                if ui::secondary_button(ui, "Close").clicked() {
                    close = true;
                }
            },
        );
        if let Some(index) = picked {
            self.apply_template(index);
        } else if close {
            self.template_picker_open = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.poll_submission(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(
                    egui::RichText::new("🔐 Multisig Proposals")
                        .size(22.0)
                        .color(ui::ACCENT),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui::primary_button_enabled(ui, "➕ New Proposal", !self.creation_open).clicked() {
                        self.open_creation();
                    }
                });
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                self.render_proposals(ui);
                ui.add_space(20.0);
            });
        });

        self.show_creation_modal(ctx);
        self.show_template_picker(ctx);
        self.show_detail_modal(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match serde_json::to_string(&self.custom_tokens) {
            Ok(json) => storage.set_string(CUSTOM_TOKENS_STORAGE_KEY, json),
            Err(e) => tracing::warn!("Failed to save custom tokens: {}", e),
        }
    }
}

impl ProposalCreationHandler for App {
    fn on_close(&mut self) {
        self.creation_open = false;
        self.template_picker_open = false;
    }

    fn on_submit(&mut self, event: SubmitEvent) {
        if self.loading() {
            return;
        }
        tracing::info!("Submitting proposal ({:?})", event.trigger);
        self.pending_submit = Some(Instant::now());
    }

    fn on_field_change(&mut self, field: DraftField, value: String) {
        tracing::debug!("draft.{} = {:?}", field.as_str(), value);
        self.draft.set(field, value);
    }

    fn on_token_select(&mut self, token: TokenInfo) {
        if !self.holdings.iter().any(|h| h.token.address == token.address) {
            tracing::info!("Tracking new token {}", token.symbol);
            self.holdings.push(TokenHolding {
                token: token.clone(),
                balance: "0".to_owned(),
            });
            self.custom_tokens.push(token.clone());
        }
        self.selected_token = Some(token);
    }

    fn on_open_template_selector(&mut self) {
        self.template_picker_open = true;
    }

    fn on_save_as_template(&mut self) {
        let name = match self.draft.memo.trim() {
            "" => format!("Template {}", self.templates.len() + 1),
            memo => memo.to_owned(),
        };
        tracing::info!("Saved template {}", name);
        self.notice = Some(format!("Saved template \"{}\"", name));
        self.templates.push(ProposalTemplate {
            name,
            draft: self.draft.clone(),
        });
    }
}

impl ProposalDetailHandler for App {
    fn on_close(&mut self) {
        self.detail_open = false;
    }
}

fn load_custom_tokens(storage: Option<&dyn eframe::Storage>) -> Vec<TokenInfo> {
    storage
        .and_then(|s| s.get_string(CUSTOM_TOKENS_STORAGE_KEY))
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}
