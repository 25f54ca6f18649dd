//! Multisig Proposals: compose and inspect multisig transfer proposals

use eframe::egui;

mod app;
mod config;
mod creation_modal;
mod demo;
mod detail_modal;
mod token_selector;
mod ui;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    let (config, config_error) = config::AppConfig::load_or_default();

    // Initialize logging; RUST_LOG wins over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Starting Multisig Proposals on {}", config.network.as_str());
    if let Some(e) = config_error {
        tracing::warn!("Using default config: {:#}", e);
    }

    let [width, height] = config.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Multisig Proposals")
            .with_inner_size([width, height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Multisig Proposals",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    tracing_wasm::set_as_global_default();
    tracing::info!("Starting Multisig Proposals");

    let (config, config_error) = config::AppConfig::load_or_default();
    if let Some(e) = config_error {
        tracing::warn!("Using default config: {:#}", e);
    }

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            tracing::error!("Canvas element 'the_canvas_id' not found");
            return;
        };

        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::App::new(cc, config)))),
            )
            .await;
        if let Err(e) = started {
            tracing::error!("Failed to start eframe: {:?}", e);
        }
    });
}
