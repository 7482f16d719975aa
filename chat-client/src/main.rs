use chat_client::app::App;
use chat_client::config::{self, Config};
use chat_client::debug;
use chat_client::ui::ChatClientApp;
use chat_client::utils::runtime::TOKIO_RT;

fn main() -> eframe::Result<()> {
    debug::init();

    let (config, errors) = Config::from_env_or_defaults();
    for e in &errors {
        tracing::error!(error = %e, "Invalid configuration variable, using its default");
    }
    if config::init_config(config).is_err() {
        tracing::warn!("Configuration already initialized");
    }
    let config = config::config();

    tracing::info!(
        api_base_url = %config.api_base_url,
        lang = %config.lang,
        "Starting chat client"
    );

    // Handlers spawn onto the ambient runtime.
    let _enter = TOKIO_RT.enter();
    let app = App::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.as_str())
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([360.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(|cc| Ok(Box::new(ChatClientApp::new(cc, app)))),
    )
}
