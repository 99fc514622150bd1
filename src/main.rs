//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; rules live in the domain and use cases.

use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use virtual_campus::adapters::events::{ChannelEventPublisher, LogEventPublisher};
use virtual_campus::adapters::ui::tui::TuiInputPort;
use virtual_campus::ports::{ClassroomEventPort, InputPort};
use virtual_campus::shared::config::AppConfig;
use virtual_campus::usecases::{EventWorker, UniversityService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    let (cfg, cfg_error) = match AppConfig::load() {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.log_level_or_default())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }
    if let Some(e) = cfg_error {
        warn!(error = %e, "invalid configuration, using defaults");
    }

    virtual_campus::adapters::ui::init_ui(cfg.show_banner_or_default());

    // --- Classroom events: bounded channel -> worker -> log sink ---
    let event_buffer = cfg.event_buffer_or_default();
    info!(event_buffer, "classroom event buffer: {}", event_buffer);
    let (publisher, events_rx) = ChannelEventPublisher::channel(event_buffer);
    let sink: Arc<dyn ClassroomEventPort> = Arc::new(LogEventPublisher::new());
    let worker = tokio::spawn(EventWorker::new(events_rx, sink).run());

    // --- Services ---
    let events: Arc<dyn ClassroomEventPort> = Arc::new(publisher);
    let university = Arc::new(UniversityService::new(events));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&university),
        cfg.chat_sender_or_default(),
    ));

    // --- Run (main menu -> roster commands / virtual class) ---
    let outcome = input_port.run().await;

    // Dropping the last publisher closes the channel so the worker drains and exits.
    drop(input_port);
    drop(university);
    let handled = worker.await?;
    info!(handled, "classroom events processed");

    outcome.map_err(|e| anyhow::anyhow!("{}", e))
}
