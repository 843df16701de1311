//! Application entry point: voice-to-UI console.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Create the [`tokio`] runtime.
//! 4. Build the [`Session`] and its [`SessionOrchestrator`].
//! 5. Spawn the orchestrator and an update printer.
//! 6. Read utterances from stdin (one per line) until EOF.
//!
//! Lines starting with `:` are console commands (`:delete <id>`, `:copy`,
//! `:copy-app`, `:save`, `:list`); everything else is treated as a finalised
//! transcript.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use voice_to_ui::{
    auth::StaticAuth,
    config::AppConfig,
    export::Exporter,
    session::{Session, SessionCommand, SessionOrchestrator, SessionUpdate},
    transcript::{parse_console_line, LineTranscriptSource, TranscriptSource},
};

// ---------------------------------------------------------------------------
// Update printer
// ---------------------------------------------------------------------------

async fn print_updates(mut update_rx: mpsc::Receiver<SessionUpdate>) {
    while let Some(update) = update_rx.recv().await {
        match update {
            SessionUpdate::ComponentsChanged { code, count } => {
                println!("--- {count} component(s) ---\n{code}\n");
            }
            SessionUpdate::TemplateResolved {
                code,
                component_type,
            } => {
                println!("--- template: {component_type} ---\n{code}\n");
            }
            SessionUpdate::Advisory(advisory) => println!("! {advisory}"),
            SessionUpdate::KeywordsDetected(words) => println!("keywords: {}", words.join(", ")),
            SessionUpdate::Exported(receipt) => println!("{receipt}"),
            SessionUpdate::Components(records) => match serde_json::to_string_pretty(&records) {
                Ok(json) => println!("{json}"),
                Err(e) => log::warn!("cannot serialise component list: {e}"),
            },
            SessionUpdate::ExportFailed(message) => println!("! export failed: {message}"),
            SessionUpdate::SignInRequired => println!("! Please sign in to generate components"),
        }
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("voice-to-ui starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    // 4. Session + orchestrator
    let session = Session::from_config(&config).context("invalid command patterns in settings")?;
    let orchestrator = SessionOrchestrator::new(
        session,
        Arc::new(StaticAuth::signed_in()),
        Exporter::from_config(&config.export, &config.codegen),
    );

    rt.block_on(async move {
        // 5. Channels and tasks
        let (command_tx, command_rx) = mpsc::channel::<SessionCommand>(16);
        let (update_tx, update_rx) = mpsc::channel::<SessionUpdate>(64);

        let orchestrator_task = tokio::spawn(orchestrator.run(command_rx, update_tx));
        let printer_task = tokio::spawn(print_updates(update_rx));

        // 6. Stdin utterances
        let mut source = LineTranscriptSource::stdin();
        while let Some(line) = source.next_transcript().await {
            let Some(command) = parse_console_line(&line) else {
                continue;
            };
            if command_tx.send(command).await.is_err() {
                log::warn!("orchestrator stopped; ignoring further input");
                break;
            }
        }

        drop(command_tx);
        orchestrator_task.await.context("orchestrator task failed")?;
        printer_task.await.context("printer task failed")?;
        log::info!("voice-to-ui shutting down");
        Ok::<_, anyhow::Error>(())
    })
}
