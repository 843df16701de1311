//! Session orchestrator: drives the transcript → component → code loop.
//!
//! [`SessionOrchestrator`] owns a [`Session`] and responds to
//! [`SessionCommand`]s received over a `tokio::sync::mpsc` channel, emitting
//! [`SessionUpdate`]s on a second channel.
//!
//! # Flow
//!
//! ```text
//! SessionCommand::Transcript
//!   ├─ not signed in        → SignInRequired
//!   ├─ KeywordDetector      → KeywordsDetected      (when any)
//!   └─ Session::process
//!         ├─ list changed   → ComponentsChanged { code, count }
//!         ├─ template       → TemplateResolved  { code, component_type }
//!         └─ advisory       → Advisory
//!
//! SessionCommand::DeleteById  → ComponentsChanged   (when the id existed)
//! SessionCommand::ListComponents → Components
//!
//! SessionCommand::Export
//!   └─ spawn_blocking(Exporter::export) → Exported | ExportFailed
//! ```
//!
//! Commands are handled strictly one at a time; the list is never shared.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::auth::AuthProvider;
use crate::export::{ExportError, ExportTarget, Exporter};
use crate::transcript::KeywordDetector;

use super::engine::Session;
use super::state::{SessionCommand, SessionUpdate};

// ---------------------------------------------------------------------------
// SessionOrchestrator
// ---------------------------------------------------------------------------

/// Single-consumer event loop around a [`Session`].
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use tokio::sync::mpsc;
/// use voice_to_ui::auth::StaticAuth;
/// use voice_to_ui::config::AppConfig;
/// use voice_to_ui::export::Exporter;
/// use voice_to_ui::session::{Session, SessionCommand, SessionOrchestrator};
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let session = Session::from_config(&config).unwrap();
/// let orchestrator = SessionOrchestrator::new(
///     session,
///     Arc::new(StaticAuth::signed_in()),
///     Exporter::from_config(&config.export, &config.codegen),
/// );
///
/// let (cmd_tx, cmd_rx) = mpsc::channel(16);
/// let (update_tx, mut update_rx) = mpsc::channel(64);
/// tokio::spawn(orchestrator.run(cmd_rx, update_tx));
///
/// cmd_tx.send(SessionCommand::Transcript("create a button".into())).await.unwrap();
/// while let Some(update) = update_rx.recv().await {
///     println!("{update:?}");
/// }
/// # }
/// ```
pub struct SessionOrchestrator {
    session: Session,
    auth: Arc<dyn AuthProvider>,
    exporter: Exporter,
    keywords: KeywordDetector,
    /// Code most recently handed to the consumer; what an export sends.
    latest_artifact: Option<String>,
}

impl SessionOrchestrator {
    pub fn new(session: Session, auth: Arc<dyn AuthProvider>, exporter: Exporter) -> Self {
        Self {
            session,
            auth,
            exporter,
            keywords: KeywordDetector::new(),
            latest_artifact: None,
        }
    }

    // -----------------------------------------------------------------------
    // Main async loop
    // -----------------------------------------------------------------------

    /// Run until `commands` is closed.
    ///
    /// Updates that cannot be delivered (receiver dropped) are discarded.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<SessionCommand>,
        updates: mpsc::Sender<SessionUpdate>,
    ) {
        while let Some(command) = commands.recv().await {
            match command {
                SessionCommand::Transcript(text) => {
                    self.handle_transcript(&text, &updates).await;
                }
                SessionCommand::DeleteById(id) => {
                    self.handle_delete(&id, &updates).await;
                }
                SessionCommand::Export(target) => {
                    self.handle_export(target, &updates).await;
                }
                SessionCommand::ListComponents => {
                    let records = self.session.components().iter().cloned().collect();
                    emit(&updates, SessionUpdate::Components(records)).await;
                }
            }
        }

        log::info!("session: command channel closed, orchestrator shutting down");
    }

    // -----------------------------------------------------------------------
    // Command handlers
    // -----------------------------------------------------------------------

    async fn handle_transcript(&mut self, text: &str, updates: &mpsc::Sender<SessionUpdate>) {
        if !self.auth.is_authenticated() {
            log::warn!("session: transcript rejected, not signed in");
            emit(updates, SessionUpdate::SignInRequired).await;
            return;
        }

        let detected = self.keywords.detect(text);
        if !detected.is_empty() {
            log::debug!("session: keywords {detected:?}");
            emit(updates, SessionUpdate::KeywordsDetected(detected)).await;
        }

        let outcome = self.session.process(text);
        if outcome.is_skipped() {
            return;
        }

        if let Some(classification) = &outcome.classification {
            log::debug!(
                "session: action={:?} preset={} color={:?} size={} style={:?} position={:?} state={:?} animation={:?}",
                classification.action.map(|a| a.as_str()),
                classification.preset.as_str(),
                classification.color,
                classification.size,
                classification.style,
                classification.position,
                classification.state,
                classification.animation,
            );
        }

        let list_changed = outcome.change.is_some();
        if list_changed {
            let code = self.session.code();
            self.latest_artifact = Some(code.clone());
            let count = self.session.components().len();
            emit(updates, SessionUpdate::ComponentsChanged { code, count }).await;
        }

        if let Some(template) = outcome.template {
            // The flat module stays the export artifact whenever the list moved.
            if !list_changed {
                self.latest_artifact = Some(template.code.clone());
            }
            emit(
                updates,
                SessionUpdate::TemplateResolved {
                    code: template.code,
                    component_type: template.component_type,
                },
            )
            .await;
        }

        if let Some(advisory) = outcome.advisory {
            emit(updates, SessionUpdate::Advisory(advisory)).await;
        }
    }

    async fn handle_delete(&mut self, id: &str, updates: &mpsc::Sender<SessionUpdate>) {
        if !self.session.delete_by_id(id) {
            return;
        }
        let code = self.session.code();
        self.latest_artifact = Some(code.clone());
        let count = self.session.components().len();
        emit(updates, SessionUpdate::ComponentsChanged { code, count }).await;
    }

    /// Clipboard and file I/O block, so the export runs on the blocking pool.
    async fn handle_export(&mut self, target: ExportTarget, updates: &mpsc::Sender<SessionUpdate>) {
        let Some(code) = self.latest_artifact.clone() else {
            log::warn!("session: export requested before any code was generated");
            emit(
                updates,
                SessionUpdate::ExportFailed(ExportError::NothingToExport.to_string()),
            )
            .await;
            return;
        };

        let exporter = self.exporter.clone();
        let result = tokio::task::spawn_blocking(move || exporter.export(target, &code)).await;

        let update = match result {
            Ok(Ok(receipt)) => {
                log::info!("session: {receipt}");
                SessionUpdate::Exported(receipt)
            }
            Ok(Err(e)) => {
                log::warn!("session: {} export failed: {e}", target.as_str());
                SessionUpdate::ExportFailed(e.to_string())
            }
            Err(e) => {
                log::warn!("session: export task panicked: {e}");
                SessionUpdate::ExportFailed(format!("internal error: {e}"))
            }
        };
        emit(updates, update).await;
    }
}

async fn emit(updates: &mpsc::Sender<SessionUpdate>, update: SessionUpdate) {
    if updates.send(update).await.is_err() {
        log::debug!("session: update receiver dropped");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
