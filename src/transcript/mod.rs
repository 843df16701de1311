//! Transcript sources.
//!
//! Speech capture lives outside this crate; whatever does it delivers one
//! finalised utterance at a time through [`TranscriptSource`].
//!
//! * [`LineTranscriptSource`]: one utterance per line of any async reader
//!   (stdin in the binary).
//! * [`ScriptedTranscripts`]: a fixed queue, for tests and demos.
//! * [`parse_console_line`]: maps console lines to [`SessionCommand`]s,
//!   with `:`-prefixed lines reserved for non-speech commands.
//! * [`KeywordDetector`]: design vocabulary spotting.
//!
//! # Usage
//!
//! ```no_run
//! use voice_to_ui::transcript::{parse_console_line, LineTranscriptSource, TranscriptSource};
//!
//! # async fn example() {
//! let mut source = LineTranscriptSource::stdin();
//! while let Some(line) = source.next_transcript().await {
//!     if let Some(command) = parse_console_line(&line) {
//!         println!("{command:?}");
//!     }
//! }
//! # }
//! ```

pub mod keywords;
pub mod stdin;

pub use keywords::KeywordDetector;
pub use stdin::LineTranscriptSource;

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::export::ExportTarget;
use crate::session::SessionCommand;

// ---------------------------------------------------------------------------
// TranscriptSource
// ---------------------------------------------------------------------------

/// Producer of finalised transcripts.
///
/// Fires once per utterance; `None` means the source is exhausted.
#[async_trait]
pub trait TranscriptSource: Send {
    async fn next_transcript(&mut self) -> Option<String>;
}

/// Queue-backed source that yields a fixed script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTranscripts {
    queue: VecDeque<String>,
}

impl ScriptedTranscripts {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

#[async_trait]
impl TranscriptSource for ScriptedTranscripts {
    async fn next_transcript(&mut self) -> Option<String> {
        self.queue.pop_front()
    }
}

// ---------------------------------------------------------------------------
// parse_console_line
// ---------------------------------------------------------------------------

/// Map one console line to a session command.
///
/// | line              | command                          |
/// |-------------------|----------------------------------|
/// | `:delete <id>`    | `DeleteById(id)`                 |
/// | `:copy`           | `Export(Clipboard)`              |
/// | `:copy-app`       | `Export(FullApp)`                |
/// | `:save`           | `Export(File)`                   |
/// | `:list`           | `ListComponents`                 |
/// | anything else     | `Transcript(line)`               |
///
/// Blank lines and unknown `:` commands yield `None`.
pub fn parse_console_line(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Some(SessionCommand::Transcript(line.to_string()));
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("delete"), Some(id)) => Some(SessionCommand::DeleteById(id.to_string())),
        (Some("copy"), None) => Some(SessionCommand::Export(ExportTarget::Clipboard)),
        (Some("copy-app"), None) => Some(SessionCommand::Export(ExportTarget::FullApp)),
        (Some("save"), None) => Some(SessionCommand::Export(ExportTarget::File)),
        (Some("list"), None) => Some(SessionCommand::ListComponents),
        _ => {
            log::warn!("unknown console command: {line}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_source_drains_in_order() {
        let mut source = ScriptedTranscripts::new(["create a button", "delete it"]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_transcript().await.as_deref(), Some("create a button"));
        assert_eq!(source.next_transcript().await.as_deref(), Some("delete it"));
        assert_eq!(source.next_transcript().await, None);
    }

    #[test]
    fn plain_lines_are_transcripts() {
        assert_eq!(
            parse_console_line("  create a card \n"),
            Some(SessionCommand::Transcript("create a card".into()))
        );
    }

    #[test]
    fn colon_commands() {
        assert_eq!(
            parse_console_line(":delete abc123"),
            Some(SessionCommand::DeleteById("abc123".into()))
        );
        assert_eq!(
            parse_console_line(":copy"),
            Some(SessionCommand::Export(ExportTarget::Clipboard))
        );
        assert_eq!(
            parse_console_line(":copy-app"),
            Some(SessionCommand::Export(ExportTarget::FullApp))
        );
        assert_eq!(
            parse_console_line(":save"),
            Some(SessionCommand::Export(ExportTarget::File))
        );
        assert_eq!(parse_console_line(":list"), Some(SessionCommand::ListComponents));
    }

    #[test]
    fn blank_and_malformed_lines() {
        assert_eq!(parse_console_line(""), None);
        assert_eq!(parse_console_line(":delete"), None);
        assert_eq!(parse_console_line(":launch"), None);
    }
}
