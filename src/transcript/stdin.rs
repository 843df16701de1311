//! Line-oriented transcript source.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use super::TranscriptSource;

/// Yields one transcript per line of an async reader.
///
/// Read errors end the stream after a warning.
pub struct LineTranscriptSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> LineTranscriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl LineTranscriptSource<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> TranscriptSource for LineTranscriptSource<R> {
    async fn next_transcript(&mut self) -> Option<String> {
        match self.lines.next_line().await {
            Ok(line) => line,
            Err(e) => {
                log::warn!("transcript: read failed: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn yields_each_line() {
        let input: &[u8] = b"create a button\nchange text to Go\n";
        let mut source = LineTranscriptSource::new(BufReader::new(input));

        assert_eq!(source.next_transcript().await.as_deref(), Some("create a button"));
        assert_eq!(source.next_transcript().await.as_deref(), Some("change text to Go"));
        assert_eq!(source.next_transcript().await, None);
    }

    #[tokio::test]
    async fn last_line_without_newline() {
        let input: &[u8] = b"delete it";
        let mut source = LineTranscriptSource::new(BufReader::new(input));
        assert_eq!(source.next_transcript().await.as_deref(), Some("delete it"));
        assert_eq!(source.next_transcript().await, None);
    }
}
