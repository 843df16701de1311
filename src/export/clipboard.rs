//! Clipboard helpers backed by the `arboard` crate.
//!
//! Each call opens a short-lived [`arboard::Clipboard`] handle instead of
//! sharing one, since the handle is not `Send` on every platform.

use arboard::Clipboard;

use super::ExportError;

/// Write `text` into the system clipboard, replacing whatever was there.
///
/// # Errors
///
/// [`ExportError::ClipboardAccess`] if the clipboard cannot be opened,
/// [`ExportError::ClipboardSet`] if writing fails.
pub fn set_clipboard(text: &str) -> Result<(), ExportError> {
    let mut clipboard = open_clipboard()?;
    clipboard
        .set_text(text)
        .map_err(|e| ExportError::ClipboardSet(e.to_string()))
}

fn open_clipboard() -> Result<Clipboard, ExportError> {
    Clipboard::new().map_err(|e| ExportError::ClipboardAccess(e.to_string()))
}
