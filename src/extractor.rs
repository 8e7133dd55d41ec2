//! Heredoc content extraction from the companion shell script.
//!
//! Extraction is best effort: a missing script, a missing marker or an
//! unterminated block yields the caller's placeholder instead of an error.
//! The contract is weak. Any edit to the companion script that moves or
//! renames a marker silently produces placeholder content, so every
//! fallback is logged as a warning.

use log::{debug, warn};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::constants::HEREDOC_END;

/// Why extraction fell back to the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The companion script could not be read
    Unreadable(String),
    /// The start marker does not occur in the script
    MarkerNotFound,
    /// The marker was found but no `EOF` line closes the block
    Unterminated,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Unreadable(e) => write!(f, "companion script unreadable: {e}"),
            FallbackReason::MarkerNotFound => write!(f, "heredoc marker not found"),
            FallbackReason::Unterminated => write!(f, "heredoc block has no closing EOF line"),
        }
    }
}

/// The content chosen for a generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Extracted(String),
    Placeholder {
        content: String,
        reason: FallbackReason,
    },
}

impl Extraction {
    pub fn content(&self) -> &str {
        match self {
            Extraction::Extracted(content) => content,
            Extraction::Placeholder { content, .. } => content,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Extraction::Placeholder { .. })
    }
}

/// Finds the heredoc body started by the first occurrence of `marker`.
///
/// The body runs from the line after the marker up to, not including, the
/// newline before the first following line that is exactly `EOF`.
pub fn find_heredoc<'a>(script: &'a str, marker: &str) -> Result<&'a str, FallbackReason> {
    let marker_at = script.find(marker).ok_or(FallbackReason::MarkerNotFound)?;
    let line_end = script[marker_at..]
        .find('\n')
        .ok_or(FallbackReason::Unterminated)?;
    let body_start = marker_at + line_end + 1;
    let body_len = script[body_start..]
        .find(HEREDOC_END)
        .ok_or(FallbackReason::Unterminated)?;

    Ok(&script[body_start..body_start + body_len])
}

/// Reads `script_path` and extracts the block for `marker`, falling back to
/// `placeholder` on any failure.
pub fn extract_or_placeholder<P: AsRef<Path>>(
    script_path: P,
    marker: &str,
    placeholder: &str,
) -> Extraction {
    let script_path = script_path.as_ref();
    let result = fs::read_to_string(script_path)
        .map_err(|e| FallbackReason::Unreadable(e.to_string()))
        .and_then(|script| find_heredoc(&script, marker).map(str::to_string));

    match result {
        Ok(content) => {
            debug!(
                "Extracted {} bytes for '{}' from {}",
                content.len(),
                marker,
                script_path.display()
            );
            Extraction::Extracted(content)
        }
        Err(reason) => {
            warn!(
                "Using placeholder content for '{}' ({}: {})",
                marker,
                script_path.display(),
                reason
            );
            Extraction::Placeholder {
                content: placeholder.to_string(),
                reason,
            }
        }
    }
}
