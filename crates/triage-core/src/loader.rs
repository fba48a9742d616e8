use anyhow::Context;
use std::path::Path;

/// Default trailing window sent to the completion service, in characters.
/// Jenkins logs are append-mostly, so the tail carries the failure.
pub const DEFAULT_LOG_WINDOW: usize = 6000;

/// Reads the trailing `window` characters of the log at `path`. Decoding is
/// permissive: invalid byte sequences are replaced, never fatal.
pub fn load_tail(path: &Path, window: usize) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("log file not found: {}", path.display());
    }
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read log file '{}'", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(tail_chars(&text, window))
}

/// Last `window` characters of `text`. Character-based so the cut can never
/// land inside a multi-byte sequence.
pub fn tail_chars(text: &str, window: usize) -> String {
    let total = text.chars().count();
    if total <= window {
        return text.to_string();
    }
    text.chars().skip(total - window).collect()
}
