/// Type alias for Result with anyhow::Error as the error type.
/// Ports and adapters all report failures through this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Extracts the human-readable description of an error, falling back to
/// `fallback` when the error message is empty. Whitespace counts as a message.
pub fn message_or(err: &anyhow::Error, fallback: &str) -> String {
    let message = err.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
