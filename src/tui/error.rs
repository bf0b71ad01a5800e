/// Errors that can occur in the TUI layer.
///
/// There is no I/O beyond the terminal itself, so this is the only
/// system-level failure mode; everything else is user-input validation
/// handled inline by the auth screen.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
