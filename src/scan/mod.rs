pub mod dispatch;
pub mod guard;
pub mod payload;
pub mod present;

/// Failures a single scan can end in. None of these are fatal: the scanner
/// returns to idle after each one so the user can rescan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Unrecognized code: `{0}`")]
    MalformedPayload(String),
    #[error("Cannot send tokens to yourself")]
    SelfTransfer,
    #[error("Error scanning item: {0}")]
    Remote(eyre::Report),
}
