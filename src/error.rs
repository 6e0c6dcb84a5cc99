//! Contract violations raised by the direction and slope conversions
use thiserror::Error;

/// Raised when raw values supplied by the host fall outside what the engine accepts.
///
/// Both variants are programming errors in the caller. Routine misses
/// (tile not eligible, segment already present) are never reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RampError {
    #[error("direction not valid: {0}")]
    InvalidDirection(u8),
    #[error("slope not valid: {0:#06b}")]
    InvalidSlope(u8),
}
