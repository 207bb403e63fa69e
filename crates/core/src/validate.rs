//! Request validation.

use crate::Error;

/// Largest headline count the upstream subscription tier serves per call.
pub const MAX_ARTICLE_COUNT: u8 = 10;

/// Check a requested headline count and narrow it to the range upstream accepts.
///
/// # Errors
///
/// Returns `Error::InvalidInput` when `n` is negative or above [`MAX_ARTICLE_COUNT`].
pub fn check_count(n: i64) -> Result<u8, Error> {
    if n > i64::from(MAX_ARTICLE_COUNT) {
        return Err(Error::InvalidInput(format!("article count cannot be more than {MAX_ARTICLE_COUNT}")));
    }
    if n < 0 {
        return Err(Error::InvalidInput("article count cannot be a negative number".into()));
    }

    u8::try_from(n).map_err(|_| Error::InvalidInput(format!("article count out of range: {n}")))
}
