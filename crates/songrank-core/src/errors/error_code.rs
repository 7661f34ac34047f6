//! Stable machine-readable error codes.

pub const CONFIG_OUT_OF_BOUNDS: &str = "CONFIG_OUT_OF_BOUNDS";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CATALOG_INVALID: &str = "CATALOG_INVALID";
pub const MISSING_REQUIRED_FIELD: &str = "MISSING_REQUIRED_FIELD";
pub const INVALID_ENTRY: &str = "INVALID_ENTRY";
pub const DUPLICATE_SONG: &str = "DUPLICATE_SONG";

/// Implemented by every songrank error so callers can branch on a stable
/// code instead of matching on message text.
pub trait SongrankErrorCode {
    fn error_code(&self) -> &'static str;
}
