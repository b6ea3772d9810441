//! HexarchErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured error code string
/// for embedding pipelines that match on codes rather than messages.
pub trait HexarchErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const FACTS_ERROR: &str = "FACTS_ERROR";
