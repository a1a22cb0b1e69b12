use colored::*;
use sz_grpc_core::{SettingsError, SzError};

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

/// A JSON document returned by the engine, printed pretty when it parses.
pub struct JsonResult(pub String);

/// A plain value with a label, e.g. a configuration id.
pub struct Labeled<T: std::fmt::Display>(pub &'static str, pub T);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.0)?;
        Ok(())
    }
}

impl From<serde_json::Value> for FormattedString {
    fn from(value: serde_json::Value) -> Self {
        FormattedString(serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()))
    }
}

impl From<JsonResult> for FormattedString {
    fn from(JsonResult(raw): JsonResult) -> Self {
        if raw.trim().is_empty() {
            return FormattedString("Done.".green().to_string());
        }
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => FormattedString::from(value),
            Err(_) => FormattedString(raw),
        }
    }
}

impl<T: std::fmt::Display> From<Labeled<T>> for FormattedString {
    fn from(Labeled(label, value): Labeled<T>) -> Self {
        FormattedString(format!("{} {}", label.cyan(), value.to_string().green()))
    }
}

impl From<&SzError> for FormattedString {
    fn from(err: &SzError) -> Self {
        let title = match err {
            SzError::Usage { .. } => "Invalid Argument:",
            SzError::NotInitialized { .. } => "Not Initialized:",
            SzError::Connection { .. } => "Connection Error:",
            SzError::Engine { .. } => "Senzing Error:",
        };
        let mut out = format!("{}\n\n'{}'", title.red().bold(), err);
        if err.is_retryable() {
            out.push_str(&format!("\n\n{}", "The operation may succeed if retried.".yellow()));
        }
        FormattedString(out)
    }
}

impl From<&SettingsError> for FormattedString {
    fn from(err: &SettingsError) -> Self {
        FormattedString(format!("{}\n\n'{}'", "Settings Error:".red().bold(), err))
    }
}

impl From<anyhow::Error> for FormattedString {
    fn from(err: anyhow::Error) -> Self {
        if let Some(err) = err.downcast_ref::<SzError>() {
            return FormattedString::from(err);
        }
        if let Some(err) = err.downcast_ref::<SettingsError>() {
            return FormattedString::from(err);
        }
        FormattedString(format!("{}\n\n'{:#}'", "Failed:".red().bold(), err))
    }
}
