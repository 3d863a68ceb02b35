use thiserror::Error;

/// Errors raised while loading portfolio content or talking to the desktop.
///
/// A missed category lookup or a link that cannot be embedded is *not* an
/// error: those are `Option` results on the registry and resolver. This type
/// only surfaces when the caller asked for something that must exist.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Category id is not registered
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Two categories share the same id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// Content table failed validation
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Link scheme the desktop opener refuses to handle
    #[error("Unsupported link: {0}")]
    UnsupportedLink(String),

    /// System browser could not be launched
    #[error("Failed to open browser: {0}")]
    Browser(String),

    /// Clipboard unavailable or write failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

impl PortfolioError {
    /// Get a short, user-facing hint for recovering from the error
    pub fn suggestion(&self) -> &'static str {
        match self {
            PortfolioError::CategoryNotFound(_) => {
                "Run `reel-portfolio categories` to list the available ids."
            }
            PortfolioError::DuplicateCategory(_) => {
                "Every category in the content file needs a unique id."
            }
            PortfolioError::InvalidContent(_) => {
                "Check the content file against the built-in layout."
            }
            PortfolioError::UnsupportedLink(_) => {
                "Only http(s), mailto: and tel: links can be opened."
            }
            PortfolioError::Browser(_) => {
                "Set the BROWSER environment variable or copy the link instead."
            }
            PortfolioError::Clipboard(_) => {
                "No clipboard available in this session. Select the link manually."
            }
            PortfolioError::Io(_) => "Check that the file exists and is readable.",
            PortfolioError::Json(_) => "The file is not valid JSON for this layout.",
            PortfolioError::Config(_) => "Delete the config file to restore defaults.",
        }
    }

    /// Get detailed diagnostic information about the error
    pub fn diagnostics(&self) -> String {
        format!("{}\nSuggestion: {}", self, self.suggestion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_include_suggestion() {
        let err = PortfolioError::CategoryNotFound("vlogs".to_string());
        let text = err.diagnostics();
        assert!(text.starts_with("Category not found: vlogs"));
        assert!(text.contains("reel-portfolio categories"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: PortfolioError = parse.unwrap_err().into();
        assert!(matches!(err, PortfolioError::Json(_)));
    }
}
