use crate::errors::{PortfolioError, Result};

const ALLOWED_SCHEMES: &[&str] = &["https://", "http://", "mailto:", "tel:"];

/// Check a link is something we hand to the desktop opener
pub fn validate_link(link: &str) -> Result<&str> {
    let trimmed = link.trim();
    let lower = trimmed.to_ascii_lowercase();
    if trimmed.is_empty() || !ALLOWED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return Err(PortfolioError::UnsupportedLink(link.to_string()));
    }
    Ok(trimmed)
}

/// Open a link in the system browser (or mail/phone handler).
pub fn open_external(link: &str) -> Result<()> {
    let link = validate_link(link)?;
    log::info!("opening {}", link);
    webbrowser::open(link).map_err(|e| PortfolioError::Browser(e.to_string()))
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| PortfolioError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| PortfolioError::Clipboard(e.to_string()))
}
