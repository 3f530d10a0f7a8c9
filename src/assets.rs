//! Bundled header assets. Nothing here is fetched at runtime.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Branch/DNA glyph shown next to the page title.
pub const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="60" height="60" viewBox="0 0 24 24" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="6" y1="3" x2="6" y2="15"></line><circle cx="18" cy="6" r="3"></circle><circle cx="6" cy="18" r="3"></circle><path d="M18 9a9 9 0 0 1-9 9"></path></svg>"#;

#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub data_uri: String,
}

pub fn logo() -> Logo {
    Logo {
        data_uri: format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(LOGO_SVG.as_bytes())
        ),
    }
}
