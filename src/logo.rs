// 🖼️ Logo loading - resolve an optional image reference or fall back
//
// The loader never fails to its caller. Whatever goes wrong (no reference,
// malformed reference, unsupported scheme) the answer is a placeholder.

use serde::Serialize;

/// What the presentation layer should draw for a logo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum LogoImage {
    /// A fetchable remote image
    Remote(String),
    /// Generic "photo" placeholder
    Placeholder,
}

impl LogoImage {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, LogoImage::Placeholder)
    }

    /// One-cell glyph used by the terminal UI
    pub fn glyph(&self) -> &'static str {
        match self {
            LogoImage::Remote(_) => "◆",
            LogoImage::Placeholder => "▢",
        }
    }
}

pub trait LogoLoader {
    fn load(&self, logo_ref: Option<&str>) -> LogoImage;
}

/// Accepts http(s) references as-is; does no network I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkLogoLoader;

impl LogoLoader for LinkLogoLoader {
    fn load(&self, logo_ref: Option<&str>) -> LogoImage {
        let Some(raw) = logo_ref.map(str::trim) else {
            return LogoImage::Placeholder;
        };

        let rest = raw
            .strip_prefix("https://")
            .or_else(|| raw.strip_prefix("http://"));

        match rest {
            Some(host_and_path) if is_plausible_location(host_and_path) => {
                LogoImage::Remote(raw.to_string())
            }
            _ => {
                tracing::debug!(logo_ref = raw, "unusable logo reference, using placeholder");
                LogoImage::Placeholder
            }
        }
    }
}

fn is_plausible_location(host_and_path: &str) -> bool {
    let host = host_and_path.split('/').next().unwrap_or("");
    !host.is_empty() && !host_and_path.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_reference() {
        let loader = LinkLogoLoader;
        let image = loader.load(Some("https://cdn.jsdelivr.net/gh/company-logos/apple.png"));
        assert_eq!(
            image,
            LogoImage::Remote("https://cdn.jsdelivr.net/gh/company-logos/apple.png".to_string())
        );
        assert!(!image.is_placeholder());
    }

    #[test]
    fn test_missing_reference() {
        assert!(LinkLogoLoader.load(None).is_placeholder());
    }

    #[test]
    fn test_malformed_references() {
        let loader = LinkLogoLoader;
        for bad in ["", "ftp://example.com/a.png", "https://", "https:///a.png", "http://bad host/a.png", "apple.png"] {
            assert_eq!(loader.load(Some(bad)), LogoImage::Placeholder, "{bad:?}");
        }
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(LogoImage::Placeholder.glyph(), "▢");
        assert_eq!(LogoImage::Remote("https://a/b".into()).glyph(), "◆");
    }
}
