// Image Placeholder
// Decides whether an image can be shown and builds the fallback graphic when it cannot

use std::path::Path;
use url::Url;

use crate::core::MediaAsset;

/// Caption used when the listing has no usable title
pub const GENERIC_CAPTION: &str = "Image Not Available";

/// What the media panel shows for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageDisplay<'a> {
    Asset(&'a MediaAsset),
    Placeholder { caption: String },
}

/// Whether the resource behind `url` can be loaded.
///
/// http(s) URLs need a host; `file://` URLs and bare paths must exist.
pub fn is_loadable(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => parsed.host_str().is_some_and(|h| !h.is_empty()),
            "file" => parsed
                .to_file_path()
                .map(|path| path.exists())
                .unwrap_or(false),
            _ => false,
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => Path::new(url).exists(),
        Err(_) => false,
    }
}

pub fn placeholder_caption(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        GENERIC_CAPTION.to_string()
    } else {
        title.to_string()
    }
}

/// Resolve an asset, falling back to a titled placeholder
pub fn resolve_image<'a>(asset: &'a MediaAsset, title: &str) -> ImageDisplay<'a> {
    if is_loadable(&asset.url) {
        ImageDisplay::Asset(asset)
    } else {
        tracing::debug!(url = %asset.url, "Image unavailable, using placeholder");
        ImageDisplay::Placeholder {
            caption: placeholder_caption(title),
        }
    }
}

/// Hatched box with the caption centered, `width` x `height` chars
pub fn placeholder_art(caption: &str, width: usize, height: usize) -> Vec<String> {
    let width = width.max(4);
    let height = height.max(3);
    let inner = width - 2;

    let caption: String = caption.chars().take(inner.saturating_sub(2)).collect();
    let caption_len = caption.chars().count();
    let middle = height / 2;

    let mut lines = Vec::with_capacity(height);
    lines.push(format!("╭{}╮", "─".repeat(inner)));
    for row in 1..height - 1 {
        if row == middle {
            let left = (inner - caption_len) / 2;
            let right = inner - caption_len - left;
            lines.push(format!("│{}{}{}│", " ".repeat(left), caption, " ".repeat(right)));
        } else {
            lines.push(format!("│{}│", "░".repeat(inner)));
        }
    }
    lines.push(format!("╰{}╯", "─".repeat(inner)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MediaCategory;

    #[test]
    fn test_remote_urls() {
        assert!(is_loadable("https://images.example/a.jpg"));
        assert!(is_loadable("http://images.example/a.jpg"));
        assert!(!is_loadable("ftp://images.example/a.jpg"));
        assert!(!is_loadable(""));
        assert!(!is_loadable("   "));
    }

    #[test]
    fn test_local_paths() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("facade.jpg");
        std::fs::write(&image, b"jpeg").unwrap();

        assert!(is_loadable(image.to_str().unwrap()));
        let file_url = Url::from_file_path(&image).unwrap();
        assert!(is_loadable(file_url.as_str()));
        assert!(!is_loadable("assets/does-not-exist.jpg"));
    }

    #[test]
    fn test_fallback_uses_title() {
        let broken = MediaAsset::new("assets/missing.jpg", "Facade", MediaCategory::Main);
        assert_eq!(
            resolve_image(&broken, "Heritage Townhouse"),
            ImageDisplay::Placeholder { caption: "Heritage Townhouse".to_string() }
        );
        assert_eq!(
            resolve_image(&broken, ""),
            ImageDisplay::Placeholder { caption: GENERIC_CAPTION.to_string() }
        );

        let ok = MediaAsset::new("https://img.example/a.jpg", "A", MediaCategory::Gallery);
        assert_eq!(resolve_image(&ok, "x"), ImageDisplay::Asset(&ok));
    }

    #[test]
    fn test_placeholder_art_shape() {
        let art = placeholder_art("Image Not Available", 30, 5);
        assert_eq!(art.len(), 5);
        assert!(art.iter().all(|l| l.chars().count() == 30));
        assert!(art[2].contains("Image Not Available"));

        let tiny = placeholder_art("A very long caption", 6, 1);
        assert_eq!(tiny.len(), 3);
        assert!(tiny.iter().all(|l| l.chars().count() == 6));
    }
}
