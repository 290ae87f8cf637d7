//! Media classification for tutorial steps
//!
//! A step shows its own media when it has one and the item's primary image
//! otherwise. Whether that path renders as a video or an image is decided
//! here, once, from the file extension.

use serde::{Deserialize, Serialize};

/// Extensions rendered as video
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm"];

/// How a media path is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Display label, e.g. "Video"
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
        }
    }
}

/// A media path tagged with its render kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub kind: MediaKind,
    pub path: String,
}

/// Classify a path by extension (ASCII case-insensitive).
///
/// Surrounding whitespace is ignored for the check; the path is kept as given.
pub fn classify(path: &str) -> MediaRef {
    let lower = path.trim().to_ascii_lowercase();
    let kind = if VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        MediaKind::Video
    } else {
        MediaKind::Image
    };

    MediaRef {
        kind,
        path: path.to_string(),
    }
}

/// Pick the step media, falling back to the item image, and classify it
pub fn resolve(step_media: Option<&str>, fallback_image: &str) -> MediaRef {
    match step_media.filter(|m| !m.trim().is_empty()) {
        Some(media) => classify(media),
        None => classify(fallback_image),
    }
}
