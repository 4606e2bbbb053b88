//! File type classification by extension.
//!
//! The lookup table is built once from a category → extensions listing and
//! inverted into an extension → category map. Lookups are exact: callers
//! lowercase the extension before classifying.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Broad file type reported in stat descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Document,
    Picture,
    Audio,
    Video,
    Archive,
    Executable,
    Other,
}

impl Category {
    /// Returns the lowercase name used in descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Document => "document",
            Category::Picture => "picture",
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Archive => "archive",
            Category::Executable => "executable",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const KNOWN_EXTENSIONS: &[(Category, &[&str])] = &[
    (
        Category::Document,
        &[
            "pdf", "csv", "xls", "xlsx", "doc", "docx", "ppt", "pptx", "txt", "html", "htm",
        ],
    ),
    (
        Category::Picture,
        &["jpg", "jpeg", "png", "bmp", "tif", "tiff", "gif"],
    ),
    (Category::Audio, &["mp3", "wav", "flac", "aac"]),
    (
        Category::Video,
        &["mov", "avi", "mp4", "m4v", "mkv", "flv", "3gp", "dvx"],
    ),
    (Category::Archive, &["zip", "rar", "7z", "tar", "gzip", "gz"]),
    (Category::Executable, &["exe", "bat", "cmd", "sh"]),
];

static EXTENSION_TABLE: Lazy<HashMap<&'static str, Category>> = Lazy::new(|| {
    KNOWN_EXTENSIONS
        .iter()
        .flat_map(|(category, extensions)| extensions.iter().map(move |ext| (*ext, *category)))
        .collect()
});

/// Maps a lowercase extension (without the leading dot) to its category.
///
/// Unknown extensions classify as [`Category::Other`]. Matching is
/// case-sensitive, so `"JPG"` is `Other` while `"jpg"` is a picture.
pub fn classify(extension: &str) -> Category {
    EXTENSION_TABLE
        .get(extension)
        .copied()
        .unwrap_or(Category::Other)
}
