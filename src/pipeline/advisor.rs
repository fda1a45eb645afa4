//! Static algorithm recommendations by file category and size.
//!
//! Unlike the planner this never looks at the data: it is a cheap hint for a
//! caller that has to pick an algorithm before the bytes are available.

use serde::Serialize;
use std::path::Path;

use crate::types::Algorithm;

/// Files smaller than this are always pointed at RLE.
pub const SMALL_FILE_THRESHOLD: usize = 1024;

const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "json", "xml", "html", "css", "js", "ts", "py", "java", "c", "cpp", "h",
];
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg", "m4a"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm"];
const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp",
];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z", "tar", "gz", "bz2", "xz"];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Text,
    Image,
    Audio,
    Video,
    Document,
    Archive,
    Binary,
}

impl FileCategory {
    /// Classifies a file by MIME prefix first, then by extension. Anything
    /// unrecognised is `Binary`.
    pub fn detect(file_name: &str, mime_type: Option<&str>) -> Self {
        let mime = mime_type.unwrap_or("").to_ascii_lowercase();
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let has_ext = |list: &[&str]| list.iter().any(|known| *known == extension);

        if mime.starts_with("text/") || has_ext(TEXT_EXTENSIONS) {
            Self::Text
        } else if mime.starts_with("image/") || has_ext(IMAGE_EXTENSIONS) {
            Self::Image
        } else if mime.starts_with("audio/") || has_ext(AUDIO_EXTENSIONS) {
            Self::Audio
        } else if mime.starts_with("video/") || has_ext(VIDEO_EXTENSIONS) {
            Self::Video
        } else if has_ext(DOCUMENT_EXTENSIONS) {
            Self::Document
        } else if has_ext(ARCHIVE_EXTENSIONS) {
            Self::Archive
        } else {
            Self::Binary
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub algorithm: Algorithm,
    pub reason: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub recommended: Algorithm,
    pub reason: &'static str,
    pub alternatives: Vec<Alternative>,
}

fn alt(algorithm: Algorithm, reason: &'static str) -> Alternative {
    Alternative { algorithm, reason }
}

/// Picks an algorithm for a file of `category` and `size` bytes.
pub fn recommend(category: FileCategory, size: usize) -> Recommendation {
    use Algorithm::*;

    if size < SMALL_FILE_THRESHOLD {
        return Recommendation {
            recommended: Rle,
            reason: "Small files gain little from heavier codecs; RLE is the fastest choice",
            alternatives: vec![
                alt(Huffman, "Pays off once the tree overhead is amortised"),
                alt(Lz77, "Needs enough history to find matches"),
            ],
        };
    }

    match category {
        FileCategory::Text => Recommendation {
            recommended: Huffman,
            reason: "Huffman coding is optimal for text files due to character frequency patterns",
            alternatives: vec![
                alt(Lz77, "Good for text with repetitive patterns"),
                alt(Rle, "Only effective if text has many repeated characters"),
            ],
        },
        FileCategory::Image => Recommendation {
            recommended: Rle,
            reason: "RLE works well for images with large uniform color areas",
            alternatives: vec![
                alt(Lz77, "Better for complex images with patterns"),
                alt(Huffman, "Can work for simple images"),
            ],
        },
        FileCategory::Binary | FileCategory::Document | FileCategory::Archive => Recommendation {
            recommended: Lz77,
            reason: "LZ77 is the most versatile for unknown binary data",
            alternatives: vec![
                alt(Huffman, "Good if data has clear frequency patterns"),
                alt(Rle, "Only if data has many repeated byte sequences"),
            ],
        },
        FileCategory::Audio | FileCategory::Video => Recommendation {
            recommended: Huffman,
            reason: "Encoded media rarely repeats; byte-frequency coding is the safest default",
            alternatives: vec![
                alt(Lz77, "Helps with uncompressed sample data"),
                alt(Rle, "Only for long stretches of silence or padding"),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_prefers_mime_then_extension() {
        assert_eq!(FileCategory::detect("notes.TXT", None), FileCategory::Text);
        assert_eq!(FileCategory::detect("blob", Some("text/plain")), FileCategory::Text);
        assert_eq!(FileCategory::detect("photo.png", None), FileCategory::Image);
        assert_eq!(FileCategory::detect("x.bin", Some("audio/mpeg")), FileCategory::Audio);
        assert_eq!(FileCategory::detect("clip.mkv", None), FileCategory::Video);
        assert_eq!(FileCategory::detect("report.pdf", None), FileCategory::Document);
        assert_eq!(FileCategory::detect("backup.tar.gz", None), FileCategory::Archive);
        assert_eq!(FileCategory::detect("firmware", None), FileCategory::Binary);
    }

    #[test]
    fn test_small_files_always_get_rle() {
        for category in [FileCategory::Text, FileCategory::Archive, FileCategory::Video] {
            assert_eq!(recommend(category, 1023).recommended, Algorithm::Rle);
        }
    }

    #[test]
    fn test_category_recommendations() {
        assert_eq!(recommend(FileCategory::Text, 4096).recommended, Algorithm::Huffman);
        assert_eq!(recommend(FileCategory::Image, 4096).recommended, Algorithm::Rle);
        assert_eq!(recommend(FileCategory::Binary, 4096).recommended, Algorithm::Lz77);
        assert_eq!(recommend(FileCategory::Document, 4096).recommended, Algorithm::Lz77);
        assert_eq!(recommend(FileCategory::Archive, 1024).recommended, Algorithm::Lz77);
        assert_eq!(recommend(FileCategory::Audio, 4096).recommended, Algorithm::Huffman);
    }

    #[test]
    fn test_alternatives_never_repeat_the_recommendation() {
        for category in [
            FileCategory::Text,
            FileCategory::Image,
            FileCategory::Audio,
            FileCategory::Binary,
        ] {
            for size in [10, 10_000] {
                let rec = recommend(category, size);
                assert_eq!(rec.alternatives.len(), 2);
                assert!(rec.alternatives.iter().all(|a| a.algorithm != rec.recommended));
            }
        }
    }
}
