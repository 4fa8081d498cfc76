//! Upload category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse file category derived from the MIME type at upload time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "upload_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UploadCategory {
    /// Raster or vector images.
    Image,
    /// PDFs, office documents, spreadsheets.
    Document,
    /// Video files.
    Video,
    /// Everything else.
    General,
}

impl UploadCategory {
    /// Derive a category from a MIME type string.
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            return Self::Image;
        }
        if mime_type.starts_with("video/") {
            return Self::Video;
        }
        if mime_type.contains("pdf")
            || mime_type.contains("document")
            || mime_type.contains("sheet")
        {
            return Self::Document;
        }
        Self::General
    }

    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::Video => "video",
            Self::General => "general",
        }
    }
}

impl fmt::Display for UploadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UploadCategory {
    type Err = cms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "document" => Ok(Self::Document),
            "video" => Ok(Self::Video),
            "general" => Ok(Self::General),
            _ => Err(cms_core::AppError::validation(format!(
                "Invalid upload category: '{s}'. Expected one of: image, document, video, general"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(UploadCategory::from_mime("image/png"), UploadCategory::Image);
        assert_eq!(UploadCategory::from_mime("video/mp4"), UploadCategory::Video);
        assert_eq!(
            UploadCategory::from_mime("application/pdf"),
            UploadCategory::Document
        );
        assert_eq!(
            UploadCategory::from_mime(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            UploadCategory::Document
        );
        assert_eq!(
            UploadCategory::from_mime("application/octet-stream"),
            UploadCategory::General
        );
    }
}
