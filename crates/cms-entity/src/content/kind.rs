//! Content kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of content kinds published on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "content_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// A general article.
    Article,
    /// A dated announcement.
    Announcement,
    /// A press release.
    PressRelease,
    /// An academic paper or research report.
    AcademicMaterial,
    /// A video item.
    Video,
    /// A photo gallery.
    PhotoGallery,
}

impl Default for ContentKind {
    fn default() -> Self {
        Self::Article
    }
}

impl ContentKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Announcement => "announcement",
            Self::PressRelease => "press_release",
            Self::AcademicMaterial => "academic_material",
            Self::Video => "video",
            Self::PhotoGallery => "photo_gallery",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = cms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "article" => Ok(Self::Article),
            "announcement" => Ok(Self::Announcement),
            "press_release" => Ok(Self::PressRelease),
            "academic_material" => Ok(Self::AcademicMaterial),
            "video" => Ok(Self::Video),
            "photo_gallery" => Ok(Self::PhotoGallery),
            _ => Err(cms_core::AppError::validation(format!(
                "Invalid content kind: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for kind in [
            ContentKind::Article,
            ContentKind::Announcement,
            ContentKind::PressRelease,
            ContentKind::AcademicMaterial,
            ContentKind::Video,
            ContentKind::PhotoGallery,
        ] {
            assert_eq!(kind.as_str().parse::<ContentKind>().unwrap(), kind);
        }
        assert!("podcast".parse::<ContentKind>().is_err());
    }
}
