//! Publication status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a content item.
///
/// Transitions between the three states are unrestricted; entering
/// `Published` from any other state stamps `published_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "publish_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    /// Not yet published; visible only in the admin interface.
    Draft,
    /// Publicly visible.
    Published,
    /// Hidden from public listings but retained.
    Private,
}

impl Default for PublishStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl PublishStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PublishStatus {
    type Err = cms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "private" => Ok(Self::Private),
            _ => Err(cms_core::AppError::validation(format!(
                "Invalid publish status: '{s}'. Expected one of: draft, published, private"
            ))),
        }
    }
}
