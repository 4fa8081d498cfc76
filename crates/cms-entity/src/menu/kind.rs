//! Menu kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a menu node links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "menu_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    /// A single content page.
    Page,
    /// A section grouping child menus.
    Section,
    /// An external link.
    External,
}

impl Default for MenuKind {
    fn default() -> Self {
        Self::Page
    }
}

impl MenuKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
            Self::External => "external",
        }
    }
}

impl fmt::Display for MenuKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MenuKind {
    type Err = cms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page" => Ok(Self::Page),
            "section" => Ok(Self::Section),
            "external" => Ok(Self::External),
            _ => Err(cms_core::AppError::validation(format!(
                "Invalid menu kind: '{s}'. Expected one of: page, section, external"
            ))),
        }
    }
}
