//! Style preset types.
//!
//! A preset bundles the three enhancement factors of a design style with
//! the post-filter applied after them. Presets live in the static tables of
//! [`crate::catalog`]; this module only defines their shape.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{DecorError, Result};

/// Design category a style belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Exterior,
    Interior,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 2] = [Category::Exterior, Category::Interior];

    /// Lowercase name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Category::Exterior => "exterior",
            Category::Interior => "interior",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DecorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exterior" => Ok(Category::Exterior),
            "interior" => Ok(Category::Interior),
            _ => Err(DecorError::Parse {
                message: format!("Unknown design category: {}", s),
                help: Some("Use 'exterior' or 'interior'".to_string()),
            }),
        }
    }
}

/// Post-filter applied after the factor enhancements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// No additional filter.
    #[default]
    None,
    /// Single mild low-pass pass.
    Smooth,
    /// Stronger low-pass pass for soft, minimal styles.
    SmoothStrong,
    /// Edge emphasis for graphic, industrial styles.
    EdgeEnhance,
}

/// Enhancement preset for one design style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StylePreset {
    pub category: Category,
    pub name: &'static str,
    pub saturation: f32,
    pub brightness: f32,
    pub contrast: f32,
    pub filter: FilterKind,
}

impl StylePreset {
    /// A preset that leaves images untouched.
    pub const fn identity(category: Category, name: &'static str) -> Self {
        Self {
            category,
            name,
            saturation: 1.0,
            brightness: 1.0,
            contrast: 1.0,
            filter: FilterKind::None,
        }
    }
}
