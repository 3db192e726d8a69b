//! Builtin style preset tables.
//!
//! The tables are `static` data: they are built at compile time, never
//! mutated, and can be read from any thread without locking.

use crate::types::{Category, FilterKind, StylePreset};

use Category::{Exterior, Interior};
use FilterKind::{EdgeEnhance, None as Plain, Smooth, SmoothStrong};

const fn preset(
    category: Category,
    name: &'static str,
    saturation: f32,
    brightness: f32,
    contrast: f32,
    filter: FilterKind,
) -> StylePreset {
    StylePreset {
        category,
        name,
        saturation,
        brightness,
        contrast,
        filter,
    }
}

static EXTERIOR: [StylePreset; 8] = [
    preset(Exterior, "Modern", 1.2, 1.1, 1.3, Plain),
    preset(Exterior, "Traditional", 0.9, 1.0, 1.1, Plain),
    preset(Exterior, "Contemporary", 1.1, 1.2, 1.2, Plain),
    preset(Exterior, "Rustic", 0.8, 0.9, 1.0, Smooth),
    preset(Exterior, "Mediterranean", 1.3, 1.1, 1.2, Plain),
    preset(Exterior, "Colonial", 0.9, 1.0, 1.1, Plain),
    preset(Exterior, "Craftsman", 1.0, 0.95, 1.1, Plain),
    preset(Exterior, "Victorian", 1.2, 1.0, 1.3, Plain),
];

static INTERIOR: [StylePreset; 20] = [
    preset(Interior, "Minimalist", 0.7, 1.3, 1.1, SmoothStrong),
    preset(Interior, "Scandinavian", 0.8, 1.4, 1.0, SmoothStrong),
    preset(Interior, "Industrial", 0.6, 0.9, 1.4, EdgeEnhance),
    preset(Interior, "Bohemian", 1.4, 1.1, 1.2, Plain),
    preset(Interior, "Mid-Century Modern", 1.2, 1.1, 1.2, Plain),
    preset(Interior, "Traditional", 1.0, 1.0, 1.1, Plain),
    preset(Interior, "Contemporary", 1.1, 1.2, 1.2, Plain),
    preset(Interior, "Art Deco", 1.3, 1.0, 1.4, Plain),
    preset(Interior, "Farmhouse", 0.9, 1.1, 1.0, Smooth),
    preset(Interior, "Mediterranean", 1.2, 1.1, 1.1, Plain),
    preset(Interior, "Rustic", 0.8, 0.9, 1.0, Smooth),
    preset(Interior, "Eclectic", 1.3, 1.1, 1.3, Plain),
    preset(Interior, "Transitional", 1.0, 1.1, 1.1, Plain),
    preset(Interior, "Glam", 1.2, 1.2, 1.3, Plain),
    preset(Interior, "Coastal", 1.1, 1.3, 1.0, Plain),
    preset(Interior, "Modern Farmhouse", 0.9, 1.2, 1.1, Plain),
    preset(Interior, "French Country", 1.0, 1.0, 1.0, Smooth),
    preset(Interior, "Asian Zen", 0.7, 1.1, 0.9, SmoothStrong),
    preset(Interior, "Gothic", 0.8, 0.8, 1.4, EdgeEnhance),
    preset(Interior, "Retro", 1.4, 1.0, 1.2, Plain),
];

/// Read-only catalog of the builtin design styles.
pub struct StylePresetCatalog;

impl StylePresetCatalog {
    /// Look up a style by exact, case-sensitive name.
    ///
    /// `None` means "apply no transformation"; it is not an error.
    pub fn lookup(category: Category, name: &str) -> Option<&'static StylePreset> {
        Self::styles(category).iter().find(|p| p.name == name)
    }

    /// All presets of a category, in table order.
    pub fn styles(category: Category) -> &'static [StylePreset] {
        match category {
            Category::Exterior => &EXTERIOR,
            Category::Interior => &INTERIOR,
        }
    }

    /// Style names of a category, in table order.
    pub fn names(category: Category) -> impl Iterator<Item = &'static str> {
        Self::styles(category).iter().map(|p| p.name)
    }

    /// Every preset across both categories.
    pub fn all() -> impl Iterator<Item = &'static StylePreset> {
        EXTERIOR.iter().chain(INTERIOR.iter())
    }
}
