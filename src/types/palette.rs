//! Palette type for extracted dominant colours.

use std::ops::Deref;

use serde::Serialize;

use super::Colour;

/// An ordered collection of colour swatches.
///
/// Order is the order in which the clustering finalized its centroids, not
/// frequency or hue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Create a palette from swatches.
    pub fn new(colours: Vec<Colour>) -> Self {
        Self { colours }
    }

    /// Get the swatches as a slice.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}

impl Deref for Palette {
    type Target = [Colour];

    fn deref(&self) -> &[Colour] {
        &self.colours
    }
}

impl From<Vec<Colour>> for Palette {
    fn from(colours: Vec<Colour>) -> Self {
        Self::new(colours)
    }
}

impl FromIterator<Colour> for Palette {
    fn from_iter<I: IntoIterator<Item = Colour>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
