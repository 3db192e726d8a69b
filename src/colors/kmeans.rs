//! Dominant colour extraction with k-means.
//!
//! Every pixel is a point in RGB space. Clustering runs several times with
//! consecutive seeds and keeps the run with the lowest inertia, so the
//! result is deterministic for a given image, `k` and seed.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use image::RgbImage;
use kmeans_colors::{get_kmeans, Kmeans};
use palette::Srgb;

use crate::error::{DecorError, Result};
use crate::types::{Colour, Palette};

/// Number of colours extracted by default.
pub const DEFAULT_COLORS: usize = 5;

/// Largest supported cluster count; cluster labels are stored as bytes.
pub const MAX_COLORS: usize = 256;

/// Tuning for the clustering loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOptions {
    /// Independent restarts; the lowest-inertia run wins.
    pub runs: usize,
    /// Iteration cap per run.
    pub max_iter: usize,
    /// Stop a run once centroid movement falls below this value.
    pub converge: f32,
    /// Seed of the first run; run `i` uses `seed + i`.
    pub seed: u64,
    /// Skip remaining restarts once this much time has passed.
    /// The first run always completes.
    pub deadline: Option<Duration>,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            runs: 10,
            max_iter: 300,
            converge: 1e-5,
            seed: 42,
            deadline: None,
        }
    }
}

/// Extracts a palette of dominant colours from an image.
#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    k: usize,
    options: ClusterOptions,
}

impl PaletteExtractor {
    /// Create an extractor for `k` colours with default options.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            options: ClusterOptions::default(),
        }
    }

    /// Replace the clustering options.
    pub fn with_options(mut self, options: ClusterOptions) -> Self {
        self.options = options;
        self
    }

    /// Cluster the image's pixels and return one swatch per cluster.
    ///
    /// The palette holds `min(k, distinct colours)` swatches in the order
    /// the winning run finalized its centroids.
    pub fn extract(&self, img: &RgbImage) -> Result<Palette> {
        if self.k == 0 {
            return Err(DecorError::InvalidArgument {
                message: "colour count must be at least 1".to_string(),
                help: None,
            });
        }
        if self.k > MAX_COLORS {
            return Err(DecorError::InvalidArgument {
                message: format!("colour count {} is too large", self.k),
                help: Some(format!("Request at most {} colours", MAX_COLORS)),
            });
        }
        if img.width() == 0 || img.height() == 0 {
            return Err(DecorError::InvalidInput {
                message: "image has no pixels to cluster".to_string(),
                help: None,
            });
        }

        let distinct: HashSet<[u8; 3]> = img.pixels().map(|px| px.0).collect();
        let k = self.k.min(distinct.len());

        let points: Vec<Srgb<f32>> = img
            .pixels()
            .map(|px| {
                let [r, g, b] = px.0;
                Srgb::<u8>::new(r, g, b).into_format::<f32>()
            })
            .collect();

        let started = Instant::now();
        let mut best: Option<(f64, Kmeans<Srgb<f32>>)> = None;

        for run in 0..self.options.runs.max(1) as u64 {
            if run > 0 && self.deadline_passed(started) {
                break;
            }

            let result = get_kmeans(
                k,
                self.options.max_iter,
                self.options.converge,
                false,
                &points,
                self.options.seed.wrapping_add(run),
            );
            let score = inertia(&points, &result.centroids);

            // Strictly lower only, so ties keep the earlier seed
            let better = match &best {
                Some((best_score, _)) => score < *best_score,
                None => true,
            };
            if better {
                best = Some((score, result));
            }
        }

        let centroids = best.map(|(_, result)| result.centroids).unwrap_or_default();

        Ok(centroids
            .into_iter()
            .map(|c| Colour::from_unit(c.red, c.green, c.blue))
            .collect())
    }

    fn deadline_passed(&self, started: Instant) -> bool {
        self.options
            .deadline
            .is_some_and(|deadline| started.elapsed() >= deadline)
    }
}

/// Extract `k` dominant colours with default clustering options.
pub fn extract_dominant_colors(img: &RgbImage, k: usize) -> Result<Palette> {
    PaletteExtractor::new(k).extract(img)
}

/// Sum of squared distances from each point to its nearest final centroid,
/// in 0-255 units.
///
/// The labels reported by a run predate its last centroid update, so points
/// are reassigned here rather than trusting `result.indices`.
fn inertia(points: &[Srgb<f32>], centroids: &[Srgb<f32>]) -> f64 {
    points
        .iter()
        .map(|p| {
            centroids
                .iter()
                .map(|c| distance_sq(p, c))
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

fn distance_sq(p: &Srgb<f32>, c: &Srgb<f32>) -> f64 {
    let dr = (p.red - c.red) as f64 * 255.0;
    let dg = (p.green - c.green) as f64 * 255.0;
    let db = (p.blue - c.blue) as f64 * 255.0;
    dr * dr + dg * dg + db * db
}
