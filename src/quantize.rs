//! k-means color quantization
//!
//! Reduces a large RGB sample set to `k` representative colors with the
//! classic assign/recompute loop over samples normalized to the unit color
//! cube. Randomness (initial centroids, empty-cluster reseeds) always comes
//! from a caller-supplied generator, so seeded runs are reproducible.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::Rgb;
use crate::error::{ColorError, Result};

/// Per-channel centroid movement below which the loop stops early
const CONVERGENCE_EPSILON: f32 = 1e-4;

/// Tuning for a quantization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantizeConfig {
    /// Number of clusters (representative colors) to produce
    pub k: usize,
    /// Upper bound on assign/recompute iterations
    pub max_iterations: usize,
    /// Keep every nth pixel when sampling a raster buffer
    pub sample_stride: usize,
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            k: 6,
            max_iterations: 50,
            sample_stride: 1,
        }
    }
}

/// Shared flag for cancelling a running quantization from another thread
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; the loop observes it between iterations.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Cancellation and wall-clock bounds for a quantization run
///
/// Polled between iterations. Hitting a bound ends the run with the best
/// centroids so far rather than an error, since every k-means iteration
/// leaves a usable palette behind.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    deadline: Option<Instant>,
    token: Option<CancelToken>,
}

impl StopSignal {
    /// A signal that never fires
    pub fn never() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_token(mut self, token: CancelToken) -> Self {
        self.token = Some(token);
        self
    }

    fn should_stop(&self) -> bool {
        if self.token.as_ref().is_some_and(CancelToken::is_cancelled) {
            return true;
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Running sums for one cluster during centroid recomputation
#[derive(Debug, Default, Clone, Copy)]
struct ClusterAccum {
    count: usize,
    sum: [f32; 3],
}

/// Partition `samples` into `config.k` clusters and return the centroids.
///
/// Output order follows centroid index, not population. Ties in the
/// assignment step go to the lowest centroid index. A cluster that attracts
/// no samples is reseeded at a fresh random point, so the output always
/// holds exactly `k` colors.
pub fn quantize<R: Rng>(
    samples: &[Rgb],
    config: &QuantizeConfig,
    stop: &StopSignal,
    rng: &mut R,
) -> Result<Vec<Rgb>> {
    if samples.is_empty() {
        return Err(ColorError::InvalidInput {
            reason: "empty sample set".into(),
        });
    }
    if config.k == 0 {
        return Err(ColorError::InvalidInput {
            reason: "k must be at least 1".into(),
        });
    }
    if config.max_iterations == 0 {
        return Err(ColorError::InvalidInput {
            reason: "max_iterations must be at least 1".into(),
        });
    }

    let points: Vec<[f32; 3]> = samples.iter().map(normalize).collect();
    let mut centroids: Vec<[f32; 3]> = (0..config.k).map(|_| random_point(rng)).collect();

    for iteration in 0..config.max_iterations {
        if stop.should_stop() {
            debug!(iteration, "quantization stopped early");
            break;
        }

        let assignments: Vec<usize> = points
            .par_iter()
            .map(|point| nearest_centroid(point, &centroids))
            .collect();

        let mut accums = vec![ClusterAccum::default(); config.k];
        for (point, &cluster) in points.iter().zip(&assignments) {
            let accum = &mut accums[cluster];
            accum.count += 1;
            accum.sum[0] += point[0];
            accum.sum[1] += point[1];
            accum.sum[2] += point[2];
        }

        let mut converged = true;
        for (index, (centroid, accum)) in centroids.iter_mut().zip(&accums).enumerate() {
            if accum.count == 0 {
                // Reseed dead clusters so the output keeps exactly k centroids
                *centroid = random_point(rng);
                converged = false;
                debug!(cluster = index, "reseeded empty cluster");
                continue;
            }
            let n = accum.count as f32;
            let next = [accum.sum[0] / n, accum.sum[1] / n, accum.sum[2] / n];
            if !within_epsilon(centroid, &next) {
                converged = false;
            }
            *centroid = next;
        }

        if converged {
            debug!(iterations = iteration + 1, "quantization converged");
            break;
        }
    }

    Ok(centroids.iter().map(denormalize).collect())
}

fn normalize(rgb: &Rgb) -> [f32; 3] {
    [
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
    ]
}

fn denormalize(point: &[f32; 3]) -> Rgb {
    let channel = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(point[0]), channel(point[1]), channel(point[2]))
}

fn random_point<R: Rng>(rng: &mut R) -> [f32; 3] {
    [rng.gen(), rng.gen(), rng.gen()]
}

fn nearest_centroid(point: &[f32; 3], centroids: &[[f32; 3]]) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        // Squared distance orders the same as Euclidean; strict comparison
        // keeps ties on the lowest index
        let dist = distance_squared(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best = index;
        }
    }
    best
}

fn distance_squared(a: &[f32; 3], b: &[f32; 3]) -> f32 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

fn within_epsilon(a: &[f32; 3], b: &[f32; 3]) -> bool {
    a.iter()
        .zip(b)
        .all(|(x, y)| (x - y).abs() < CONVERGENCE_EPSILON)
}
