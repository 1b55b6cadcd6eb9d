use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::regions::default_regions;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Hands out display coordinates for facility markers, by facility index.
pub trait CoordinateAssigner {
    fn assign(&mut self, index: usize) -> GeoPoint;
}

// ═══════════════════════════════════════════════════════════
// Grid layout
// ═══════════════════════════════════════════════════════════

/// Row-major grid starting at the origin. No hidden state: `coords(i)` is
/// always the same point for the same `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub columns: usize,
    pub origin_lon: f64,
    pub origin_lat: f64,
    pub step_lon: f64,
    pub step_lat: f64,
}

impl Default for GridLayout {
    /// Ten columns two degrees apart, starting south-west of the centre of
    /// the continental US (-98, 39) and stepping east, then north.
    fn default() -> Self {
        Self {
            columns: 10,
            origin_lon: -107.0,
            origin_lat: 34.0,
            step_lon: 2.0,
            step_lat: 2.0,
        }
    }
}

impl GridLayout {
    pub fn coords(&self, index: usize) -> GeoPoint {
        let columns = self.columns.max(1);
        let col = (index % columns) as f64;
        let row = (index / columns) as f64;
        GeoPoint {
            lon: self.origin_lon + col * self.step_lon,
            lat: self.origin_lat + row * self.step_lat,
        }
    }
}

impl CoordinateAssigner for GridLayout {
    fn assign(&mut self, index: usize) -> GeoPoint {
        self.coords(index)
    }
}

// ═══════════════════════════════════════════════════════════
// Population-weighted region sampling
// ═══════════════════════════════════════════════════════════

/// A bounding box with a sampling weight (typically population).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub region: String,
    pub lon_range: (f64, f64),
    pub lat_range: (f64, f64),
    pub weight: f64,
}

/// Picks a region by cumulative weight, then a uniform point inside that
/// region's box shrunk by `inset_fraction` on every side.
///
/// Deterministic for a given random source. A table whose weights sum to
/// zero always yields the last region.
pub struct RegionSampler<'r, R: Rng> {
    regions: &'r [Region],
    cumulative: Vec<f64>,
    total: f64,
    inset_fraction: f64,
    rng: R,
}

impl<'r, R: Rng> RegionSampler<'r, R> {
    /// `None` when `regions` is empty.
    pub fn new(regions: &'r [Region], inset_fraction: f64, rng: R) -> Option<Self> {
        if regions.is_empty() {
            return None;
        }
        let mut running = 0.0;
        let cumulative: Vec<f64> = regions
            .iter()
            .map(|r| {
                running += r.weight;
                running
            })
            .collect();
        Some(Self {
            regions,
            cumulative,
            total: running,
            inset_fraction,
            rng,
        })
    }

    pub fn pick_region(&mut self) -> &'r Region {
        let target = self.rng.gen::<f64>() * self.total;
        let idx = self
            .cumulative
            .iter()
            .position(|&c| c > target)
            .unwrap_or(self.regions.len() - 1);
        &self.regions[idx]
    }

    pub fn sample(&mut self) -> GeoPoint {
        let region = self.pick_region();
        let lon = inset_lerp(region.lon_range, self.inset_fraction, self.rng.gen());
        let lat = inset_lerp(region.lat_range, self.inset_fraction, self.rng.gen());
        GeoPoint { lon, lat }
    }
}

impl<R: Rng> CoordinateAssigner for RegionSampler<'_, R> {
    fn assign(&mut self, _index: usize) -> GeoPoint {
        self.sample()
    }
}

fn inset_lerp((lo, hi): (f64, f64), inset: f64, t: f64) -> f64 {
    let span = hi - lo;
    let start = lo + span * inset;
    let end = hi - span * inset;
    start + (end - start) * t
}

/// Configuration for the region sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionSampling {
    pub seed: u64,
    pub inset_fraction: f64,
    pub regions: Vec<Region>,
}

impl Default for RegionSampling {
    fn default() -> Self {
        Self {
            seed: 42,
            inset_fraction: 0.1,
            regions: default_regions(),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Policy selection
// ═══════════════════════════════════════════════════════════

/// Exactly one coordinate policy is active per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum LayoutPolicy {
    Grid(GridLayout),
    WeightedRegions(RegionSampling),
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self::WeightedRegions(RegionSampling::default())
    }
}

impl LayoutPolicy {
    /// A fresh assigner. The sampler is reseeded on every call so the same
    /// facility list always lands on the same coordinates.
    pub fn assigner(&self) -> Box<dyn CoordinateAssigner + '_> {
        match self {
            Self::Grid(grid) => Box::new(grid.clone()),
            Self::WeightedRegions(sampling) => {
                let rng = StdRng::seed_from_u64(sampling.seed);
                match RegionSampler::new(&sampling.regions, sampling.inset_fraction, rng) {
                    Some(sampler) => Box::new(sampler),
                    None => {
                        tracing::warn!("Region table is empty, falling back to grid layout");
                        Box::new(GridLayout::default())
                    }
                }
            }
        }
    }
}
