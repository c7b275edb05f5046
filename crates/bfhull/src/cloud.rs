//! Seeded random point clouds for benchmarks, tests, and `bfhull gen`.
//!
//! Model
//! - `Square`: uniform in `[-h, h]²`.
//! - `Disk`: uniform in the disk of radius `h` (sqrt-radius sampling).
//! - `Lattice`: integer grid points in `[-h, h]²`. Exact arithmetic makes
//!   collinear triples common and classified without rounding, which is
//!   what the collinear-boundary rules need to be exercised.
//! - Determinism: a replay token `(seed, index)` is mixed into one `StdRng`,
//!   so the `index`-th cloud of a seed can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::Point;

/// Sampling region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Square,
    Disk,
    Lattice,
}

/// Cloud configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: Shape,
    /// Half side length (square, lattice) or radius (disk).
    pub half_extent: f64,
    /// Lattice only: drop repeated grid points so labels map to distinct positions.
    pub dedup: bool,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 32,
            shape: Shape::Disk,
            half_extent: 100.0,
            dedup: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a labeled cloud `p0, p1, ...`.
///
/// A lattice with `dedup` can return fewer than `count` points when the grid
/// is too small to hold them; sampling gives up after `16 * count` draws.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.abs().max(f64::MIN_POSITIVE);
    let mut out: Vec<Point> = Vec::with_capacity(cfg.count);
    let mut attempts = 0usize;
    let max_attempts = cfg.count.saturating_mul(16);
    while out.len() < cfg.count && attempts < max_attempts {
        attempts += 1;
        let (x, y) = match cfg.shape {
            Shape::Square => (rng.gen_range(-h..=h), rng.gen_range(-h..=h)),
            Shape::Disk => {
                let r = h * rng.gen::<f64>().sqrt();
                let theta = rng.gen::<f64>() * std::f64::consts::TAU;
                (r * theta.cos(), r * theta.sin())
            }
            Shape::Lattice => {
                let k = h.floor().max(1.0) as i64;
                (
                    rng.gen_range(-k..=k) as f64,
                    rng.gen_range(-k..=k) as f64,
                )
            }
        };
        if cfg.shape == Shape::Lattice
            && cfg.dedup
            && out.iter().any(|p| p.x() == x && p.y() == y)
        {
            continue;
        }
        out.push(Point::new(format!("p{}", out.len()), x, y));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_cloud() {
        let cfg = CloudCfg::default();
        let a = draw_cloud(cfg, ReplayToken { seed: 7, index: 3 });
        let b = draw_cloud(cfg, ReplayToken { seed: 7, index: 3 });
        let c = draw_cloud(cfg, ReplayToken { seed: 7, index: 4 });
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), cfg.count);
    }

    #[test]
    fn disk_points_stay_inside_radius() {
        let cfg = CloudCfg {
            count: 200,
            shape: Shape::Disk,
            half_extent: 3.0,
            dedup: false,
        };
        for p in draw_cloud(cfg, ReplayToken::new(11)) {
            assert!(p.pos().norm() <= 3.0 + 1e-12);
        }
    }

    #[test]
    fn lattice_is_integral_and_distinct() {
        let cfg = CloudCfg {
            count: 30,
            shape: Shape::Lattice,
            half_extent: 4.0,
            dedup: true,
        };
        let pts = draw_cloud(cfg, ReplayToken::new(5));
        assert_eq!(pts.len(), 30);
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(p.x().fract(), 0.0);
            assert_eq!(p.y().fract(), 0.0);
            assert_eq!(p.label(), format!("p{i}"));
            assert!(pts[..i].iter().all(|q| q.pos() != p.pos()));
        }
    }

    #[test]
    fn tiny_lattice_gives_up() {
        let cfg = CloudCfg {
            count: 50,
            shape: Shape::Lattice,
            half_extent: 1.0,
            dedup: true,
        };
        // only 9 grid points exist in [-1, 1]²
        assert!(draw_cloud(cfg, ReplayToken::new(1)).len() <= 9);
    }
}
