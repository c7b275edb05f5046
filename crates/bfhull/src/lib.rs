//! Brute-force 2D convex hull of labeled points.
//!
//! Every unordered pair of points is tested as a hull edge against all other
//! points (O(n³)), and the surviving edges are walked into an ordered polygon.
//! This is the correctness baseline other hull routines are checked against.
//!
//! Modules
//! - `hull`: points, segments, the edge evaluator and the boundary assembler.
//! - `cloud`: seeded random point sets for tests, benches, and the CLI.
//!
//! The library never prints; failures come back as `HullError` and
//! diagnostics are `tracing` events the caller may or may not subscribe to.

pub mod cloud;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{
    assemble_hull_polygon, compute_hull_edges, compute_hull_edges_with, convex_hull,
    convex_hull_with, EdgeReport, EvalCfg, EvalStats, HullError, HullPolygon, Orientation, Point,
    Segment,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_cloud, CloudCfg, ReplayToken, Shape};
    pub use crate::hull::{
        assemble_hull_polygon, compute_hull_edges, compute_hull_edges_with, convex_hull,
        convex_hull_with, EdgeReport, EvalCfg, EvalStats, HullError, HullPolygon, Orientation,
        Point, Segment,
    };
}
