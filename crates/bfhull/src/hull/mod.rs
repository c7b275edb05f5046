//! Brute-force 2D convex hull (edge test + boundary assembly).
//!
//! Purpose
//! - Decide hull membership for every unordered pair of input points by an
//!   exhaustive side test, then walk the surviving edges into an ordered
//!   polygon. O(n³) on purpose: this is the correctness baseline, not a
//!   fast hull.
//!
//! Pipeline
//! - `compute_hull_edges` (evaluator) → `Vec<Segment>` in pair order.
//! - `assemble_hull_polygon` (assembler) → `HullPolygon` or `HullError`.
//! - `convex_hull` runs both.
//!
//! Duplicate points
//! - A pair of equal points (same label and coordinates) is never a
//!   candidate, so input made only of copies of one point has no edges.
//!   Mixed with other points, every copy is skipped as "equal to the
//!   endpoint" and pairs with the others on its own, so the assembler
//!   usually reports `NonCyclicEdgeSet`.
//!
//! Code cross-refs: `types::{Point, Segment, Line2, EvalCfg}`,
//! `edges::{compute_hull_edges_with, EvalStats}`, `assemble::HullPolygon`.

mod assemble;
mod edges;
mod types;

pub use assemble::{assemble_hull_polygon, HullError, HullPolygon, Orientation};
pub use edges::{compute_hull_edges, compute_hull_edges_with, EdgeReport, EvalStats};
pub use types::{EvalCfg, Line2, Point, Segment, Side};

/// Evaluator followed by assembler, exact collinearity test.
pub fn convex_hull(points: &[Point]) -> Result<HullPolygon, HullError> {
    assemble_hull_polygon(&compute_hull_edges(points))
}

/// Like `convex_hull`, but with explicit tolerances; also returns the
/// accepted edges and evaluator counters.
pub fn convex_hull_with(
    points: &[Point],
    cfg: EvalCfg,
) -> (EdgeReport, Result<HullPolygon, HullError>) {
    let report = compute_hull_edges_with(points, cfg);
    let poly = assemble_hull_polygon(&report.edges);
    (report, poly)
}
