//! Edge candidate evaluator: exhaustive O(n³) hull edge test.
//!
//! For each unordered pair `(v1, v2)` the implicit line through them is
//! formed and every other point is classified against it. The pair is a
//! hull edge iff all other points lie on one side, or on the line strictly
//! inside the segment. A collinear point beyond either endpoint means a
//! longer collinear edge exists, so the shorter pair is dropped.
//!
//! Precision
//! - With the default `EvalCfg` the collinearity test is `checkVal == 0`
//!   on raw `f64`. Inputs that are only collinear up to rounding can be
//!   classified on either side; integer-valued coordinates of moderate
//!   size are exact.

use tracing::{debug, trace};

use super::types::{EvalCfg, Line2, Point, Segment, Side};

/// Operation counters gathered while evaluating candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Unordered pairs of distinct points considered.
    pub pairs: u64,
    /// Side evaluations `a·x + b·y - c` performed.
    pub side_tests: u64,
    /// Collinear points found strictly inside a candidate segment.
    pub collinear_interior: u64,
    /// Pairs dropped because a collinear point lies beyond an endpoint.
    pub eliminated_collinear: u64,
    /// Pairs dropped because points lie on both sides of the line.
    pub eliminated_opposite: u64,
    /// Pairs accepted as hull edges.
    pub accepted: u64,
}

/// Accepted edges in evaluation order together with the work counters.
#[derive(Clone, Debug, Default)]
pub struct EdgeReport {
    pub edges: Vec<Segment>,
    pub stats: EvalStats,
}

/// Why a candidate was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    CollinearOutside,
    OppositeSides,
}

/// Compute hull edges with the exact collinearity test.
pub fn compute_hull_edges(points: &[Point]) -> Vec<Segment> {
    compute_hull_edges_with(points, EvalCfg::default()).edges
}

/// Compute hull edges under `cfg`, returning edges (pairs `i < j` in index
/// order) and operation counters. Pairs of equal points are never candidates.
pub fn compute_hull_edges_with(points: &[Point], cfg: EvalCfg) -> EdgeReport {
    let mut report = EdgeReport::default();
    for (i, v1) in points.iter().enumerate() {
        for v2 in &points[i + 1..] {
            if v1 == v2 {
                continue;
            }
            report.stats.pairs += 1;
            match check_candidate(points, v1, v2, cfg, &mut report.stats) {
                Ok(()) => {
                    debug!(start = %v1, end = %v2, "hull edge accepted");
                    report.stats.accepted += 1;
                    report.edges.push(Segment::new(v1.clone(), v2.clone()));
                }
                Err(Rejection::CollinearOutside) => report.stats.eliminated_collinear += 1,
                Err(Rejection::OppositeSides) => report.stats.eliminated_opposite += 1,
            }
        }
    }
    report
}

/// Scan all other points against the line through `v1, v2`; stop at the
/// first point that disqualifies the pair.
fn check_candidate(
    points: &[Point],
    v1: &Point,
    v2: &Point,
    cfg: EvalCfg,
    stats: &mut EvalStats,
) -> Result<(), Rejection> {
    let line = Line2::through(v1, v2);
    let mut looking_for: Option<Side> = None;
    for vtest in points {
        if vtest == v1 || vtest == v2 {
            continue;
        }
        stats.side_tests += 1;
        let check_val = line.eval(vtest);
        if check_val.is_nan() {
            // unordered: never eliminates, but claims the negative side if none is set yet
            looking_for.get_or_insert(Side::Negative);
            continue;
        }
        match Side::classify(check_val, cfg) {
            Side::On => {
                if vtest.is_between(v1, v2) {
                    stats.collinear_interior += 1;
                    continue;
                }
                trace!(%vtest, %v1, %v2, "collinear point outside segment");
                return Err(Rejection::CollinearOutside);
            }
            side => match looking_for {
                None => looking_for = Some(side),
                Some(expected) if expected != side => {
                    trace!(%vtest, %v1, %v2, "points on opposite sides of line");
                    return Err(Rejection::OppositeSides);
                }
                Some(_) => {}
            },
        }
    }
    Ok(())
}
