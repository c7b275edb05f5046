//! Hull boundary assembly: walk the accepted edge set into an ordered cycle.
//!
//! The first edge (in evaluation order) seeds the walk with both endpoints.
//! Each step scans the unconsumed edges for one touching the frontier point
//! and appends its other endpoint. Edges live in an arena with a `consumed`
//! flag; nothing is removed while iterating.
//!
//! A well-formed edge set is a single simple cycle, so the last consumed edge
//! leads back to the first vertex. Anything else (no continuation, early or
//! repeated visits, an open path) is reported as `NonCyclicEdgeSet` instead
//! of looping or indexing past the end.

use std::fmt;

use tracing::debug;

use super::types::{Point, Segment};

/// Errors surfaced by boundary assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer than two accepted edges; no polygon can be formed.
    InsufficientHullEdges { found: usize },
    /// The edge set is not one simple cycle. `frontier` is the label of the
    /// point the walk was stuck at; `remaining` counts unconsumed edges.
    NonCyclicEdgeSet { frontier: String, remaining: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientHullEdges { found } => write!(
                f,
                "insufficient hull edges: found {} (need at least 2; input has fewer than 3 distinct non-collinear points)",
                found
            ),
            HullError::NonCyclicEdgeSet {
                frontier,
                remaining,
            } => write!(
                f,
                "hull edges do not form a single cycle: stuck at {} with {} edge(s) left",
                frontier, remaining
            ),
        }
    }
}

impl std::error::Error for HullError {}

/// Rotational direction of a polygon's vertex order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Zero signed area.
    Degenerate,
}

/// Ordered hull boundary. Vertices are distinct; the edge from the last
/// vertex back to the first is implied.
#[derive(Clone, Debug, PartialEq)]
pub struct HullPolygon {
    vertices: Vec<Point>,
}

impl HullPolygon {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Vertices followed by the first one again, for drawing a closed ring.
    pub fn closed(&self) -> impl Iterator<Item = &Point> + '_ {
        self.vertices.iter().chain(self.vertices.first())
    }

    /// Boundary edges as consecutive vertex pairs, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.vertices.iter().zip(self.closed().skip(1))
    }

    /// Shoelace signed area; positive for counterclockwise order.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(p, q)| p.x() * q.y() - p.y() * q.x())
            .sum::<f64>()
    }

    pub fn orientation(&self) -> Orientation {
        let area = self.signed_area();
        if area > 0.0 {
            Orientation::CounterClockwise
        } else if area < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Degenerate
        }
    }
}

/// Arena of edges plus per-edge consumption flags.
struct EdgeArena<'a> {
    edges: &'a [Segment],
    consumed: Vec<bool>,
    remaining: usize,
}

impl<'a> EdgeArena<'a> {
    fn new(edges: &'a [Segment]) -> Self {
        Self {
            edges,
            consumed: vec![false; edges.len()],
            remaining: edges.len(),
        }
    }

    fn consume(&mut self, k: usize) {
        debug_assert!(!self.consumed[k]);
        self.consumed[k] = true;
        self.remaining -= 1;
    }

    /// First unconsumed edge touching `p`; consumes it and returns its other end.
    fn take_next(&mut self, p: &Point) -> Option<&'a Point> {
        let edges = self.edges;
        let (k, next) = edges
            .iter()
            .enumerate()
            .filter(|(k, _)| !self.consumed[*k])
            .find_map(|(k, e)| e.other_end(p).map(|q| (k, q)))?;
        self.consume(k);
        Some(next)
    }
}

/// Order the accepted edges into a polygon.
///
/// Pre: `edges` is the evaluator's output (or any set meant to be one cycle).
/// Post: `Ok(poly)` has `poly.len() == edges.len()` and walks the cycle once,
/// starting at `edges[0].start`, then `edges[0].end`.
pub fn assemble_hull_polygon(edges: &[Segment]) -> Result<HullPolygon, HullError> {
    if edges.len() < 2 {
        return Err(HullError::InsufficientHullEdges { found: edges.len() });
    }
    let mut arena = EdgeArena::new(edges);
    let first = &edges[0];
    arena.consume(0);
    let mut vertices: Vec<Point> = vec![first.start.clone(), first.end.clone()];
    let mut frontier: &Point = &first.end;
    debug!(start = %first.start, end = %first.end, "assembly seeded");

    while arena.remaining > 0 {
        let next = arena
            .take_next(frontier)
            .ok_or_else(|| HullError::NonCyclicEdgeSet {
                frontier: frontier.label().to_string(),
                remaining: arena.remaining,
            })?;
        if next == &first.start {
            if arena.remaining > 0 || vertices.len() < 3 {
                // closed a sub-cycle with edges left over, or walked a pair twice
                return Err(HullError::NonCyclicEdgeSet {
                    frontier: next.label().to_string(),
                    remaining: arena.remaining,
                });
            }
            debug!(vertices = vertices.len(), "assembly closed");
            return Ok(HullPolygon { vertices });
        }
        if vertices.contains(next) {
            return Err(HullError::NonCyclicEdgeSet {
                frontier: next.label().to_string(),
                remaining: arena.remaining,
            });
        }
        debug!(vertex = %next, "assembly step");
        vertices.push(next.clone());
        frontier = next;
    }
    // all edges used but the walk ended away from the first vertex
    Err(HullError::NonCyclicEdgeSet {
        frontier: frontier.label().to_string(),
        remaining: 0,
    })
}
