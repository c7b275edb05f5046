//! Basic types for the brute-force hull: labeled points, candidate segments,
//! the implicit line through two points, and the evaluator tolerance.
//!
//! - `Point`: label plus coordinates; equality is exact on all three.
//! - `Segment`: ordered pair of points, direction kept but not significant.
//! - `Line2`: `a·x + b·y = c` through two points, used for side tests.
//! - `EvalCfg`: centralizes the collinearity tolerance (exact by default).

use std::fmt;

use nalgebra::Vector2;

/// Evaluator configuration (tolerances).
///
/// `collinear_eps == 0.0` reproduces the exact `checkVal == 0` test. Any
/// positive value treats `|checkVal| <= eps` as collinear, which changes the
/// accepted edge set for near-collinear inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvalCfg {
    pub collinear_eps: f64,
}

impl Default for EvalCfg {
    fn default() -> Self {
        Self { collinear_eps: 0.0 }
    }
}

impl EvalCfg {
    /// Exact comparison. Near-collinear points produced by rounding may land
    /// on either side of the line.
    #[inline]
    pub fn exact() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_collinear_eps(eps: f64) -> Self {
        Self {
            collinear_eps: eps.max(0.0),
        }
    }
}

/// Labeled 2D input point. Immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    label: String,
    pos: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            pos: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    #[inline]
    pub fn squared_distance(&self, other: &Point) -> f64 {
        (self.pos - other.pos).norm_squared()
    }

    /// Strict betweenness for a point already known to be collinear with
    /// `a` and `b`: closer to each endpoint than the endpoints are to each other.
    pub fn is_between(&self, a: &Point, b: &Point) -> bool {
        let span = a.squared_distance(b);
        self.squared_distance(a) < span && self.squared_distance(b) < span
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?},{:?})", self.label, self.pos.x, self.pos.y)
    }
}

/// Candidate (or accepted) hull edge between two input points.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The endpoint opposite to `p`, if `p` is one of the two endpoints.
    /// `start` is checked first.
    #[inline]
    pub fn other_end(&self, p: &Point) -> Option<&Point> {
        if &self.start == p {
            Some(&self.end)
        } else if &self.end == p {
            Some(&self.start)
        } else {
            None
        }
    }

    /// True if this segment joins `a` and `b`, in either direction.
    #[inline]
    pub fn joins(&self, a: &Point, b: &Point) -> bool {
        (&self.start == a && &self.end == b) || (&self.start == b && &self.end == a)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment from {} to {}", self.start, self.end)
    }
}

/// Implicit line `a·x + b·y = c` through two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line2 {
    #[inline]
    pub fn through(v1: &Point, v2: &Point) -> Self {
        Self {
            a: v2.y() - v1.y(),
            b: v1.x() - v2.x(),
            c: v1.x() * v2.y() - v1.y() * v2.x(),
        }
    }

    /// `a·x + b·y - c`; zero on the line, sign gives the side.
    /// Evaluated left to right without fused operations so results are
    /// reproducible bit for bit.
    #[inline]
    pub fn eval(&self, p: &Point) -> f64 {
        self.a * p.x() + self.b * p.y() - self.c
    }
}

/// Side of a line a test point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Positive,
    Negative,
    On,
}

impl Side {
    #[inline]
    pub fn classify(check_val: f64, cfg: EvalCfg) -> Side {
        if check_val.abs() <= cfg.collinear_eps {
            Side::On
        } else if check_val > 0.0 {
            Side::Positive
        } else {
            Side::Negative
        }
    }
}
