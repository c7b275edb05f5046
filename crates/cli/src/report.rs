//! Output formats for `bfhull hull`.

use std::time::Duration;

use anyhow::Result;
use bfhull::{EdgeReport, EvalStats, HullPolygon, Point};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Readable listing, first vertex repeated at the end. Coordinates use
    /// Rust's `{:?}` float form: `4.0`, but `1e16` and `1e-7` at the extremes.
    List,
    /// TMG graph of the hull cycle
    Tmg,
    /// Elapsed time and evaluator operation counts
    Timings,
    /// Machine-readable hull, edges, and counters
    Json,
}

#[derive(Serialize)]
struct PointRecord<'a> {
    label: &'a str,
    x: f64,
    y: f64,
}

impl<'a> From<&'a Point> for PointRecord<'a> {
    fn from(p: &'a Point) -> Self {
        Self {
            label: p.label(),
            x: p.x(),
            y: p.y(),
        }
    }
}

#[derive(Serialize)]
struct StatsRecord {
    pairs: u64,
    side_tests: u64,
    collinear_interior: u64,
    eliminated_collinear: u64,
    eliminated_opposite: u64,
    accepted: u64,
}

impl From<EvalStats> for StatsRecord {
    fn from(s: EvalStats) -> Self {
        Self {
            pairs: s.pairs,
            side_tests: s.side_tests,
            collinear_interior: s.collinear_interior,
            eliminated_collinear: s.eliminated_collinear,
            eliminated_opposite: s.eliminated_opposite,
            accepted: s.accepted,
        }
    }
}

#[derive(Serialize)]
struct HullRecord<'a> {
    points: usize,
    collinear_eps: f64,
    edges: Vec<[PointRecord<'a>; 2]>,
    hull: Vec<PointRecord<'a>>,
    signed_area: f64,
    stats: StatsRecord,
}

/// Everything a formatter may need from one hull run.
pub struct Run<'a> {
    pub points: &'a [Point],
    pub collinear_eps: f64,
    pub report: &'a EdgeReport,
    pub poly: &'a HullPolygon,
    pub elapsed: Duration,
}

pub fn render(format: Format, run: &Run<'_>) -> Result<String> {
    Ok(match format {
        Format::List => list(run.poly),
        Format::Tmg => crate::tmg::write_hull(run.poly),
        Format::Timings => timings(run),
        Format::Json => {
            let mut s = serde_json::to_string_pretty(&hull_record(run))?;
            s.push('\n');
            s
        }
    })
}

/// Whole microseconds in `d`, saturating at `u64::MAX`.
pub fn elapsed_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

fn list(poly: &HullPolygon) -> String {
    let mut out = String::from("Convex hull polygon:\n");
    for p in poly.closed() {
        out.push_str(&format!("{p}\n"));
    }
    out
}

fn timings(run: &Run<'_>) -> String {
    let s = run.report.stats;
    format!(
        "points {}\nhull_vertices {}\nelapsed_us {}\npairs {}\nside_tests {}\ncollinear_interior {}\neliminated_collinear {}\neliminated_opposite {}\naccepted {}\n",
        run.points.len(),
        run.poly.len(),
        elapsed_micros(run.elapsed),
        s.pairs,
        s.side_tests,
        s.collinear_interior,
        s.eliminated_collinear,
        s.eliminated_opposite,
        s.accepted
    )
}

fn hull_record<'a>(run: &Run<'a>) -> HullRecord<'a> {
    HullRecord {
        points: run.points.len(),
        collinear_eps: run.collinear_eps,
        edges: run
            .report
            .edges
            .iter()
            .map(|e| [PointRecord::from(&e.start), PointRecord::from(&e.end)])
            .collect(),
        hull: run.poly.vertices().iter().map(PointRecord::from).collect(),
        signed_area: run.poly.signed_area(),
        stats: run.report.stats.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhull::{convex_hull_with, EvalCfg};
    use serde_json::Value;

    fn square() -> Vec<Point> {
        vec![
            Point::new("a", 0.0, 0.0),
            Point::new("b", 4.0, 0.0),
            Point::new("c", 4.0, 4.0),
            Point::new("d", 0.0, 4.0),
            Point::new("m", 2.0, 2.0),
        ]
    }

    fn render_square(format: Format) -> String {
        let pts = square();
        let (report, poly) = convex_hull_with(&pts, EvalCfg::default());
        let poly = poly.unwrap();
        let run = Run {
            points: &pts,
            collinear_eps: 0.0,
            report: &report,
            poly: &poly,
            elapsed: Duration::from_micros(17),
        };
        render(format, &run).unwrap()
    }

    #[test]
    fn list_repeats_first_vertex() {
        let text = render_square(Format::List);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Convex hull polygon:");
        assert_eq!(lines.len(), 1 + 5);
        assert_eq!(lines[1], "a (0.0,0.0)");
        assert_eq!(lines[5], lines[1]);
    }

    #[test]
    fn timings_lists_counters() {
        let text = render_square(Format::Timings);
        assert!(text.contains("points 5\n"));
        assert!(text.contains("hull_vertices 4\n"));
        assert!(text.contains("elapsed_us 17\n"));
        assert!(text.contains("pairs 10\n"));
        assert!(text.contains("accepted 4\n"));
    }

    #[test]
    fn elapsed_micros_saturates() {
        assert_eq!(elapsed_micros(Duration::from_millis(3)), 3_000);
        assert_eq!(elapsed_micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn list_uses_exponent_form_for_extreme_coordinates() {
        let pts = vec![
            Point::new("a", 0.0, 0.0),
            Point::new("b", 1e16, 0.0),
            Point::new("c", 0.0, 1e16),
        ];
        let poly = bfhull::convex_hull(&pts).unwrap();
        let text = list(&poly);
        assert!(text.contains("b (1e16,0.0)\n"), "{text}");
        assert!(text.contains("c (0.0,1e16)\n"), "{text}");
    }

    #[test]
    fn json_has_hull_edges_and_stats() {
        let v: Value = serde_json::from_str(&render_square(Format::Json)).unwrap();
        assert_eq!(v["points"], 5);
        assert_eq!(v["hull"].as_array().unwrap().len(), 4);
        assert_eq!(v["edges"].as_array().unwrap().len(), 4);
        assert_eq!(v["edges"][0][0]["label"], "a");
        assert_eq!(v["stats"]["pairs"], 10);
        assert_eq!(v["signed_area"].as_f64().unwrap().abs(), 16.0);
    }
}
