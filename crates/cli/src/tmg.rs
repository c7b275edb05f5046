//! METAL TMG graph files: read vertices as hull input, write hulls and clouds.
//!
//! Layout read here:
//!   line 1: `TMG <version> <kind>`
//!   line 2: `<vertices> <edges>`
//!   then `<vertices>` lines `label x y`; edge lines after that are ignored.

use std::path::Path;

use anyhow::{bail, Context, Result};
use bfhull::{HullPolygon, Point};

/// Parse the vertex section of a TMG document.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (_, header) = lines.next().context("empty TMG input")?;
    if !header.starts_with("TMG") {
        bail!("not a TMG file: header is {header:?}");
    }
    let (lno, counts) = lines.next().context("missing vertex/edge count line")?;
    let n: usize = counts
        .split_whitespace()
        .next()
        .context("missing vertex count")?
        .parse()
        .with_context(|| format!("line {lno}: bad vertex count {counts:?}"))?;

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let (lno, line) = lines
            .next()
            .with_context(|| format!("expected {n} vertices, found {}", points.len()))?;
        points.push(parse_vertex(line).with_context(|| format!("line {lno}: {line:?}"))?);
    }
    tracing::debug!(vertices = points.len(), "tmg parsed");
    Ok(points)
}

fn parse_vertex(line: &str) -> Result<Point> {
    let mut tok = line.split_whitespace();
    let label = tok.next().context("missing label")?;
    let x: f64 = tok.next().context("missing x")?.parse().context("bad x")?;
    let y: f64 = tok.next().context("missing y")?.parse().context("bad y")?;
    if !x.is_finite() || !y.is_finite() {
        bail!("non-finite coordinate ({x}, {y})");
    }
    Ok(Point::new(label, x, y))
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Points as a TMG graph with no edges.
pub fn write_points(points: &[Point]) -> String {
    let mut out = format!("TMG 1.0 simple\n{} 0\n", points.len());
    for p in points {
        out.push_str(&vertex_line(p));
    }
    out
}

/// Hull as a TMG cycle graph: one vertex per hull point, edges `i -> i+1`
/// with the last joining back to vertex 0.
pub fn write_hull(poly: &HullPolygon) -> String {
    let k = poly.len();
    let mut out = format!("TMG 1.0 simple\n{k} {k}\n");
    for p in poly.vertices() {
        out.push_str(&vertex_line(p));
    }
    for i in 0..k {
        out.push_str(&format!("{} {} HullSeg{}\n", i, (i + 1) % k, i));
    }
    out
}

fn vertex_line(p: &Point) -> String {
    format!("{} {:?} {:?}\n", p.label(), p.x(), p.y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhull::convex_hull;
    use std::fs;
    use tempfile::tempdir;

    const SQUARE: &str = "TMG 1.0 simple
5 2
SW 0 0
SE 4 0
NE 4.0 4.0
NW 0 4
C 2 2
0 1 SW_SE
1 2 SE_NE
";

    #[test]
    fn parses_vertices_and_skips_edges() {
        let pts = parse_points(SQUARE).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[2], Point::new("NE", 4.0, 4.0));
        assert_eq!(pts[4].label(), "C");
    }

    #[test]
    fn rejects_missing_header_and_short_files() {
        assert!(parse_points("").is_err());
        assert!(parse_points("GRAPH 1.0\n1 0\nA 0 0\n").is_err());
        let err = parse_points("TMG 1.0 simple\n3 0\nA 0 0\n").unwrap_err();
        assert!(format!("{err:#}").contains("expected 3 vertices"));
    }

    #[test]
    fn reports_bad_coordinates_with_line_number() {
        let err = parse_points("TMG 1.0 simple\n1 0\nA zero 0\n").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 3"), "{msg}");
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        for bad in ["A NaN 0", "A 0 inf", "A -inf 1"] {
            let err = parse_points(&format!("TMG 1.0 simple\n1 0\n{bad}\n")).unwrap_err();
            let msg = format!("{err:#}");
            assert!(msg.contains("non-finite coordinate"), "{msg}");
            assert!(msg.contains("line 3"), "{msg}");
        }
    }

    #[test]
    fn hull_output_is_a_closed_cycle_graph() {
        let pts = parse_points(SQUARE).unwrap();
        let poly = convex_hull(&pts).unwrap();
        let text = write_hull(&poly);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "TMG 1.0 simple");
        assert_eq!(lines[1], "4 4");
        assert_eq!(lines.len(), 2 + 4 + 4);
        assert_eq!(lines[9], "3 0 HullSeg3");
        // round-trips as hull input
        assert_eq!(parse_points(&text).unwrap().len(), 4);
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.tmg");
        let pts = vec![Point::new("a", 0.5, 1.0), Point::new("b", -2.0, 3.25)];
        fs::write(&path, write_points(&pts)).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
        assert!(read_points(dir.path().join("missing.tmg")).is_err());
    }
}
