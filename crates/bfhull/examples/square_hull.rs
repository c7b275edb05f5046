//! Hull of a square with one interior point and a collinear edge point.
//!
//! Usage:
//!   cargo run -p bfhull --example square_hull

use bfhull::{assemble_hull_polygon, compute_hull_edges, Point};

fn main() {
    let points = vec![
        Point::new("sw", 0.0, 0.0),
        Point::new("s", 2.0, 0.0),
        Point::new("se", 4.0, 0.0),
        Point::new("ne", 4.0, 4.0),
        Point::new("nw", 0.0, 4.0),
        Point::new("mid", 2.0, 2.0),
    ];
    let edges = compute_hull_edges(&points);
    for e in &edges {
        println!("{e}");
    }
    match assemble_hull_polygon(&edges) {
        Ok(poly) => {
            println!("Convex hull polygon ({:?}):", poly.orientation());
            for p in poly.closed() {
                println!("{p}");
            }
        }
        Err(e) => eprintln!("hull failed: {e}"),
    }
}
