// src/render/tessellate.rs
use crate::geometry::{arc_points, Path, PathCmd};
use macroquad::prelude::*;

/// A filled triangle.
pub type Triangle = [Vec2; 3];

/// Strip between two equally sampled arcs.
///
/// `outer[k]` is paired with `inner[n - k]`: the inner arc is traced in the
/// opposite direction, as in a ring outline.
pub fn band(outer: &[Vec2], inner: &[Vec2]) -> Vec<Triangle> {
    let n = outer.len().min(inner.len());
    if n < 2 {
        return Vec::new();
    }
    let inner_at = |k: usize| inner[inner.len() - 1 - k];
    let mut tris = Vec::with_capacity((n - 1) * 2);
    for k in 0..n - 1 {
        let (o0, o1) = (outer[k], outer[k + 1]);
        let (i0, i1) = (inner_at(k), inner_at(k + 1));
        tris.push([o0, o1, i1]);
        tris.push([o0, i1, i0]);
    }
    tris
}

/// Triangles fanning out of `pivot` over a closed loop.
///
/// Exact for polygons that are star-shaped about `pivot`, which every sector
/// is about its circle centre.
pub fn fan(points: &[Vec2], pivot: Vec2) -> Vec<Triangle> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n)
        .map(|i| [pivot, points[i], points[(i + 1) % n]])
        .filter(|t| triangle_area(t) != 0.0)
        .collect()
}

/// Signed area, positive for clockwise on a y-down surface.
pub fn triangle_area(t: &Triangle) -> f32 {
    let [a, b, c] = *t;
    ((b - a).perp_dot(c - a)) * 0.5
}

/// Fill a sector, ring or clip path.
pub fn fill(path: &Path) -> Vec<Triangle> {
    let arcs: Vec<(Vec2, f32, f32, f32)> = path
        .arcs()
        .filter_map(|cmd| match *cmd {
            PathCmd::Arc {
                center,
                radius,
                start,
                ..
            } => Some((center, radius, start, cmd.traced_sweep())),
            _ => None,
        })
        .collect();

    // Ring: two opposite arcs of the same sweep, sampled alike.
    if let [(oc, or, os, ow), (ic, ir, is, iw)] = arcs.as_slice() {
        if *or > 0.0 && *ir > 0.0 && (ow + iw).abs() < 1e-4 {
            return band(&arc_points(*oc, *or, *os, *ow), &arc_points(*ic, *ir, *is, *iw));
        }
    }

    let lines = path.flatten();
    let pivot = arcs
        .first()
        .map(|(center, ..)| *center)
        .or_else(|| lines.first().and_then(|l| l.points.first().copied()))
        .unwrap_or(Vec2::ZERO);
    lines
        .iter()
        .filter(|l| l.points.len() >= 3)
        .flat_map(|l| fan(&l.points, pivot))
        .collect()
}

/// Edges of every subpath; closed subpaths get their closing edge.
pub fn outline(path: &Path) -> Vec<(Vec2, Vec2)> {
    path.flatten()
        .iter()
        .flat_map(|line| {
            let pts = &line.points;
            let closing = (line.closed && pts.len() > 2).then(|| (pts[pts.len() - 1], pts[0]));
            pts.windows(2).map(|w| (w[0], w[1])).chain(closing)
        })
        .collect()
}
