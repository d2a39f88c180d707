use crate::core::prelude::*;

/// Returns the first edge normal, of `a` then of `b`, on which the two polygons' projections
/// do not overlap.
///
/// Axes are not normalised: only projections onto the same axis are ever compared, and
/// skipping the square root keeps integer outlines exact.
pub fn find_separating_axis(a: &Polygon, b: &Polygon, contact: ContactPolicy) -> Option<Vec2> {
    a.normals()
        .chain(b.normals())
        .find(|&axis| !a.project(axis).overlaps(&b.project(axis), contact))
}

/// Separating axis test for two convex polygons: they overlap iff no edge normal of either
/// separates their projections.
///
/// For non-convex polygons the answer is the one for their convex hulls.
///
/// ```
/// use spritesat::core::config::ContactPolicy;
/// use spritesat::util::collision::separating_axis_overlap;
/// use spritesat::util::polygon::Polygon;
///
/// let a = Polygon::new([[0, 0], [2, 0], [2, 2], [0, 2]])?;
/// let b = Polygon::new([[1, 1], [3, 1], [3, 3], [1, 3]])?;
/// let c = Polygon::new([[3, 0], [5, 0], [5, 2], [3, 2]])?;
/// assert!(separating_axis_overlap(&a, &b, ContactPolicy::Inclusive));
/// assert!(!separating_axis_overlap(&a, &c, ContactPolicy::Inclusive));
/// # Ok::<(), spritesat::core::error::InvalidPolygon>(())
/// ```
pub fn separating_axis_overlap(a: &Polygon, b: &Polygon, contact: ContactPolicy) -> bool {
    find_separating_axis(a, b, contact).is_none()
}

fn adjust_for_containment(a_proj: &Interval, b_proj: &Interval) -> f32 {
    if a_proj.contains(b_proj) || b_proj.contains(a_proj) {
        let starts = (a_proj.min - b_proj.min).abs();
        let ends = (a_proj.max - b_proj.max).abs();
        f32::min(starts, ends)
    } else {
        0.
    }
}

fn vertex_mean(polygon: &Polygon) -> Vec2 {
    #[allow(clippy::cast_precision_loss)]
    let count = polygon.len() as f32;
    polygon.vertices().iter().copied().sum::<Vec2>() / count
}

/// The shortest translation that moves `a` out of `b`, or `None` if they do not overlap.
///
/// Only meaningful for convex polygons. Touching polygons under
/// [`ContactPolicy::Inclusive`] yield a zero vector.
pub fn minimum_translation(a: &Polygon, b: &Polygon, contact: ContactPolicy) -> Option<Vec2> {
    let mut min_axis = Vec2::zero();
    let mut min_dist = f32::MAX;

    for axis in a.normals().chain(b.normals()).map(|n| n.normed()) {
        let a_proj = a.project(axis);
        let b_proj = b.project(axis);
        if !a_proj.overlaps(&b_proj, contact) {
            return None;
        }
        let dist = a_proj.overlap_len(&b_proj)? + adjust_for_containment(&a_proj, &b_proj);
        if dist < min_dist {
            min_dist = dist;
            min_axis = axis;
        }
    }

    let mtv = min_dist * min_axis;
    if vertex_mean(a).dot(min_axis) < vertex_mean(b).dot(min_axis) {
        Some(-mtv)
    } else {
        Some(mtv)
    }
}
