//! Convex decomposition of simple polygons.
//!
//! Ear clipping triangulates the outline, then adjacent pieces are merged greedily for as long
//! as the merged piece stays convex (Hertel-Mehlhorn). The pieces exactly cover the original
//! polygon, so two outlines intersect iff some pair of their pieces does.

use crate::core::prelude::*;
use crate::util::polygon;

/// Splits `polygon` into convex pieces. A convex polygon comes back unchanged as the only
/// piece.
///
/// Fails with [`InvalidPolygon::NotSimple`] if the outline crosses itself so badly that no ear
/// can be clipped.
pub fn convex_decomposition(polygon: &Polygon) -> Result<Vec<Polygon>, InvalidPolygon> {
    if polygon.is_convex() {
        return Ok(vec![polygon.clone()]);
    }
    let vertices = polygon.vertices();
    let triangles = ear_clip(vertices)?;
    let triangle_count = triangles.len();
    let pieces = merge_while_convex(vertices, triangles)
        .into_iter()
        .map(|piece| Polygon::new(piece.into_iter().map(|i| vertices[i])))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "decomposed {} vertices into {} convex pieces ({} triangles)",
        vertices.len(),
        pieces.len(),
        triangle_count
    );
    Ok(pieces)
}

/// Inclusive of the boundary. Assumes `a`, `b`, `c` turn clockwise on screen.
fn in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    (b - a).cross(p - a) >= 0. && (c - b).cross(p - b) >= 0. && (a - c).cross(p - c) >= 0.
}

/// Triangulates a positively-wound outline, returning vertex indices.
fn ear_clip(vertices: &[Vec2]) -> Result<Vec<Vec<usize>>, InvalidPolygon> {
    let tolerance = polygon::area_tolerance(vertices);
    let mut remaining = (0..vertices.len()).collect_vec();
    let mut triangles = Vec::with_capacity(vertices.len().saturating_sub(2));
    while remaining.len() > 3 {
        let n = remaining.len();
        let mut clipped = None;
        for i in 0..n {
            let prev = remaining[(i + n - 1) % n];
            let curr = remaining[i];
            let next = remaining[(i + 1) % n];
            let (a, b, c) = (vertices[prev], vertices[curr], vertices[next]);
            let turn = (b - a).cross(c - b);
            if turn.abs() <= tolerance {
                // Collinear: drop the vertex without emitting a sliver.
                clipped = Some(i);
                break;
            }
            if turn < 0. {
                continue;
            }
            let blocked = remaining
                .iter()
                .filter(|&&j| j != prev && j != curr && j != next)
                .any(|&j| in_triangle(vertices[j], a, b, c));
            if !blocked {
                triangles.push(vec![prev, curr, next]);
                clipped = Some(i);
                break;
            }
        }
        let Some(i) = clipped else {
            return Err(InvalidPolygon::NotSimple);
        };
        remaining.remove(i);
    }
    let last = remaining.iter().map(|&i| vertices[i]).collect_vec();
    if polygon::signed_area(&last) > tolerance {
        triangles.push(remaining);
    }
    Ok(triangles)
}

/// Finds an edge `a -> b` of `p` that appears as `b -> a` in `q`, returning the index of `a` in
/// `p` and of `b` in `q`.
fn shared_edge(p: &[usize], q: &[usize]) -> Option<(usize, usize)> {
    for i in 0..p.len() {
        let (a, b) = (p[i], p[(i + 1) % p.len()]);
        for j in 0..q.len() {
            if q[j] == b && q[(j + 1) % q.len()] == a {
                return Some((i, j));
            }
        }
    }
    None
}

fn try_merge(vertices: &[Vec2], p: &[usize], q: &[usize]) -> Option<Vec<usize>> {
    let (i, j) = shared_edge(p, q)?;
    // Walk p from b round to a, then q strictly between a and b.
    let merged = (0..p.len())
        .map(|k| p[(i + 1 + k) % p.len()])
        .chain((0..q.len() - 2).map(|k| q[(j + 2 + k) % q.len()]))
        .collect_vec();
    let points = merged.iter().map(|&k| vertices[k]).collect_vec();
    polygon::is_convex(&points).then_some(merged)
}

fn merge_while_convex(vertices: &[Vec2], mut pieces: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    'search: loop {
        for i in 0..pieces.len() {
            for j in (i + 1)..pieces.len() {
                if let Some(merged) = try_merge(vertices, &pieces[i], &pieces[j]) {
                    pieces[i] = merged;
                    pieces.swap_remove(j);
                    continue 'search;
                }
            }
        }
        return pieces;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_area(pieces: &[Polygon]) -> f32 {
        pieces.iter().map(Polygon::area).sum()
    }

    #[test]
    fn convex_polygon_is_its_own_piece() {
        let square = Polygon::new([[0, 0], [1, 0], [1, 1], [0, 1]]).unwrap();
        let pieces = convex_decomposition(&square).unwrap();
        assert_eq!(pieces, vec![square]);
    }

    #[test]
    fn l_shape_splits_into_two() {
        let l_shape = Polygon::new([[0, 0], [2, 0], [2, 1], [1, 1], [1, 2], [0, 2]]).unwrap();
        let pieces = convex_decomposition(&l_shape).unwrap();
        assert_eq!(pieces.len(), 2);
        assert!(pieces.iter().all(Polygon::is_convex));
        assert_eq!(total_area(&pieces), 3.0);
    }

    #[test]
    fn comb_pieces_cover_outline() {
        // Three teeth hanging down from a bar.
        let comb = Polygon::new([
            [0, 0],
            [7, 0],
            [7, 3],
            [6, 3],
            [6, 1],
            [4, 1],
            [4, 3],
            [3, 3],
            [3, 1],
            [1, 1],
            [1, 3],
            [0, 3],
        ])
        .unwrap();
        assert!(!comb.is_convex());
        let pieces = convex_decomposition(&comb).unwrap();
        assert!(pieces.len() >= 3);
        assert!(pieces.len() <= comb.len() - 2);
        assert!(pieces.iter().all(Polygon::is_convex));
        assert!((total_area(&pieces) - comb.area()).abs() < 1e-3);
    }

    #[test]
    fn counter_clockwise_input_decomposes_too() {
        let arrow = Polygon::new([[0, 0], [2, 4], [4, 0], [2, 1]]).unwrap();
        assert!(!arrow.is_convex());
        let pieces = convex_decomposition(&arrow).unwrap();
        assert_eq!(pieces.len(), 2);
        assert!((total_area(&pieces) - arrow.area()).abs() < 1e-3);
    }

    #[test]
    fn collinear_vertices_are_skipped() {
        let l_shape = Polygon::new([
            [0, 0],
            [1, 0],
            [2, 0],
            [2, 1],
            [1, 1],
            [1, 2],
            [0, 2],
            [0, 1],
        ])
        .unwrap();
        let pieces = convex_decomposition(&l_shape).unwrap();
        assert!(pieces.iter().all(Polygon::is_convex));
        assert!((total_area(&pieces) - 3.0).abs() < 1e-3);
    }

    #[test]
    fn small_outlines_decompose_like_large_ones() {
        let l_shape = [[0, 0], [2, 0], [2, 1], [1, 1], [1, 2], [0, 2]];
        for scale in [1e-3_f32, 1e3] {
            let polygon = Polygon::new(l_shape.map(|[x, y]| Vec2 {
                x: x as f32 * scale,
                y: y as f32 * scale,
            }))
            .unwrap();
            let pieces = convex_decomposition(&polygon).unwrap();
            assert_eq!(pieces.len(), 2);
            assert!(pieces.iter().all(Polygon::is_convex));
            let area = 3.0 * scale * scale;
            assert!((total_area(&pieces) - area).abs() <= 1e-3 * area);
        }
    }

    #[test]
    fn no_ear_means_not_simple() {
        // Wound the wrong way for ear clipping: every turn is reflex.
        let vertices = [Vec2::zero(), Vec2::down(), Vec2::one(), Vec2::right()];
        assert_eq!(ear_clip(&vertices), Err(InvalidPolygon::NotSimple));
    }
}
