use crate::core::prelude::*;
use serde::{Deserialize, Serialize};

/// A simple closed outline with a fixed winding order.
///
/// By convention, vertices are stored clockwise as drawn on a y-down screen, so that the
/// shoelace sum is positive and [`Vec2::orthog`] of each edge points outward. Input wound the
/// other way is reversed on construction, which means two polygons can never disagree on
/// winding.
///
/// Construction rejects anything the collision test cannot handle: fewer than 3 vertices,
/// non-finite coordinates, consecutive duplicates, or zero area. Tolerances scale with the
/// outline's own extent, so validity does not depend on units.
///
/// ```
/// use spritesat::util::polygon::Polygon;
///
/// let square = Polygon::new([[0, 0], [0, 1], [1, 1], [1, 0]])?;
/// assert_eq!(square.area(), 1.0);
/// assert!(square.is_convex());
/// # Ok::<(), spritesat::core::error::InvalidPolygon>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Polygon {
    vertices: Vec<Vec2>,
    convex: bool,
}

impl Polygon {
    pub fn new<V: Into<Vec2>>(
        vertices: impl IntoIterator<Item = V>,
    ) -> Result<Self, InvalidPolygon> {
        let mut vertices = vertices.into_iter().map(Into::into).collect_vec();
        validate(&vertices)?;
        if signed_area(&vertices) < 0. {
            trace!("reversing counter-clockwise outline of {} vertices", vertices.len());
            vertices.reverse();
        }
        let convex = is_convex(&vertices);
        Ok(Self { vertices, convex })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_convex(&self) -> bool {
        self.convex
    }

    /// Always positive.
    pub fn area(&self) -> f32 {
        signed_area(&self.vertices)
    }

    /// Each edge `v[i] -> v[(i + 1) % n]`, in winding order.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.vertices
            .iter()
            .copied()
            .circular_tuple_windows()
    }

    /// Outward normal of every edge, in the same order as [`Polygon::edges`]. Not normalised.
    pub fn normals(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.edges().map(|(u, v)| (v - u).orthog())
    }

    /// Projects every vertex onto `axis` and returns the covered range.
    pub fn project(&self, axis: Vec2) -> Interval {
        let first = axis.dot(self.vertices[0]);
        self.vertices[1..]
            .iter()
            .fold(Interval::new(first, first), |acc, vertex| {
                acc.including(axis.dot(*vertex))
            })
    }

    /// Moves every vertex by `by`, re-validating the result: a huge or non-finite offset can
    /// push coordinates out of range or collapse neighbouring vertices together.
    pub fn translated(&self, by: Vec2) -> Result<Self, InvalidPolygon> {
        Self::new(self.vertices.iter().map(|&vertex| vertex + by))
    }
}

impl TryFrom<Vec<Vec2>> for Polygon {
    type Error = InvalidPolygon;

    fn try_from(value: Vec<Vec2>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Polygon> for Vec<Vec2> {
    fn from(value: Polygon) -> Self {
        value.vertices
    }
}

/// Scans every vertex once, tracking the running minimum and maximum of each coordinate.
///
/// Whoever owns the polygon calls this after every change to its vertices; the collision test
/// itself never does.
pub fn recompute_bounding_box(polygon: &Polygon) -> Aabb {
    let mut min = Vec2::splat(f32::MAX);
    let mut max = Vec2::splat(f32::MIN);
    for &vertex in polygon.vertices() {
        min = min.component_min(vertex);
        max = max.component_max(vertex);
    }
    Aabb::new(min, max)
}

/// Half the shoelace sum. Positive for outlines wound clockwise on a y-down screen.
///
/// Summed relative to the first vertex, so far-from-origin outlines keep their precision.
pub fn signed_area(vertices: &[Vec2]) -> f32 {
    let Some(&origin) = vertices.first() else {
        return 0.;
    };
    vertices
        .iter()
        .map(|&v| v - origin)
        .circular_tuple_windows()
        .map(|(u, v)| u.cross(v))
        .sum::<f32>()
        / 2.
}

/// Tolerance for areas and cross products: [`EPSILON`] times the squared diagonal of the
/// outline's bounding box.
pub fn area_tolerance(vertices: &[Vec2]) -> f32 {
    let Some((&first, rest)) = vertices.split_first() else {
        return 0.;
    };
    let (min, max) = rest.iter().fold((first, first), |(min, max), &v| {
        (min.component_min(v), max.component_max(v))
    });
    EPSILON * (max - min).len_squared()
}

/// Whether every turn of a positively-wound outline bends the same way. Collinear runs are
/// allowed.
pub fn is_convex(vertices: &[Vec2]) -> bool {
    let tolerance = area_tolerance(vertices);
    vertices
        .iter()
        .circular_tuple_windows()
        .all(|(&u, &v, &w)| (v - u).cross(w - v) >= -tolerance)
}

fn validate(vertices: &[Vec2]) -> Result<(), InvalidPolygon> {
    if vertices.len() < 3 {
        return Err(InvalidPolygon::TooFewVertices {
            count: vertices.len(),
        });
    }
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(InvalidPolygon::NonFinite { index });
    }
    // Squared distance below (EPSILON * diagonal)^2.
    let tolerance = area_tolerance(vertices);
    if let Some(index) = vertices
        .iter()
        .circular_tuple_windows()
        .position(|(&u, &v)| (u - v).len_squared() <= EPSILON * tolerance)
    {
        return Err(InvalidPolygon::DuplicateVertex { index });
    }
    if signed_area(vertices).abs() <= tolerance {
        return Err(InvalidPolygon::ZeroArea);
    }
    Ok(())
}
