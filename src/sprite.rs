use crate::core::prelude::*;
use crate::util::{decompose, polygon};
use std::sync::OnceLock;

/// A collidable outline together with its cached bounding box.
///
/// The bounding box is derived from the polygon and every mutating method recomputes it, so
/// the two never disagree. Non-convex sprites also cache their convex decomposition the first
/// time it is asked for; translating keeps that cache, replacing the polygon drops it.
#[derive(Clone, Debug)]
pub struct Sprite {
    polygon: Polygon,
    bounding_box: Aabb,
    pieces: OnceLock<Result<Vec<Sprite>, InvalidPolygon>>,
}

impl Sprite {
    pub fn new(polygon: Polygon) -> Self {
        let bounding_box = polygon::recompute_bounding_box(&polygon);
        Self {
            polygon,
            bounding_box,
            pieces: OnceLock::new(),
        }
    }

    /// Builds a sprite straight from an outline, e.g. the integer vertices of an extracted
    /// silhouette.
    ///
    /// ```
    /// use spritesat::core::error::InvalidPolygon;
    /// use spritesat::sprite::Sprite;
    ///
    /// assert!(Sprite::from_vertices([[0, 0], [4, 0], [2, 3]]).is_ok());
    /// assert_eq!(
    ///     Sprite::from_vertices([[0, 0], [4, 0]]).unwrap_err(),
    ///     InvalidPolygon::TooFewVertices { count: 2 }
    /// );
    /// ```
    pub fn from_vertices<V: Into<Vec2>>(
        vertices: impl IntoIterator<Item = V>,
    ) -> Result<Self, InvalidPolygon> {
        Ok(Self::new(Polygon::new(vertices)?))
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn bounding_box(&self) -> &Aabb {
        &self.bounding_box
    }

    /// Rescans the polygon to refresh the cached bounding box.
    pub fn recompute_bounding_box(&mut self) {
        self.bounding_box = polygon::recompute_bounding_box(&self.polygon);
    }

    pub fn set_polygon(&mut self, polygon: Polygon) {
        self.polygon = polygon;
        self.pieces = OnceLock::new();
        self.recompute_bounding_box();
    }

    /// Moves the sprite by `by`. On error the sprite is left where it was.
    pub fn translate(&mut self, by: Vec2) -> Result<(), InvalidPolygon> {
        let polygon = self.polygon.translated(by)?;
        let pieces = match self.pieces.take() {
            Some(Ok(pieces)) => pieces
                .iter()
                .map(|piece| piece.translated(by))
                .collect::<Result<Vec<_>, _>>()
                .ok(),
            _ => None,
        };
        self.polygon = polygon;
        self.recompute_bounding_box();
        if let Some(pieces) = pieces {
            let _ = self.pieces.set(Ok(pieces));
        }
        Ok(())
    }

    pub fn translated(&self, by: Vec2) -> Result<Self, InvalidPolygon> {
        let mut rv = self.clone();
        rv.translate(by)?;
        Ok(rv)
    }

    #[cfg(test)]
    pub(crate) fn has_cached_pieces(&self) -> bool {
        self.pieces.get().is_some()
    }

    /// The convex pieces covering this sprite. A convex sprite is its own single piece.
    pub fn convex_pieces(&self) -> Result<&[Sprite], InvalidPolygon> {
        if self.polygon.is_convex() {
            return Ok(std::slice::from_ref(self));
        }
        self.pieces
            .get_or_init(|| {
                decompose::convex_decomposition(&self.polygon)
                    .map(|pieces| pieces.into_iter().map(Sprite::new).collect())
            })
            .as_deref()
            .map_err(Clone::clone)
    }
}
