use crate::core::prelude::*;
use crate::util::collision;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for how far collision checks get. Shared between threads without locking.
#[derive(Debug, Default)]
pub struct CollisionStats {
    checks: AtomicU64,
    broad_phase_rejections: AtomicU64,
    narrow_phase_runs: AtomicU64,
    sat_tests: AtomicU64,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CollisionStatsSnapshot {
    pub checks: u64,
    pub broad_phase_rejections: u64,
    pub narrow_phase_runs: u64,
    /// Polygon pairs handed to the separating axis test; one narrow phase run may test several
    /// pairs of convex pieces.
    pub sat_tests: u64,
}

impl CollisionStats {
    pub fn snapshot(&self) -> CollisionStatsSnapshot {
        CollisionStatsSnapshot {
            checks: self.checks.load(Ordering::Relaxed),
            broad_phase_rejections: self.broad_phase_rejections.load(Ordering::Relaxed),
            narrow_phase_runs: self.narrow_phase_runs.load(Ordering::Relaxed),
            sat_tests: self.sat_tests.load(Ordering::Relaxed),
        }
    }

    pub fn reset(&self) {
        self.checks.store(0, Ordering::Relaxed);
        self.broad_phase_rejections.store(0, Ordering::Relaxed);
        self.narrow_phase_runs.store(0, Ordering::Relaxed);
        self.sat_tests.store(0, Ordering::Relaxed);
    }
}

/// Decides whether two sprites overlap: bounding boxes first, then the separating axis test
/// on whatever survives.
///
/// The collider never touches the sprites' cached bounding boxes; keeping them current is the
/// sprite owner's job. Checks take `&self`, so one collider can serve many threads as long as
/// nobody mutates a sprite mid-check.
///
/// ```
/// use spritesat::collider::SpriteCollider;
/// use spritesat::sprite::Sprite;
///
/// let collider = SpriteCollider::default();
/// let a = Sprite::from_vertices([[0, 0], [2, 0], [2, 2], [0, 2]])?;
/// let b = Sprite::from_vertices([[1, 1], [3, 1], [3, 3], [1, 3]])?;
/// let c = Sprite::from_vertices([[5, 5], [6, 5], [6, 6], [5, 6]])?;
/// assert!(collider.check_collision(&a, &b)?);
/// assert!(!collider.check_collision(&a, &c)?);
/// assert_eq!(collider.stats().snapshot().broad_phase_rejections, 1);
/// # Ok::<(), spritesat::core::error::InvalidPolygon>(())
/// ```
#[derive(Debug, Default)]
pub struct SpriteCollider {
    config: CollisionConfig,
    stats: CollisionStats,
}

impl SpriteCollider {
    pub fn new(config: CollisionConfig) -> Self {
        Self {
            config,
            stats: CollisionStats::default(),
        }
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn stats(&self) -> &CollisionStats {
        &self.stats
    }

    pub fn check_collision(&self, a: &Sprite, b: &Sprite) -> Result<bool, InvalidPolygon> {
        self.stats.checks.fetch_add(1, Ordering::Relaxed);
        let convex = a.polygon().is_convex() && b.polygon().is_convex();
        if !convex && self.config.concave == ConcavePolicy::Reject {
            return Err(InvalidPolygon::NotConvex);
        }

        let contact = self.config.contact;
        if !a.bounding_box().overlaps(b.bounding_box(), contact) {
            self.stats
                .broad_phase_rejections
                .fetch_add(1, Ordering::Relaxed);
            trace!(
                "broad phase: {} and {} apart",
                a.bounding_box(),
                b.bounding_box()
            );
            return Ok(false);
        }

        self.stats.narrow_phase_runs.fetch_add(1, Ordering::Relaxed);
        let rv = if !convex && self.config.concave == ConcavePolicy::Decompose {
            // Pieces are built on first use, only once the boxes overlap.
            self.pieces_overlap(a.convex_pieces()?, b.convex_pieces()?)
        } else {
            if !convex {
                crate::warn_every_seconds!(
                    5,
                    "approximating SAT for non-convex outlines ({} and {} vertices)",
                    a.polygon().len(),
                    b.polygon().len()
                );
            }
            self.separating_axis_overlap(a.polygon(), b.polygon())
        };
        trace!("narrow phase: overlap = {rv}");
        Ok(rv)
    }

    fn separating_axis_overlap(&self, a: &Polygon, b: &Polygon) -> bool {
        self.stats.sat_tests.fetch_add(1, Ordering::Relaxed);
        collision::separating_axis_overlap(a, b, self.config.contact)
    }

    fn pieces_overlap(&self, pieces_a: &[Sprite], pieces_b: &[Sprite]) -> bool {
        let contact = self.config.contact;
        pieces_a
            .iter()
            .cartesian_product(pieces_b)
            .filter(|(a, b)| a.bounding_box().overlaps(b.bounding_box(), contact))
            .any(|(a, b)| self.separating_axis_overlap(a.polygon(), b.polygon()))
    }
}

/// [`SpriteCollider::check_collision`] with the default configuration: touching counts as
/// overlap and non-convex outlines are decomposed.
pub fn check_collision(a: &Sprite, b: &Sprite) -> Result<bool, InvalidPolygon> {
    SpriteCollider::default().check_collision(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: i32, y: i32, side: i32) -> Sprite {
        Sprite::from_vertices([[x, y], [x + side, y], [x + side, y + side], [x, y + side]])
            .unwrap()
    }

    fn l_shape() -> Sprite {
        Sprite::from_vertices([[0, 0], [4, 0], [4, 2], [2, 2], [2, 4], [0, 4]]).unwrap()
    }

    #[test]
    fn disjoint_boxes_skip_narrow_phase() {
        let collider = SpriteCollider::default();
        assert!(!collider
            .check_collision(&square(0, 0, 1), &square(5, 0, 1))
            .unwrap());
        let stats = collider.stats().snapshot();
        assert_eq!(stats.checks, 1);
        assert_eq!(stats.broad_phase_rejections, 1);
        assert_eq!(stats.narrow_phase_runs, 0);
        assert_eq!(stats.sat_tests, 0);
    }

    #[test]
    fn overlapping_boxes_run_sat_once_for_convex() {
        let collider = SpriteCollider::default();
        assert!(collider
            .check_collision(&square(0, 0, 2), &square(1, 1, 2))
            .unwrap());
        let stats = collider.stats().snapshot();
        assert_eq!(stats.narrow_phase_runs, 1);
        assert_eq!(stats.sat_tests, 1);

        collider.stats().reset();
        assert_eq!(collider.stats().snapshot(), CollisionStatsSnapshot::default());
    }

    #[test]
    fn square_in_notch_under_each_concave_policy() {
        let notch = square(3, 3, 1);
        let l_shape = l_shape();

        let decompose = SpriteCollider::default();
        assert_eq!(decompose.check_collision(&l_shape, &notch), Ok(false));
        assert_eq!(decompose.check_collision(&notch, &l_shape), Ok(false));

        let approximate =
            SpriteCollider::new(CollisionConfig::default().with_concave(ConcavePolicy::Approximate));
        assert_eq!(approximate.check_collision(&l_shape, &notch), Ok(true));

        let reject =
            SpriteCollider::new(CollisionConfig::default().with_concave(ConcavePolicy::Reject));
        assert_eq!(
            reject.check_collision(&l_shape, &notch),
            Err(InvalidPolygon::NotConvex)
        );
        assert_eq!(
            reject.check_collision(&notch, &square(0, 0, 1)),
            Ok(false)
        );
    }

    #[test]
    fn reject_fails_even_when_far_apart() {
        let reject =
            SpriteCollider::new(CollisionConfig::default().with_concave(ConcavePolicy::Reject));
        assert_eq!(
            reject.check_collision(&l_shape(), &square(100, 100, 1)),
            Err(InvalidPolygon::NotConvex)
        );
        assert_eq!(reject.stats().snapshot().broad_phase_rejections, 0);
    }

    #[test]
    fn far_apart_sprites_are_not_decomposed() {
        let collider = SpriteCollider::default();
        let l_shape = l_shape();
        let far = l_shape.translated(Vec2::splat(100.)).unwrap();
        assert_eq!(collider.check_collision(&l_shape, &far), Ok(false));
        assert!(!l_shape.has_cached_pieces());
        assert!(!far.has_cached_pieces());

        assert_eq!(collider.check_collision(&l_shape, &square(3, 3, 1)), Ok(false));
        assert!(l_shape.has_cached_pieces());
    }

    #[test]
    fn decomposed_sprite_still_hits_its_arms() {
        let collider = SpriteCollider::default();
        let l_shape = l_shape();
        assert_eq!(collider.check_collision(&l_shape, &square(3, 0, 2)), Ok(true));
        assert_eq!(collider.check_collision(&l_shape, &square(0, 3, 2)), Ok(true));
        assert_eq!(collider.check_collision(&l_shape, &l_shape), Ok(true));
        // Resting against the inner corner counts under the default policy.
        assert_eq!(collider.check_collision(&l_shape, &square(2, 2, 1)), Ok(true));
        let strict =
            SpriteCollider::new(CollisionConfig::default().with_contact(ContactPolicy::Strict));
        assert_eq!(strict.check_collision(&l_shape, &square(2, 2, 1)), Ok(false));
    }

    #[test]
    fn free_function_uses_defaults() {
        assert_eq!(check_collision(&square(0, 0, 1), &square(1, 0, 1)), Ok(true));
    }

    #[test]
    fn collider_is_shareable_between_threads() {
        let collider = SpriteCollider::default();
        let sprites = (0..8).map(|i| square(i * 2, 0, 3)).collect_vec();
        std::thread::scope(|s| {
            for pair in sprites.windows(2) {
                let collider = &collider;
                s.spawn(move || {
                    assert_eq!(collider.check_collision(&pair[0], &pair[1]), Ok(true));
                });
            }
        });
        assert_eq!(collider.stats().snapshot().checks, 7);
    }
}
