#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::interval::Interval;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

/// A 2D vector using 32-bit floating point coordinates.
///
/// Coordinates follow screen conventions: `x` grows to the right and `y` grows downward, the
/// same space sprite outlines are extracted in.
///
/// # Examples
///
/// ```
/// use spritesat::util::linalg::Vec2;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2::from([1, 2]);
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// Equality is exact. Use [`Vec2::almost_eq`] to compare within
/// [`EPSILON`](crate::core::config::EPSILON).
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (negative y-axis).
    #[must_use]
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing downward (positive y-axis).
    #[must_use]
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`Vec2::len`] when comparing lengths to avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a unit vector in the same direction, or the zero vector if this one has no
    /// length.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        match self.len() {
            0.0 => Vec2::zero(),
            len => *self / len,
        }
    }

    /// Returns the vector rotated 90 degrees clockwise on screen.
    ///
    /// For an edge of a polygon wound clockwise on screen, this is the outward normal.
    ///
    /// # Examples
    ///
    /// ```
    /// use spritesat::util::linalg::Vec2;
    /// let vec = Vec2 { x: 3.0, y: 2.0 };
    /// let perpendicular = vec.orthog();
    /// assert_eq!(perpendicular, Vec2 { x: 2.0, y: -3.0 });
    /// assert_eq!(vec.dot(perpendicular), 0.0);
    /// ```
    #[must_use]
    pub fn orthog(&self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: -self.x,
        }
    }

    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product: the signed area of the parallelogram spanned by the two
    /// vectors.
    ///
    /// On a y-down screen it is positive when `other` is clockwise from `self`.
    ///
    /// ```
    /// use spritesat::util::linalg::Vec2;
    /// assert_eq!(Vec2::right().cross(Vec2::down()), 1.0);
    /// assert_eq!(Vec2::right().cross(Vec2::up()), -1.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    #[must_use]
    pub fn component_min(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }
    #[must_use]
    pub fn component_max(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (self.x - rhs.x).abs() < EPSILON && (self.y - rhs.y).abs() < EPSILON
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Vec2::zero())
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<[i32; 2]> for Vec2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: [i32; 2]) -> Self {
        Vec2 {
            x: value[0] as f32,
            y: value[1] as f32,
        }
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from(value: (f32, f32)) -> Self {
        Vec2 {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({:.1}, {:.1})", self.x, self.y)
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), |acc, v| acc + v)
    }
}
impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Shared queries for anything with an axis-aligned rectangular extent.
pub trait AxisAlignedExtent {
    fn top_left(&self) -> Vec2;
    fn bottom_right(&self) -> Vec2;

    fn extent(&self) -> Vec2 {
        self.bottom_right() - self.top_left()
    }
    fn centre(&self) -> Vec2 {
        self.top_left() + self.extent() / 2.0
    }

    fn left(&self) -> f32 {
        self.top_left().x
    }
    fn right(&self) -> f32 {
        self.bottom_right().x
    }
    fn top(&self) -> f32 {
        self.top_left().y
    }
    fn bottom(&self) -> f32 {
        self.bottom_right().y
    }

    fn x_interval(&self) -> Interval {
        Interval::new(self.left(), self.right())
    }
    fn y_interval(&self) -> Interval {
        Interval::new(self.top(), self.bottom())
    }

    /// Boundaries are inside.
    fn contains_point(&self, pos: Vec2) -> bool {
        (self.left()..=self.right()).contains(&pos.x)
            && (self.top()..=self.bottom()).contains(&pos.y)
    }
}

/// An axis-aligned bounding box, stored as its minimum and maximum corners.
///
/// The box is a derived view of some geometry: build it with
/// [`Aabb::from_points`] or
/// [`recompute_bounding_box`](crate::util::polygon::recompute_bounding_box), never by hand
/// editing a corner.
///
/// ```
/// use spritesat::core::config::ContactPolicy;
/// use spritesat::util::linalg::{Aabb, AxisAlignedExtent, Vec2};
///
/// let a = Aabb::new(Vec2::zero(), Vec2::one());
/// let b = Aabb::new(Vec2::right(), Vec2 { x: 2.0, y: 1.0 });
/// assert!(a.overlaps(&b, ContactPolicy::Inclusive));
/// assert!(!a.overlaps(&b, ContactPolicy::Strict));
/// assert_eq!(a.union(&b).extent(), Vec2 { x: 2.0, y: 1.0 });
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Creates a box from its corners. Panics if `min` is not below and left of `max`.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        check_le!(min.x, max.x);
        check_le!(min.y, max.y);
        Self { min, max }
    }

    /// Returns the smallest box containing every point, or `None` for no points. Panics on
    /// points that do not order, i.e. NaN.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (min.component_min(p), max.component_max(p))
        });
        Some(Self::new(min, max))
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Standard interval test on both axes.
    pub fn overlaps(&self, other: &Aabb, contact: ContactPolicy) -> bool {
        self.x_interval().overlaps(&other.x_interval(), contact)
            && self.y_interval().overlaps(&other.y_interval(), contact)
    }

    #[must_use]
    pub fn union(&self, rhs: &Aabb) -> Aabb {
        Self {
            min: self.min.component_min(rhs.min),
            max: self.max.component_max(rhs.max),
        }
    }

    #[must_use]
    pub fn translated(&self, by: Vec2) -> Aabb {
        Self {
            min: self.min + by,
            max: self.max + by,
        }
    }
}

impl AxisAlignedExtent for Aabb {
    fn top_left(&self) -> Vec2 {
        self.min
    }
    fn bottom_right(&self) -> Vec2 {
        self.max
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "aabb[{} .. {}]", self.min, self.max)
    }
}
