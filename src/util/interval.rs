use crate::core::config::ContactPolicy;
use crate::core::prelude::*;
use serde::Serialize;

/// A closed scalar range `[min, max]`, typically the shadow of a polygon on an axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        check_le!(min, max);
        Self { min, max }
    }

    /// Grows the interval to cover `value`.
    #[must_use]
    pub fn including(self, value: f32) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    pub fn len(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, other: &Interval) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    /// Whether the two intervals overlap. Under [`ContactPolicy::Inclusive`], intervals that
    /// share only an endpoint overlap; under [`ContactPolicy::Strict`] they do not.
    ///
    /// ```
    /// use spritesat::core::config::ContactPolicy;
    /// use spritesat::util::interval::Interval;
    ///
    /// let a = Interval::new(0.0, 1.0);
    /// let b = Interval::new(1.0, 2.0);
    /// assert!(a.overlaps(&b, ContactPolicy::Inclusive));
    /// assert!(!a.overlaps(&b, ContactPolicy::Strict));
    /// ```
    pub fn overlaps(&self, other: &Interval, contact: ContactPolicy) -> bool {
        match contact {
            ContactPolicy::Inclusive => !(self.max < other.min || other.max < self.min),
            ContactPolicy::Strict => self.max > other.min && other.max > self.min,
        }
    }

    /// Length of the shared range, or `None` if the intervals are disjoint. Touching
    /// intervals share a range of length zero.
    pub fn overlap_len(&self, other: &Interval) -> Option<f32> {
        let start = self.min.max(other.min);
        let end = self.max.min(other.max);
        if end < start {
            None
        } else {
            Some(end - start)
        }
    }
}
