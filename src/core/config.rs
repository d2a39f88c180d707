use serde::{Deserialize, Serialize};

pub const EPSILON: f32 = 1e-5;

/// Whether intervals that only touch at their boundary count as overlapping.
///
/// The same policy is applied to the bounding-box broad phase and to every SAT projection, so
/// the two phases always agree on touching shapes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactPolicy {
    /// Touching edges or vertices collide.
    #[default]
    Inclusive,
    /// Shapes must share interior area to collide.
    Strict,
}

/// What the narrow phase does with outlines that are not convex.
///
/// SAT on a polygon's own edge normals is only exact for convex polygons.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcavePolicy {
    /// Split non-convex outlines into convex pieces and test the pieces pairwise.
    #[default]
    Decompose,
    /// Fail with [`InvalidPolygon::NotConvex`](crate::core::error::InvalidPolygon::NotConvex).
    Reject,
    /// Run SAT on the raw outline. Projections of an outline match those of its convex hull,
    /// so this over-approximates: shapes resting in a concave notch are reported as colliding.
    Approximate,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub contact: ContactPolicy,
    pub concave: ConcavePolicy,
}

impl CollisionConfig {
    #[must_use]
    pub fn with_contact(mut self, contact: ContactPolicy) -> Self {
        self.contact = contact;
        self
    }
    #[must_use]
    pub fn with_concave(mut self, concave: ConcavePolicy) -> Self {
        self.concave = concave;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_touching_counts_and_decomposes() {
        let config = CollisionConfig::default();
        assert_eq!(config.contact, ContactPolicy::Inclusive);
        assert_eq!(config.concave, ConcavePolicy::Decompose);
    }

    #[test]
    fn builders_override_single_field() {
        let config = CollisionConfig::default().with_contact(ContactPolicy::Strict);
        assert_eq!(config.contact, ContactPolicy::Strict);
        assert_eq!(config.concave, ConcavePolicy::Decompose);
        let config = config.with_concave(ConcavePolicy::Reject);
        assert_eq!(config.contact, ContactPolicy::Strict);
        assert_eq!(config.concave, ConcavePolicy::Reject);
    }

    #[test]
    fn config_survives_bincode() {
        let config = CollisionConfig {
            contact: ContactPolicy::Strict,
            concave: ConcavePolicy::Approximate,
        };
        let bytes = bincode::serialize(&config).unwrap();
        let decoded: CollisionConfig = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, config);
    }
}
