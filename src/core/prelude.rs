#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use tracing::{debug, trace, warn};

#[allow(unused_imports)]
pub use crate::{
    assert::*,
    collider::{check_collision, CollisionStats, SpriteCollider},
    core::{
        config::*,
        error::InvalidPolygon,
    },
    sprite::Sprite,
    util::{
        interval::Interval,
        linalg::{AxisAlignedExtent, Aabb, Vec2},
        polygon::{recompute_bounding_box, Polygon},
    },
};
