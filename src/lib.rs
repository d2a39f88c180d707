//! Sprite collision: an axis-aligned bounding box broad phase followed by a separating axis
//! narrow phase over sprite outlines.

pub mod assert;
pub mod collider;
pub mod core;
pub mod sprite;
pub mod util;

pub use crate::collider::{check_collision, SpriteCollider};
pub use crate::core::{config::CollisionConfig, error::InvalidPolygon};
pub use crate::sprite::Sprite;
