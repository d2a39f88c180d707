use anyhow::{Context, Result};
use spritesat::core::config::{CollisionConfig, ConcavePolicy, ContactPolicy};
use spritesat::util::linalg::Vec2;
use spritesat::{Sprite, SpriteCollider};
use tracing::{info, warn};

fn square(top_left: Vec2, side: f32) -> Result<Sprite> {
    Sprite::from_vertices([
        top_left,
        top_left + side * Vec2::right(),
        top_left + side * Vec2::one(),
        top_left + side * Vec2::down(),
    ])
    .with_context(|| format!("square at {top_left}"))
}

fn diamond(centre: Vec2, radius: f32) -> Result<Sprite> {
    Sprite::from_vertices([
        centre + radius * Vec2::up(),
        centre + radius * Vec2::right(),
        centre + radius * Vec2::down(),
        centre + radius * Vec2::left(),
    ])
    .with_context(|| format!("diamond at {centre}"))
}

fn scenarios() -> Result<Vec<(&'static str, Sprite, Sprite)>> {
    let unit = square(Vec2::zero(), 1.)?;
    Ok(vec![
        ("disjoint squares", unit.clone(), square(Vec2::splat(2.), 1.)?),
        ("overlapping squares", unit.clone(), square(Vec2::splat(0.5), 1.)?),
        ("shared edge", unit.clone(), square(Vec2::right(), 1.)?),
        (
            "diamond off a corner",
            square(Vec2::zero(), 2.5)?,
            diamond(Vec2::splat(4.), 2.)?,
        ),
        (
            "square in a notch",
            Sprite::from_vertices([[0, 0], [4, 0], [4, 2], [2, 2], [2, 4], [0, 4]])
                .context("l shape")?,
            square(Vec2::splat(3.), 1.)?,
        ),
    ])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let scenarios = scenarios()?;
    for contact in [ContactPolicy::Inclusive, ContactPolicy::Strict] {
        for concave in [
            ConcavePolicy::Decompose,
            ConcavePolicy::Approximate,
            ConcavePolicy::Reject,
        ] {
            let collider = SpriteCollider::new(CollisionConfig { contact, concave });
            for (name, a, b) in &scenarios {
                match collider.check_collision(a, b) {
                    Ok(hit) => info!("{contact:?}/{concave:?}: {name}: {hit}"),
                    Err(e) => warn!("{contact:?}/{concave:?}: {name}: {e}"),
                }
            }
            info!("{contact:?}/{concave:?}: {:?}", collider.stats().snapshot());
        }
    }
    Ok(())
}
