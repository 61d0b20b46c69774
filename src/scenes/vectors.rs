use crate::foundation::color::Color;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::math::degrees;
use crate::mobject::geometry::{Arrow, Line};
use crate::mobject::label::MatrixLabel;
use crate::mobject::model::MobjectId;
use crate::mobject::plane::NumberPlane;
use crate::mobject::MED_SMALL_BUFF;
use crate::runtime::animation::Animation;
use crate::runtime::scene::{PlayOpts, Scene, SceneScript};
use crate::runtime::tracker::TrackerId;

/// Extra room past the tip so a two-row column clears the arrow head.
const LABEL_OFFSET: f64 = MED_SMALL_BUFF + 0.6;

/// Center of the coordinate column shown next to `arrow`'s tip.
pub fn coordinate_label_anchor(arrow: &Arrow) -> Point {
    let dir = arrow.coordinates();
    let len = dir.hypot();
    if len < 1e-9 {
        return arrow.end + Vec2::new(LABEL_OFFSET, 0.0);
    }
    arrow.end + dir * (LABEL_OFFSET / len)
}

/// Column label `[x; y]` for `arrow`, placed next to its tip in the arrow's color.
pub fn coordinate_label(arrow: &Arrow, decimals: usize) -> MatrixLabel {
    let c = arrow.coordinates();
    MatrixLabel::column(&[c.x, c.y], decimals, coordinate_label_anchor(arrow))
        .with_color(arrow.style.stroke)
}

/// The `(2, 2)` vector rotated counterclockwise by `deg` degrees about the origin.
pub fn rotating_vector(deg: f64) -> Arrow {
    Arrow::vector(Vec2::new(2.0, 2.0))
        .with_color(Color::RED)
        .rotated_about_origin(degrees(deg))
}

/// `i` and `j` hat.
pub fn basis_vectors() -> [Arrow; 2] {
    [
        Arrow::vector(Vec2::new(1.0, 0.0)).with_color(Color::GREEN),
        Arrow::vector(Vec2::new(0.0, 1.0)).with_color(Color::RED),
    ]
}

/// Animate the coordinate column of the arrow `id` and the guides from the origin to its tip.
///
/// Returns the ids of the label, the x guide and the y guide.
pub fn vector_to_coords(
    scene: &mut Scene<'_>,
    id: MobjectId,
) -> SceneResult<(MobjectId, MobjectId, MobjectId)> {
    let arrow = scene
        .get(id)
        .and_then(|m| m.as_arrow())
        .cloned()
        .ok_or_else(|| SceneError::validation(format!("{id:?} is not an arrow")))?;
    let c = arrow.coordinates();
    let corner = arrow.start + Vec2::new(c.x, 0.0);

    let label = scene.add(coordinate_label(&arrow, 0));
    let x_line = scene.add(Line::new(arrow.start, corner).with_color(Color::GREEN));
    let y_line = scene.add(Line::new(corner, arrow.end).with_color(Color::RED));

    scene.play(vec![Animation::Write(label)])?;
    scene.play(vec![Animation::Create(x_line)])?;
    scene.play(vec![Animation::Create(y_line)])?;
    Ok((label, x_line, y_line))
}

/// Ids of the rotating part of [`VGraphVectors`].
#[derive(Clone, Copy, Debug)]
pub struct RotatingVectorIds {
    pub vector: MobjectId,
    pub label: MobjectId,
    pub theta: TrackerId,
}

/// Add the red vector, bound to a fresh tracker at 0°, with a coordinate label that follows it.
pub fn add_rotating_vector(scene: &mut Scene<'_>) -> SceneResult<RotatingVectorIds> {
    let theta = scene.tracker(0.0)?;
    let vector = scene.add(rotating_vector(0.0));
    scene.add_updater(vector, move |m, ctx| {
        *m = rotating_vector(ctx.tracker(theta)?).into();
        Ok(())
    })?;

    let label = scene.add(coordinate_label(&rotating_vector(0.0), 1));
    scene.add_updater(label, move |m, ctx| {
        *m = coordinate_label(ctx.arrow(vector)?, 1).into();
        Ok(())
    })?;
    Ok(RotatingVectorIds {
        vector,
        label,
        theta,
    })
}

/// A number plane with a fixed vector broken into coordinates and a vector rotated by a tracker.
pub struct VGraphVectors;

impl SceneScript for VGraphVectors {
    fn name(&self) -> &'static str {
        "VGraphVectors"
    }

    fn description(&self) -> &'static str {
        "vector coordinates on a number plane and a vector rotated by a tracker"
    }

    fn construct(&self, scene: &mut Scene<'_>) -> SceneResult<()> {
        let plane = scene.add(NumberPlane::new().add_coordinates());
        scene.play(vec![Animation::Create(plane)])?;

        let fixed = scene.add(Arrow::vector(Vec2::new(-3.0, -2.0)).with_color(Color::YELLOW));
        scene.play(vec![Animation::Create(fixed)])?;

        for basis in basis_vectors() {
            scene.add(basis);
        }
        vector_to_coords(scene, fixed)?;

        let rotating = add_rotating_vector(scene)?;
        scene.play(vec![Animation::Write(rotating.label)])?;
        scene.play_with(
            vec![Animation::set_value(rotating.theta, 40.0)],
            PlayOpts::run_time(2.0),
        )?;
        Ok(())
    }
}
