use crate::foundation::color::Color;
use crate::foundation::core::Point;
use crate::foundation::error::SceneResult;
use crate::foundation::math::degrees;
use crate::mobject::geometry::{Angle, Line};
use crate::mobject::label::Label;
use crate::mobject::model::MobjectId;
use crate::mobject::SMALL_BUFF;
use crate::runtime::animation::Animation;
use crate::runtime::scene::{PlayOpts, Scene, SceneScript};
use crate::runtime::tracker::TrackerId;

pub const ARC_RADIUS: f64 = 0.5;
/// The θ label sits on a wider arc so it clears the marker.
pub const LABEL_RADIUS: f64 = ARC_RADIUS + 3.0 * SMALL_BUFF;
pub const START_DEGREES: f64 = 110.0;

const PIVOT: Point = Point::new(-1.0, 0.0);

fn reference_line() -> Line {
    Line::new(PIVOT, Point::new(1.0, 0.0))
}

/// Where the θ label goes for the given pair of lines.
pub fn label_anchor(fixed: &Line, moving: &Line) -> SceneResult<Point> {
    Ok(Angle::between(fixed, moving, LABEL_RADIUS, false)?.point_from_proportion(0.5))
}

/// Handles of everything [`MovingAngle`] puts on screen.
#[derive(Clone, Copy, Debug)]
pub struct MovingAngleIds {
    pub fixed: MobjectId,
    pub moving: MobjectId,
    pub arc: MobjectId,
    pub label: MobjectId,
    pub theta: TrackerId,
}

/// Add the two lines, the angle arc and its label at the starting angle.
pub fn build(scene: &mut Scene<'_>) -> SceneResult<MovingAngleIds> {
    let theta = scene.tracker(START_DEGREES)?;
    let fixed_line = reference_line();
    let moving_line = reference_line().rotated(degrees(START_DEGREES), PIVOT);
    let arc = Angle::between(&fixed_line, &moving_line, ARC_RADIUS, false)?;
    let label = Label::new("θ", label_anchor(&fixed_line, &moving_line)?);

    Ok(MovingAngleIds {
        fixed: scene.add(fixed_line),
        moving: scene.add(moving_line),
        arc: scene.add(arc),
        label: scene.add(label),
        theta,
    })
}

/// Tie the moving line, the arc and the label to the θ tracker.
pub fn attach_updaters(scene: &mut Scene<'_>, ids: MovingAngleIds) -> SceneResult<()> {
    let reference = reference_line();
    scene.add_updater(ids.moving, move |m, ctx| {
        let style = *m.style();
        let mut line = reference.rotated(degrees(ctx.tracker(ids.theta)?), PIVOT);
        line.style = style;
        *m = line.into();
        Ok(())
    })?;

    scene.add_updater(ids.arc, move |m, ctx| {
        let style = *m.style();
        let (fixed, moving) = (ctx.line(ids.fixed)?, ctx.line(ids.moving)?);
        let mut arc = Angle::between(fixed, moving, ARC_RADIUS, false)?;
        arc.style = style;
        *m = arc.into();
        Ok(())
    })?;

    scene.add_updater(ids.label, move |m, ctx| {
        m.move_to(label_anchor(ctx.line(ids.fixed)?, ctx.line(ids.moving)?)?);
        Ok(())
    })
}

/// An angle marker and θ label following a line rotated by a tracker.
pub struct MovingAngle;

impl SceneScript for MovingAngle {
    fn name(&self) -> &'static str {
        "MovingAngle"
    }

    fn description(&self) -> &'static str {
        "angle arc and θ label tracking a rotating line"
    }

    fn construct(&self, scene: &mut Scene<'_>) -> SceneResult<()> {
        let ids = build(scene)?;
        scene.wait_default()?;

        attach_updaters(scene, ids)?;
        scene.play(vec![Animation::set_value(ids.theta, 40.0)])?;
        scene.play(vec![Animation::increment_value(ids.theta, 140.0)])?;
        scene.play_with(
            vec![Animation::set_color(ids.label, Color::RED)],
            PlayOpts::run_time(0.5),
        )?;
        scene.play(vec![Animation::set_value(ids.theta, 350.0)])?;
        Ok(())
    }
}
