use crate::animation::ease::RateFunc;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::SceneResult;
use crate::foundation::math::{homogeneous_det, homogeneous_matrix};
use crate::mobject::geometry::Arrow;
use crate::mobject::label::{Label, MatrixLabel, format_coordinate};
use crate::mobject::model::MobjectId;
use crate::mobject::plane::NumberPlane;
use crate::runtime::animation::Animation;
use crate::runtime::scene::{PlayOpts, Scene, SceneScript};
use crate::runtime::tracker::TrackerId;
use crate::runtime::updater::UpdateCtx;
use crate::scenes::vectors::rotating_vector;

pub const FIXED_VECTOR: Vec2 = Vec2::new(3.0, 1.0);
pub const DET_DECIMALS: usize = 2;

const DET_LABEL_AT: Point = Point::new(-4.5, 3.0);
const MATRIX_AT: Point = Point::new(-4.5, 1.5);

/// Text of the live determinant label.
pub fn determinant_text(det: f64) -> String {
    format!("det = {}", format_coordinate(det, DET_DECIMALS))
}

/// The 3x3 homogeneous matrix of `a` and `b` as a matrix label, one decimal per entry.
pub fn matrix_label(a: Vec2, b: Vec2, center: Point) -> MatrixLabel {
    let m = homogeneous_matrix(a, b);
    let entries = (0..3)
        .map(|r| (0..3).map(|c| format_coordinate(m[(r, c)], 1)).collect())
        .collect();
    MatrixLabel {
        font_size: 32.0,
        ..MatrixLabel::new(entries, center)
    }
}

/// Handles of everything [`DeterminantLabel`] animates.
#[derive(Clone, Copy, Debug)]
pub struct DeterminantIds {
    pub fixed: MobjectId,
    pub rotating: MobjectId,
    pub det_label: MobjectId,
    pub matrix: Option<MobjectId>,
    pub theta: TrackerId,
}

/// Determinant of the current endpoints of the two arrows in `ctx`.
pub fn current_det(
    ctx: &UpdateCtx<'_>,
    fixed: MobjectId,
    rotating: MobjectId,
) -> SceneResult<f64> {
    homogeneous_det(
        ctx.arrow(fixed)?.coordinates(),
        ctx.arrow(rotating)?.coordinates(),
    )
}

/// Add both vectors and the live labels, with updaters attached.
///
/// With `show_plane` a number plane goes underneath; `show_matrix` adds the 3x3 matrix the
/// determinant is taken of.
pub fn build(
    scene: &mut Scene<'_>,
    show_plane: bool,
    show_matrix: bool,
) -> SceneResult<DeterminantIds> {
    if show_plane {
        scene.add(NumberPlane::new());
    }
    let theta = scene.tracker(0.0)?;
    let fixed_arrow = Arrow::vector(FIXED_VECTOR).with_color(Color::YELLOW);
    let start = rotating_vector(0.0);
    let det = homogeneous_det(fixed_arrow.coordinates(), start.coordinates())?;
    let matrix_start = matrix_label(fixed_arrow.coordinates(), start.coordinates(), MATRIX_AT);

    let fixed = scene.add(fixed_arrow);
    let rotating = scene.add(start);
    scene.add_updater(rotating, move |m, ctx| {
        *m = rotating_vector(ctx.tracker(theta)?).into();
        Ok(())
    })?;

    let det_label = scene.add(Label::new(determinant_text(det), DET_LABEL_AT));
    scene.add_updater(det_label, move |m, ctx| {
        let style = *m.style();
        let text = determinant_text(current_det(ctx, fixed, rotating)?);
        let mut label = Label::new(text, DET_LABEL_AT);
        label.style = style;
        *m = label.into();
        Ok(())
    })?;

    let matrix = if show_matrix {
        let id = scene.add(matrix_start);
        scene.add_updater(id, move |m, ctx| {
            let style = *m.style();
            let mut label = matrix_label(
                ctx.arrow(fixed)?.coordinates(),
                ctx.arrow(rotating)?.coordinates(),
                MATRIX_AT,
            );
            label.style = style;
            *m = label.into();
            Ok(())
        })?;
        Some(id)
    } else {
        None
    };

    Ok(DeterminantIds {
        fixed,
        rotating,
        det_label,
        matrix,
        theta,
    })
}

/// A fixed and a rotating vector with a label showing the determinant they span.
pub struct DeterminantLabel;

impl SceneScript for DeterminantLabel {
    fn name(&self) -> &'static str {
        "DeterminantLabel"
    }

    fn description(&self) -> &'static str {
        "live determinant of a fixed and a rotating vector"
    }

    fn construct(&self, scene: &mut Scene<'_>) -> SceneResult<()> {
        let ids = build(scene, true, true)?;
        scene.wait_default()?;
        scene.play_with(
            vec![Animation::set_value(ids.theta, 360.0)],
            PlayOpts {
                run_time: 4.0,
                rate: RateFunc::Linear,
            },
        )?;
        scene.wait_default()
    }
}
