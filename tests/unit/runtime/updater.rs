use super::*;
use crate::foundation::core::Point;
use crate::foundation::math::degrees;

fn rotating_line_store() -> (ObjectStore, TrackerStore, MobjectId, TrackerId) {
    let mut objects = ObjectStore::new();
    let base = Line::new(Point::new(-1.0, 0.0), Point::new(1.0, 0.0));
    let id = objects.insert(base.clone().into());
    let mut trackers = TrackerStore::new();
    let theta = trackers.create(90.0).unwrap();
    objects
        .add_updater(
            id,
            Box::new(move |m: &mut Mobject, ctx: &UpdateCtx<'_>| {
                let angle = degrees(ctx.tracker(theta)?);
                *m = base.rotated(angle, Point::new(-1.0, 0.0)).into();
                Ok(())
            }),
        )
        .unwrap();
    (objects, trackers, id, theta)
}

#[test]
fn updater_recomputes_from_tracker() {
    let (mut objects, trackers, id, _) = rotating_line_store();
    run_updaters(&mut objects, &trackers, &HashSet::new(), FrameIndex(0), 0.1).unwrap();
    let end = objects.get(id).unwrap().as_line().unwrap().end;
    assert!((end - Point::new(-1.0, 2.0)).hypot() < 1e-9);
}

#[test]
fn running_twice_is_idempotent() {
    let (mut objects, trackers, id, _) = rotating_line_store();
    run_updaters(&mut objects, &trackers, &HashSet::new(), FrameIndex(0), 0.1).unwrap();
    let once = objects.get(id).unwrap().clone();
    run_updaters(&mut objects, &trackers, &HashSet::new(), FrameIndex(1), 0.1).unwrap();
    assert_eq!(objects.get(id).unwrap(), &once);
}

#[test]
fn suspended_mobjects_are_left_alone() {
    let (mut objects, trackers, id, _) = rotating_line_store();
    let before = objects.get(id).unwrap().clone();
    let suspended = HashSet::from([id]);
    run_updaters(&mut objects, &trackers, &suspended, FrameIndex(0), 0.1).unwrap();
    assert_eq!(objects.get(id).unwrap(), &before);
}

#[test]
fn later_updaters_see_earlier_results() {
    let (mut objects, trackers, line_id, _) = rotating_line_store();
    let follower = objects.insert(Line::new(Point::ORIGIN, Point::ORIGIN).into());
    objects
        .add_updater(
            follower,
            Box::new(move |m: &mut Mobject, ctx: &UpdateCtx<'_>| {
                let l = ctx.line(line_id)?;
                *m = Line::new(l.end, l.end).into();
                Ok(())
            }),
        )
        .unwrap();
    run_updaters(&mut objects, &trackers, &HashSet::new(), FrameIndex(0), 0.1).unwrap();
    let start = objects.get(follower).unwrap().as_line().unwrap().start;
    assert!((start - Point::new(-1.0, 2.0)).hypot() < 1e-9);
}

#[test]
fn wrong_kind_lookup_is_a_validation_error() {
    let (objects, trackers, line_id, _) = rotating_line_store();
    let ctx = UpdateCtx {
        objects: &objects,
        trackers: &trackers,
        frame: FrameIndex(0),
        dt: 0.0,
    };
    assert!(ctx.line(line_id).is_ok());
    assert!(matches!(ctx.arrow(line_id), Err(SceneError::Validation(_))));
}
