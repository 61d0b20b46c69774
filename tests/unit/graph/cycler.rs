use super::*;
use crate::config::RenderConfig;
use crate::encode::sink::NullSink;
use crate::graph::layout::LayoutError;

fn path3() -> Graph {
    Graph::new([1, 2, 3], [(1, 2), (2, 3)]).unwrap()
}

fn headless() -> RenderConfig {
    RenderConfig {
        fps: Some(4),
        ..RenderConfig::default()
    }
    .headless()
}

#[test]
fn unknown_names_fail_before_anything_is_drawn() {
    let err =
        LayoutCycler::from_names(path3(), &["spring", "hexagonal"], LayoutOpts::default())
            .unwrap_err();
    assert!(matches!(
        err,
        SceneError::Layout(LayoutError::UnknownLayout(ref n)) if n == "hexagonal"
    ));
}

#[test]
fn empty_layout_list_is_rejected() {
    assert!(LayoutCycler::new(path3(), Vec::new(), LayoutOpts::default()).is_err());
}

#[test]
fn snapshots_preserve_vertices_and_edges() {
    let cycler =
        LayoutCycler::new(path3(), LayoutKind::ALL.to_vec(), LayoutOpts::default()).unwrap();
    let snaps = cycler.snapshots().unwrap();
    assert_eq!(snaps.len(), 8);
    for s in snaps {
        assert_eq!(s.graph, path3());
        assert_eq!(s.positions.len(), 3);
    }
}

#[test]
fn play_ends_on_the_last_layout() {
    let cycler = LayoutCycler::new(
        path3(),
        vec![LayoutKind::Spring, LayoutKind::Circular, LayoutKind::Spiral],
        LayoutOpts::default(),
    )
    .unwrap();
    let last = cycler.snapshots().unwrap().pop().unwrap();

    let mut sink = NullSink::new();
    let mut scene = Scene::new(&headless(), &mut sink).unwrap();
    let id = cycler.play(&mut scene).unwrap();
    assert_eq!(scene.get(id).unwrap().as_graph(), Some(&last));
    let stats = scene.finish().unwrap();
    // Three plays and three waits of one second each at 4 fps.
    assert_eq!(stats.plays, 3);
    assert_eq!(stats.waits, 3);
    assert_eq!(stats.frames, 24);
}

#[test]
fn planar_failure_surfaces_as_layout_error() {
    let cycler = LayoutCycler::new(
        Graph::complete(9),
        vec![LayoutKind::Spring, LayoutKind::Planar],
        LayoutOpts::default(),
    )
    .unwrap();
    let mut sink = NullSink::new();
    let mut scene = Scene::new(&headless(), &mut sink).unwrap();
    let err = cycler.play(&mut scene).unwrap_err();
    assert!(matches!(err, SceneError::Layout(LayoutError::NotPlanar(_))));
    // Snapshots are computed up front, so nothing was played.
    assert_eq!(scene.stats().frames, 0);
}
