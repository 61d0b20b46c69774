use super::*;

fn path3() -> Graph {
    Graph::new([1, 2, 3], [(1, 2), (2, 3)]).unwrap()
}

#[test]
fn positions_must_match_vertex_count() {
    assert!(matches!(
        GraphMobject::new(path3(), vec![Point::ORIGIN]),
        Err(SceneError::Validation(_))
    ));
}

#[test]
fn every_layout_keeps_vertices_and_edges() {
    for kind in LayoutKind::ALL {
        let g = GraphMobject::with_layout(path3(), kind, &LayoutOpts::default()).unwrap();
        assert_eq!(g.graph.vertex_count(), 3, "{kind}");
        assert_eq!(g.graph.edge_count(), 2, "{kind}");
        assert_eq!(g.positions.len(), 3, "{kind}");
    }
}

#[test]
fn edge_segments_follow_positions() {
    let g = GraphMobject::new(
        path3(),
        vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
    )
    .unwrap();
    assert_eq!(
        g.edge_segments(),
        vec![
            (Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
            (Point::new(1.0, 0.0), Point::new(1.0, 1.0)),
        ]
    );
    assert_eq!(g.position_of(3), Some(Point::new(1.0, 1.0)));
    assert_eq!(g.center(), Point::new(0.5, 0.5));
}

#[test]
fn interpolation_moves_vertices_linearly() {
    let a = GraphMobject::new(path3(), vec![Point::ORIGIN; 3]).unwrap();
    let b = GraphMobject::new(path3(), vec![Point::new(2.0, 2.0); 3]).unwrap();
    let mid = a.interpolate(&b, 0.5).unwrap();
    assert!(mid.positions.iter().all(|p| *p == Point::new(1.0, 1.0)));
    assert_eq!(a.interpolate(&b, 1.0).unwrap(), b);
}
