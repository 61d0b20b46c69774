use super::*;

fn path3() -> Graph {
    Graph::new([1, 2, 3], [(1, 2), (2, 3)]).unwrap()
}

fn max_abs(pos: &[Point]) -> f64 {
    pos.iter().fold(0.0f64, |m, p| m.max(p.x.abs()).max(p.y.abs()))
}

#[test]
fn names_roundtrip_through_from_str() {
    for kind in LayoutKind::ALL {
        assert_eq!(kind.name().parse::<LayoutKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn unknown_name_is_a_configuration_error() {
    let err = "grid".parse::<LayoutKind>().unwrap_err();
    assert_eq!(err, LayoutError::UnknownLayout("grid".to_string()));
    assert!(err.to_string().contains("kamada_kawai"));
}

#[test]
fn every_layout_positions_every_vertex_within_scale() {
    let g = path3();
    let opts = LayoutOpts::default();
    for kind in LayoutKind::ALL {
        let pos = compute_layout(&g, kind, &opts).unwrap();
        assert_eq!(pos.len(), g.vertex_count(), "{kind}");
        assert!((max_abs(&pos) - opts.scale).abs() < 1e-9, "{kind}");
    }
}

#[test]
fn degenerate_graphs_sit_at_origin() {
    let empty = Graph::new([], []).unwrap();
    assert!(compute_layout(&empty, LayoutKind::Spring, &LayoutOpts::default())
        .unwrap()
        .is_empty());
    let single = Graph::new([7], []).unwrap();
    for kind in LayoutKind::ALL {
        let pos = compute_layout(&single, kind, &LayoutOpts::default()).unwrap();
        assert_eq!(pos, vec![Point::ORIGIN]);
    }
}

#[test]
fn seeded_layouts_are_reproducible() {
    let g = Graph::complete(5);
    let opts = LayoutOpts {
        seed: 42,
        ..LayoutOpts::default()
    };
    for kind in [LayoutKind::Spring, LayoutKind::Random] {
        let a = compute_layout(&g, kind, &opts).unwrap();
        let b = compute_layout(&g, kind, &opts).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn circular_places_vertices_on_a_ring() {
    let g = Graph::complete(6);
    let pos = compute_layout(&g, LayoutKind::Circular, &LayoutOpts::default()).unwrap();
    let r0 = pos[0].to_vec2().hypot();
    for p in &pos {
        assert!((p.to_vec2().hypot() - r0).abs() < 1e-9);
    }
}

#[test]
fn planar_rejects_dense_graphs() {
    let err = compute_layout(&Graph::complete(9), LayoutKind::Planar, &LayoutOpts::default())
        .unwrap_err();
    assert!(matches!(err, LayoutError::NotPlanar(_)));
}

#[test]
fn planar_drawings_have_no_crossings() {
    let g = Graph::complete(4);
    let pos = compute_layout(&g, LayoutKind::Planar, &LayoutOpts::default()).unwrap();
    assert!(!has_crossing(&pos, &g.edge_indices()));

    let tree = Graph::new([1, 2, 3, 4, 5], [(1, 2), (1, 3), (2, 4), (2, 5)]).unwrap();
    let pos = compute_layout(&tree, LayoutKind::Planar, &LayoutOpts::default()).unwrap();
    assert!(!has_crossing(&pos, &tree.edge_indices()));
}

fn cube() -> Graph {
    let edges = (0u32..8).flat_map(|v| {
        [1u32, 2, 4]
            .into_iter()
            .filter(move |bit| v & bit == 0)
            .map(move |bit| (v, v | bit))
    });
    Graph::new(0..8, edges).unwrap()
}

#[test]
fn planar_draws_the_cube_without_crossings() {
    let g = cube();
    assert_eq!((g.vertex_count(), g.edge_count()), (8, 12));
    let pos = compute_layout(&g, LayoutKind::Planar, &LayoutOpts::default()).unwrap();
    assert_eq!(pos.len(), 8);
    assert!(pos.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert!(!has_crossing(&pos, &g.edge_indices()));
}

#[test]
fn chordless_cycles_are_the_faces_of_the_cube() {
    let cycles = chordless_cycles(&cube(), 5, 48);
    assert_eq!(cycles.len(), 6);
    let adj = cube().adjacency();
    for c in &cycles {
        assert_eq!(c.len(), 4);
        for i in 0..4 {
            assert!(adj[c[i]].contains(&c[(i + 1) % 4]), "{c:?} is not a walk");
            assert!(!adj[c[i]].contains(&c[(i + 2) % 4]), "{c:?} has a chord");
        }
    }
}

#[test]
fn chordless_cycles_skip_cycles_with_chords() {
    // A square with one diagonal: two triangles, and the outer square is not induced.
    let g = Graph::new([0, 1, 2, 3], [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
    let cycles = chordless_cycles(&g, 5, 48);
    assert_eq!(cycles, vec![vec![0, 1, 2], vec![0, 2, 3]]);
}

#[test]
fn segment_intersection_cases() {
    let p = Point::new;
    assert!(segments_intersect(p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(1.0, 0.0)));
    assert!(!segments_intersect(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)));
    // Collinear overlap counts as a crossing.
    assert!(segments_intersect(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 0.0), p(3.0, 0.0)));
}

#[test]
fn shell_layout_validates_explicit_shells() {
    let g = path3();
    let opts = LayoutOpts {
        shells: Some(vec![vec![2], vec![1, 3]]),
        ..LayoutOpts::default()
    };
    let pos = compute_layout(&g, LayoutKind::Shell, &opts).unwrap();
    // A single-vertex inner shell sits at the center.
    assert!(pos[1].to_vec2().hypot() < 1e-9);

    let missing = LayoutOpts {
        shells: Some(vec![vec![1, 2]]),
        ..LayoutOpts::default()
    };
    assert!(matches!(
        compute_layout(&g, LayoutKind::Shell, &missing),
        Err(LayoutError::InvalidShells(_))
    ));
    let repeated = LayoutOpts {
        shells: Some(vec![vec![1, 2], vec![2, 3]]),
        ..LayoutOpts::default()
    };
    assert!(matches!(
        compute_layout(&g, LayoutKind::Shell, &repeated),
        Err(LayoutError::InvalidShells(_))
    ));
}

#[test]
fn kamada_kawai_respects_graph_distance_order() {
    let g = path3();
    let pos = compute_layout(&g, LayoutKind::KamadaKawai, &LayoutOpts::default()).unwrap();
    let d01 = (pos[0] - pos[1]).hypot();
    let d02 = (pos[0] - pos[2]).hypot();
    assert!(d02 > d01);
}

#[test]
fn rescale_centers_on_origin() {
    let pos = rescale(vec![Point::new(10.0, 10.0), Point::new(12.0, 10.0)], 2.0);
    assert_eq!(pos, vec![Point::new(-2.0, 0.0), Point::new(2.0, 0.0)]);
}
