// Host-side tests for the scene graph and the composed hero scene.

use glam::{Mat4, Vec3};
use portfolio_core::{
    DeviceClass, Drawable, HeroScene, Material, NodeId, PropKind, SceneError, SceneGraph,
    Transform,
};

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-4
}

#[test]
fn world_matrix_composes_parent_transforms() {
    let mut g = SceneGraph::new();
    let parent = g
        .add(
            NodeId::ROOT,
            "parent",
            Transform {
                translation: Vec3::new(1.0, 2.0, 3.0),
                rotation: Vec3::ZERO,
                scale: Vec3::splat(2.0),
            },
            Drawable::None,
            Material::default(),
        )
        .unwrap();
    let child = g
        .add(
            parent,
            "child",
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            Drawable::Stars,
            Material::default(),
        )
        .unwrap();
    let world = g.world_matrix(child).unwrap();
    let origin = world.transform_point3(Vec3::ZERO);
    assert!(approx(origin, Vec3::new(3.0, 2.0, 3.0)), "{origin:?}");
    assert_eq!(g.node(child).unwrap().parent(), Some(parent));
    assert_eq!(g.node(parent).unwrap().children(), &[child]);
}

#[test]
fn names_are_unique_and_parents_must_exist() {
    let mut g = SceneGraph::new();
    g.add_group(NodeId::ROOT, "a").unwrap();
    assert_eq!(
        g.add_group(NodeId::ROOT, "a"),
        Err(SceneError::DuplicateName("a".to_string()))
    );
    assert_eq!(
        g.add_group(NodeId::ROOT, "root"),
        Err(SceneError::DuplicateName("root".to_string()))
    );
    // an id handed out by a larger graph
    let mut other = SceneGraph::new();
    let mut bogus = NodeId::ROOT;
    for i in 0..5 {
        bogus = other.add_group(NodeId::ROOT, &format!("n{i}")).unwrap();
    }
    assert_eq!(
        g.add_group(bogus, "orphan"),
        Err(SceneError::UnknownNode(bogus.index()))
    );
    assert!(g.world_matrix(bogus).is_err());
    assert!(g.set_transform(bogus, Transform::IDENTITY).is_err());
    assert_eq!(g.len(), 2);
}

#[test]
fn draw_list_is_depth_first_and_skips_hidden_nodes() {
    let mut g = SceneGraph::new();
    let bg = g.add_group(NodeId::ROOT, "bg").unwrap();
    let grid = g
        .add(bg, "grid", Transform::IDENTITY, Drawable::Grid, Material::default())
        .unwrap();
    let stars = g
        .add(bg, "stars", Transform::IDENTITY, Drawable::Stars, Material::default())
        .unwrap();
    let cube = g
        .add(
            NodeId::ROOT,
            "cube",
            Transform::IDENTITY,
            Drawable::Prop(PropKind::Cube),
            Material::default(),
        )
        .unwrap();
    let order: Vec<NodeId> = g.draw_list().iter().map(|d| d.node).collect();
    assert_eq!(order, vec![grid, stars, cube]);

    g.node_mut(bg).unwrap().visible = false;
    let order: Vec<NodeId> = g.draw_list().iter().map(|d| d.node).collect();
    assert_eq!(order, vec![cube]);
}

#[test]
fn hero_scene_composes_background_and_props() {
    let hero = HeroScene::with_seed(DeviceClass::Desktop, 1).unwrap();
    let g = hero.graph();
    for name in ["background", "grid", "stars", "props"] {
        assert!(g.find(name).is_some(), "missing {name}");
    }
    for kind in PropKind::ALL {
        assert!(g.find(kind.node_name()).is_some());
    }
    assert_eq!(g.find("stars"), Some(hero.stars_node()));
    assert_eq!(g.find("grid"), Some(hero.grid_node()));

    let draws = g.draw_list();
    assert_eq!(draws.len(), 2 + PropKind::ALL.len());
    assert_eq!(draws[0].drawable, Drawable::Grid);
    assert_eq!(draws[1].drawable, Drawable::Stars);
}

#[test]
fn props_snap_to_their_corners() {
    let hero = HeroScene::with_seed(DeviceClass::Desktop, 1).unwrap();
    let corners = hero.corners();
    for kind in PropKind::ALL {
        let id = hero.graph().find(kind.node_name()).unwrap();
        let origin = hero
            .graph()
            .world_matrix(id)
            .unwrap()
            .transform_point3(Vec3::ZERO);
        assert!(approx(origin, corners.get(kind.corner())), "{kind:?}");
    }
    let target = hero.graph().find("target").unwrap();
    let origin = hero
        .graph()
        .world_matrix(target)
        .unwrap()
        .transform_point3(Vec3::ZERO);
    assert!(approx(origin, Vec3::new(18.0, -10.0, 0.5)));
}

#[test]
fn relayout_moves_props_to_mobile_margins() {
    let mut hero = HeroScene::with_seed(DeviceClass::Desktop, 1).unwrap();
    hero.relayout(DeviceClass::Small);
    assert_eq!(hero.device_class(), DeviceClass::Small);
    let cube = hero.graph().find("cube").unwrap();
    let t = hero.graph().node(cube).unwrap().transform;
    assert_eq!(t.translation, Vec3::new(-8.0, -6.0, 0.5));
    assert_eq!(t.scale, Vec3::splat(2.0));
}

#[test]
fn corner_depths_override_default_z() {
    let mut hero = HeroScene::with_seed(DeviceClass::Tablet, 1).unwrap();
    hero.set_corner_depths(portfolio_core::CornerDepths {
        top_right: Some(-3.0),
        ..Default::default()
    });
    let rings = hero.graph().find("rings").unwrap();
    let t = hero.graph().node(rings).unwrap().transform;
    assert_eq!(t.translation, Vec3::new(18.0, 10.0, -3.0));
}

#[test]
fn advance_moves_grid_node_but_not_grid_vertices() {
    let mut hero = HeroScene::with_seed(DeviceClass::Desktop, 2).unwrap();
    let verts_before = hero.buffer(Drawable::Grid).to_vec();
    hero.advance(0.016, 4.0);
    assert_eq!(hero.buffer(Drawable::Grid), &verts_before[..]);
    let node = hero.graph().node(hero.grid_node()).unwrap();
    assert_eq!(node.transform.translation, hero.grid().translation());
    assert_eq!(node.transform.rotation, hero.grid().transform().rotation());
}

#[test]
fn buffers_resolve_per_drawable() {
    let hero = HeroScene::with_seed(DeviceClass::Desktop, 3).unwrap();
    assert!(hero.buffer(Drawable::None).is_empty());
    assert_eq!(hero.buffer(Drawable::Stars).len(), hero.stars().len());
    for kind in PropKind::ALL {
        let lines = hero.buffer(Drawable::Prop(kind));
        assert!(!lines.is_empty());
        assert_eq!(lines.len() % 2, 0, "{kind:?} must be a line list");
    }
}

#[test]
fn camera_projection_tracks_viewport() {
    let mut hero = HeroScene::with_seed(DeviceClass::Desktop, 4).unwrap();
    let before = hero.camera().projection_matrix();
    hero.camera_mut().set_viewport(800, 400);
    let wide = hero.camera().projection_matrix();
    assert_ne!(before, wide);
    hero.camera_mut().set_viewport(0, 0);
    assert_eq!(hero.camera().projection_matrix(), wide);
    assert_ne!(hero.camera().view_projection(), Mat4::IDENTITY);
}
