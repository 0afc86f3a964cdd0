use crate::camera::Camera;
use crate::constants::*;
use crate::grid::{GridConfig, UndulatingGrid};
use crate::layout::{compute_corners, CornerDepths, CornerLayout, DeviceClass};
use crate::particles::{ParticleField, ParticleFieldConfig};
use crate::props::PropKind;
use crate::scene::{Drawable, Material, NodeId, SceneError, SceneGraph, Transform};
use glam::Vec3;

struct PropMesh {
    kind: PropKind,
    node: NodeId,
    lines: Box<[Vec3]>,
}

/// Landing-section scene: background stars and grid plus four corner props.
///
/// Owns the animated buffers; the scene graph only references them through
/// [`Drawable`], and the renderer resolves them with [`HeroScene::buffer`].
pub struct HeroScene {
    graph: SceneGraph,
    camera: Camera,
    stars: ParticleField,
    grid: UndulatingGrid,
    stars_node: NodeId,
    grid_node: NodeId,
    props: Vec<PropMesh>,
    device_class: DeviceClass,
    depths: CornerDepths,
}

impl HeroScene {
    pub fn new(
        stars: ParticleField,
        grid: UndulatingGrid,
        device_class: DeviceClass,
    ) -> Result<Self, SceneError> {
        let mut graph = SceneGraph::new();

        // Background layers draw before the props.
        let background = graph.add_group(NodeId::ROOT, "background")?;
        let grid_node = graph.add(
            background,
            "grid",
            grid_node_transform(&grid),
            Drawable::Grid,
            Material {
                color: GRID_COLOR,
                opacity: GRID_OPACITY,
                point_size: 1.0,
            },
        )?;
        let stars_node = graph.add(
            background,
            "stars",
            Transform::from_translation(stars.translation()),
            Drawable::Stars,
            Material {
                color: STAR_COLOR,
                opacity: STAR_OPACITY,
                point_size: STAR_POINT_SIZE,
            },
        )?;

        let depths = CornerDepths::default();
        let corners = compute_corners(device_class, &depths);
        let props_group = graph.add_group(NodeId::ROOT, "props")?;
        let mut props = Vec::with_capacity(PropKind::ALL.len());
        for kind in PropKind::ALL {
            let node = graph.add(
                props_group,
                kind.node_name(),
                prop_transform(corners.get(kind.corner())),
                Drawable::Prop(kind),
                Material {
                    color: kind.color(),
                    opacity: PROP_OPACITY,
                    point_size: 1.0,
                },
            )?;
            props.push(PropMesh {
                kind,
                node,
                lines: kind.build_lines().into_boxed_slice(),
            });
        }

        log::info!(
            "[hero] composed nodes={} stars={} grid_segments={} class={:?}",
            graph.len(),
            stars.len(),
            grid.segment_count(),
            device_class
        );

        Ok(Self {
            graph,
            camera: Camera::default(),
            stars,
            grid,
            stars_node,
            grid_node,
            props,
            device_class,
            depths,
        })
    }

    /// Landing-section defaults with a seeded star field.
    pub fn with_seed(device_class: DeviceClass, seed: u64) -> Result<Self, SceneError> {
        Self::new(
            ParticleField::new(ParticleFieldConfig::hero(), seed),
            UndulatingGrid::new(GridConfig::hero()),
            device_class,
        )
    }

    /// Per-frame update: `delta_sec` since the last frame, `elapsed_sec` since start.
    pub fn advance(&mut self, delta_sec: f32, elapsed_sec: f32) {
        self.stars.advance(delta_sec);
        self.grid.advance(elapsed_sec);
        let t = grid_node_transform(&self.grid);
        if let Some(node) = self.graph.node_mut(self.grid_node) {
            node.transform = t;
        }
    }

    /// Re-snap the props after a viewport class change.
    pub fn relayout(&mut self, device_class: DeviceClass) {
        if device_class == self.device_class {
            return;
        }
        log::debug!(
            "[hero] relayout {:?} -> {:?}",
            self.device_class,
            device_class
        );
        self.device_class = device_class;
        self.place_props();
    }

    /// Supply depths the props had before corner snapping.
    pub fn set_corner_depths(&mut self, depths: CornerDepths) {
        self.depths = depths;
        self.place_props();
    }

    fn place_props(&mut self) {
        let corners = self.corners();
        for prop in &self.props {
            if let Some(node) = self.graph.node_mut(prop.node) {
                node.transform = prop_transform(corners.get(prop.kind.corner()));
            }
        }
    }

    pub fn corners(&self) -> CornerLayout {
        compute_corners(self.device_class, &self.depths)
    }

    /// Vertex buffer backing a drawable; empty for groups.
    pub fn buffer(&self, drawable: Drawable) -> &[Vec3] {
        match drawable {
            Drawable::None => &[],
            Drawable::Stars => self.stars.positions(),
            Drawable::Grid => self.grid.vertices(),
            Drawable::Prop(kind) => self
                .props
                .iter()
                .find(|p| p.kind == kind)
                .map(|p| &p.lines[..])
                .unwrap_or(&[]),
        }
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn stars(&self) -> &ParticleField {
        &self.stars
    }

    pub fn grid(&self) -> &UndulatingGrid {
        &self.grid
    }

    pub fn stars_node(&self) -> NodeId {
        self.stars_node
    }

    pub fn grid_node(&self) -> NodeId {
        self.grid_node
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device_class
    }
}

fn grid_node_transform(grid: &UndulatingGrid) -> Transform {
    Transform {
        translation: grid.translation(),
        rotation: grid.transform().rotation(),
        scale: Vec3::ONE,
    }
}

fn prop_transform(anchor: Vec3) -> Transform {
    Transform {
        translation: anchor,
        rotation: Vec3::ZERO,
        scale: Vec3::splat(PROP_SCALE),
    }
}
