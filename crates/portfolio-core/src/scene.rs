//! Owned scene graph: an arena of transform nodes with optional drawables.
//!
//! The graph never owns vertex data for animated layers; a [`Drawable`] only
//! names the buffer the renderer should pull from the hero scene.

use crate::props::PropKind;
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene node #{0}")]
    UnknownNode(usize),
    #[error("scene node name already in use: {0}")]
    DuplicateName(String),
}

/// Translation, Euler XYZ rotation (radians) and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.translation,
        )
    }
}

/// Which buffer a node draws, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drawable {
    None,
    Stars,
    Grid,
    Prop(PropKind),
}

/// Unlit, additively blended material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub point_size: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            opacity: 1.0,
            point_size: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub drawable: Drawable,
    pub material: Material,
    pub visible: bool,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

impl SceneNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// One entry of a flattened, render-ready traversal.
#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    pub node: NodeId,
    pub drawable: Drawable,
    pub material: Material,
    pub world: Mat4,
}

pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    by_name: FnvHashMap<String, NodeId>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    pub fn new() -> Self {
        let root = SceneNode {
            name: "root".to_string(),
            transform: Transform::IDENTITY,
            drawable: Drawable::None,
            material: Material::default(),
            visible: true,
            parent: None,
            children: SmallVec::new(),
        };
        let mut by_name = FnvHashMap::default();
        by_name.insert(root.name.clone(), NodeId::ROOT);
        Self {
            nodes: vec![root],
            by_name,
        }
    }

    /// Attach a new node under `parent`. Names are unique within the graph.
    pub fn add(
        &mut self,
        parent: NodeId,
        name: &str,
        transform: Transform,
        drawable: Drawable,
        material: Material,
    ) -> Result<NodeId, SceneError> {
        if parent.0 >= self.nodes.len() {
            return Err(SceneError::UnknownNode(parent.0));
        }
        if self.by_name.contains_key(name) {
            return Err(SceneError::DuplicateName(name.to_string()));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.to_string(),
            transform,
            drawable,
            material,
            visible: true,
            parent: Some(parent),
            children: SmallVec::new(),
        });
        self.nodes[parent.0].children.push(id);
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    pub fn add_group(&mut self, parent: NodeId, name: &str) -> Result<NodeId, SceneError> {
        self.add(
            parent,
            name,
            Transform::IDENTITY,
            Drawable::None,
            Material::default(),
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn set_transform(&mut self, id: NodeId, transform: Transform) -> Result<(), SceneError> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(SceneError::UnknownNode(id.0))?;
        node.transform = transform;
        Ok(())
    }

    /// Compose local transforms from the root down to `id`.
    pub fn world_matrix(&self, id: NodeId) -> Result<Mat4, SceneError> {
        let mut node = self.nodes.get(id.0).ok_or(SceneError::UnknownNode(id.0))?;
        let mut m = node.transform.matrix();
        while let Some(p) = node.parent {
            node = &self.nodes[p.0];
            m = node.transform.matrix() * m;
        }
        Ok(m)
    }

    /// Depth-first list of visible drawables with their world matrices.
    /// Children are listed in insertion order, so earlier siblings draw first.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeId, Mat4)> = vec![(NodeId::ROOT, Mat4::IDENTITY)];
        while let Some((id, parent_world)) = stack.pop() {
            let node = &self.nodes[id.0];
            if !node.visible {
                continue;
            }
            let world = parent_world * node.transform.matrix();
            if node.drawable != Drawable::None {
                out.push(DrawItem {
                    node: id,
                    drawable: node.drawable,
                    material: node.material,
                    world,
                });
            }
            for child in node.children.iter().rev() {
                stack.push((*child, world));
            }
        }
        out
    }
}
