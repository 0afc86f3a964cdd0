use crate::constants::*;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub size: f32,
    pub divisions: u32,
    /// Resting height; the grid bobs around it.
    pub y: f32,
    pub z: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: GRID_DEFAULT_SIZE,
            divisions: GRID_DEFAULT_DIVISIONS,
            y: GRID_DEFAULT_Y,
            z: GRID_DEFAULT_Z,
        }
    }
}

impl GridConfig {
    pub fn hero() -> Self {
        Self {
            size: HERO_GRID_SIZE,
            divisions: HERO_GRID_DIVISIONS,
            y: HERO_GRID_Y,
            z: HERO_GRID_Z,
        }
    }
}

/// Rigid transform of the grid at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTransform {
    pub pitch_offset: f32,
    pub roll_offset: f32,
    pub y_offset: f32,
}

impl GridTransform {
    /// Euler XYZ rotation; the grid plane is tipped up by a quarter turn.
    pub fn rotation(&self) -> Vec3 {
        Vec3::new(-FRAC_PI_2 + self.pitch_offset, 0.0, self.roll_offset)
    }
}

/// Line-segment grid on the XZ plane that sways over time.
///
/// Vertices are generated once; `advance` only rewrites the transform.
pub struct UndulatingGrid {
    config: GridConfig,
    vertices: Box<[Vec3]>,
    transform: GridTransform,
}

impl UndulatingGrid {
    pub fn new(config: GridConfig) -> Self {
        let vertices = build_vertices(config.size, config.divisions);
        let transform = GridTransform {
            pitch_offset: 0.0,
            roll_offset: 0.0,
            y_offset: config.y,
        };
        Self {
            config,
            vertices,
            transform,
        }
    }

    pub fn advance(&mut self, elapsed_sec: f32) {
        self.transform = transform_at(self.config.y, elapsed_sec);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn transform(&self) -> GridTransform {
        self.transform
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(0.0, self.transform.y_offset, self.config.z)
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}

/// Pure undulation function of elapsed time.
pub fn transform_at(base_y: f32, t: f32) -> GridTransform {
    GridTransform {
        pitch_offset: (t * GRID_PITCH_RATE).sin() * GRID_PITCH_AMPLITUDE,
        roll_offset: (t * GRID_ROLL_RATE).sin() * GRID_ROLL_AMPLITUDE,
        y_offset: base_y + (t * GRID_BOB_RATE).sin() * GRID_BOB_AMPLITUDE,
    }
}

fn build_vertices(size: f32, divisions: u32) -> Box<[Vec3]> {
    let half = size / 2.0;
    // zero divisions degenerates to the two border lines at -half
    let step = if divisions == 0 {
        0.0
    } else {
        size / divisions as f32
    };
    let mut verts = Vec::with_capacity(4 * (divisions as usize + 1));
    for i in 0..=divisions {
        let c = (-half + i as f32 * step).min(half);
        // parallel to X (constant z)
        verts.push(Vec3::new(-half, 0.0, c));
        verts.push(Vec3::new(half, 0.0, c));
        // parallel to Z (constant x)
        verts.push(Vec3::new(c, 0.0, -half));
        verts.push(Vec3::new(c, 0.0, half));
    }
    verts.into_boxed_slice()
}
