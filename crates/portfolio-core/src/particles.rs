use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;

/// Shape of a falling-star field. `area` is the full extent of the spawn box
/// (width, height, depth) centred on the field origin.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleFieldConfig {
    pub count: usize,
    pub area: Vec3,
    pub speed: f32,
    /// Depth of the field origin in world space.
    pub z: f32,
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self {
            count: STARS_DEFAULT_COUNT,
            area: Vec3::from_array(STARS_DEFAULT_AREA),
            speed: STARS_DEFAULT_SPEED,
            z: STARS_DEFAULT_Z,
        }
    }
}

impl ParticleFieldConfig {
    /// Settings used behind the landing section.
    pub fn hero() -> Self {
        Self {
            count: HERO_STARS_COUNT,
            area: Vec3::from_array(HERO_STARS_AREA),
            speed: HERO_STARS_SPEED,
            z: HERO_STARS_Z,
        }
    }
}

/// Fixed-size point cloud that drifts downwards and respawns at the top.
///
/// The buffer is allocated once in [`ParticleField::new`] and only ever
/// mutated by [`ParticleField::advance`].
pub struct ParticleField {
    config: ParticleFieldConfig,
    positions: Box<[Vec3]>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: ParticleFieldConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: ParticleFieldConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: ParticleFieldConfig, mut rng: StdRng) -> Self {
        let area = config.area;
        let positions = (0..config.count)
            .map(|_| {
                let x = centered(&mut rng, area.x);
                let y = rng.gen::<f32>() * area.y - area.y / 2.0;
                let z = centered(&mut rng, area.z);
                Vec3::new(x, y, z)
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            config,
            positions,
            rng,
        }
    }

    /// Move every star down by `speed * delta * STARS_FALL_SCALE` and recycle
    /// the ones that dropped below the box. Negative deltas are ignored.
    pub fn advance(&mut self, delta_sec: f32) {
        let fall = self.config.speed * delta_sec.max(0.0) * STARS_FALL_SCALE;
        let area = self.config.area;
        let half_y = area.y / 2.0;
        for p in self.positions.iter_mut() {
            p.y -= fall;
            if p.y < -half_y {
                p.y = half_y;
                p.x = centered(&mut self.rng, area.x);
                p.z = centered(&mut self.rng, area.z);
            }
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Raw vertex bytes for GPU upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn config(&self) -> &ParticleFieldConfig {
        &self.config
    }

    pub fn half_extents(&self) -> Vec3 {
        self.config.area * 0.5
    }

    /// Local-to-parent offset of the field.
    pub fn translation(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.config.z)
    }
}

// Uniform sample in [-extent/2, extent/2); safe for a zero extent.
#[inline]
fn centered(rng: &mut StdRng, extent: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * extent
}
