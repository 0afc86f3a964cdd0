//! Procedural wireframe props placed at the hero corners.
//!
//! Every builder returns a line list (pairs of endpoints) centred on the
//! origin and roughly two units across.

use crate::layout::Corner;
use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_3, TAU};

const CIRCLE_SEGMENTS: usize = 48;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropKind {
    Target,
    Logo,
    Rings,
    Cube,
}

impl PropKind {
    pub const ALL: [PropKind; 4] = [
        PropKind::Target,
        PropKind::Logo,
        PropKind::Rings,
        PropKind::Cube,
    ];

    pub fn corner(self) -> Corner {
        match self {
            PropKind::Target => Corner::BottomRight,
            PropKind::Logo => Corner::TopLeft,
            PropKind::Rings => Corner::TopRight,
            PropKind::Cube => Corner::BottomLeft,
        }
    }

    pub fn node_name(self) -> &'static str {
        match self {
            PropKind::Target => "target",
            PropKind::Logo => "react_logo",
            PropKind::Rings => "rings",
            PropKind::Cube => "cube",
        }
    }

    pub fn color(self) -> [f32; 3] {
        match self {
            PropKind::Target => [1.0, 0.30, 0.43],
            PropKind::Logo => [0.38, 0.85, 0.98],
            PropKind::Rings => [0.42, 0.39, 1.0],
            PropKind::Cube => [0.0, 0.96, 0.83],
        }
    }

    pub fn build_lines(self) -> Vec<Vec3> {
        match self {
            PropKind::Target => target_lines(),
            PropKind::Logo => logo_lines(),
            PropKind::Rings => rings_lines(),
            PropKind::Cube => cube_lines(),
        }
    }
}

fn push_ellipse(out: &mut Vec<Vec3>, rx: f32, ry: f32, rotation: Quat) {
    for i in 0..CIRCLE_SEGMENTS {
        let a0 = TAU * i as f32 / CIRCLE_SEGMENTS as f32;
        let a1 = TAU * (i + 1) as f32 / CIRCLE_SEGMENTS as f32;
        out.push(rotation * Vec3::new(rx * a0.cos(), ry * a0.sin(), 0.0));
        out.push(rotation * Vec3::new(rx * a1.cos(), ry * a1.sin(), 0.0));
    }
}

pub fn cube_lines() -> Vec<Vec3> {
    let c = |i: usize| {
        Vec3::new(
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        )
    };
    let mut out = Vec::with_capacity(24);
    for i in 0..8usize {
        for bit in [1usize, 2, 4] {
            if i & bit == 0 {
                out.push(c(i));
                out.push(c(i | bit));
            }
        }
    }
    out
}

pub fn rings_lines() -> Vec<Vec3> {
    let mut out = Vec::with_capacity(CIRCLE_SEGMENTS * 6);
    for (k, radius) in [1.0_f32, 0.75, 0.5].into_iter().enumerate() {
        let tilt = Quat::from_rotation_x(0.35 * (k as f32 + 1.0));
        push_ellipse(&mut out, radius, radius, tilt);
    }
    out
}

pub fn target_lines() -> Vec<Vec3> {
    let mut out = Vec::with_capacity(CIRCLE_SEGMENTS * 6 + 4);
    for radius in [1.0_f32, 0.66, 0.33] {
        push_ellipse(&mut out, radius, radius, Quat::IDENTITY);
    }
    out.extend_from_slice(&[
        Vec3::new(-1.2, 0.0, 0.0),
        Vec3::new(1.2, 0.0, 0.0),
        Vec3::new(0.0, -1.2, 0.0),
        Vec3::new(0.0, 1.2, 0.0),
    ]);
    out
}

pub fn logo_lines() -> Vec<Vec3> {
    let mut out = Vec::with_capacity(CIRCLE_SEGMENTS * 6);
    for k in 0..3 {
        push_ellipse(
            &mut out,
            1.0,
            0.38,
            Quat::from_rotation_z(FRAC_PI_3 * k as f32),
        );
    }
    out
}
