use crate::constants::*;
use glam::Vec3;

/// Viewport size bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Small,
    Mobile,
    Tablet,
    Desktop,
}

/// The three media-query answers the page evaluates. They overlap
/// (a small screen is also mobile; 768px is both mobile and tablet).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportFlags {
    pub is_small: bool,
    pub is_mobile: bool,
    pub is_tablet: bool,
}

impl ViewportFlags {
    pub fn from_width(width_css_px: f64) -> Self {
        Self {
            is_small: width_css_px <= SMALL_MAX_WIDTH,
            is_mobile: width_css_px <= MOBILE_MAX_WIDTH,
            is_tablet: width_css_px >= MOBILE_MAX_WIDTH && width_css_px <= TABLET_MAX_WIDTH,
        }
    }
}

impl From<ViewportFlags> for DeviceClass {
    fn from(f: ViewportFlags) -> Self {
        if f.is_small {
            DeviceClass::Small
        } else if f.is_mobile {
            DeviceClass::Mobile
        } else if f.is_tablet {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

impl DeviceClass {
    #[inline]
    pub fn from_width(width_css_px: f64) -> Self {
        ViewportFlags::from_width(width_css_px).into()
    }

    /// Small screens count as mobile for margin purposes.
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceClass::Small | DeviceClass::Mobile)
    }

    /// `(margin_x, margin_y)` distance of the corner anchors from the centre.
    #[inline]
    pub fn margins(self) -> (f32, f32) {
        if self.is_mobile() {
            (MOBILE_MARGIN_X, MOBILE_MARGIN_Y)
        } else {
            (DESKTOP_MARGIN_X, DESKTOP_MARGIN_Y)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Unit sign of the (x, y) offset for this corner.
    #[inline]
    pub fn signs(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (-1.0, 1.0),
            Corner::TopRight => (1.0, 1.0),
            Corner::BottomLeft => (-1.0, -1.0),
            Corner::BottomRight => (1.0, -1.0),
        }
    }
}

/// Optional depth each corner had before snapping; `None` falls back to
/// [`CORNER_Z_DEPTH`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerDepths {
    pub top_left: Option<f32>,
    pub top_right: Option<f32>,
    pub bottom_left: Option<f32>,
    pub bottom_right: Option<f32>,
}

impl CornerDepths {
    pub fn get(&self, corner: Corner) -> Option<f32> {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerLayout {
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub bottom_left: Vec3,
    pub bottom_right: Vec3,
}

impl CornerLayout {
    pub fn get(&self, corner: Corner) -> Vec3 {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }
}

/// Snap anchors to the four corners of the hero section.
pub fn compute_corners(class: DeviceClass, depths: &CornerDepths) -> CornerLayout {
    let (margin_x, margin_y) = class.margins();
    let anchor = |corner: Corner| {
        let (sx, sy) = corner.signs();
        let z = depths.get(corner).unwrap_or(CORNER_Z_DEPTH);
        Vec3::new(sx * margin_x, sy * margin_y, z)
    };
    CornerLayout {
        top_left: anchor(Corner::TopLeft),
        top_right: anchor(Corner::TopRight),
        bottom_left: anchor(Corner::BottomLeft),
        bottom_right: anchor(Corner::BottomRight),
    }
}
