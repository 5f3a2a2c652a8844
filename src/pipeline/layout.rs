//! Cross layout geometry and compositing.
//!
//! Four copies of the subject are arranged around a blank square in the
//! middle of a square canvas, each rotated so its top edge faces away from
//! the centre. The arrangement is described by [`CROSS_LAYOUT`], a fixed
//! table of arms, and every placement is derived from it.

use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Counter-clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// No rotation.
    Deg0,
    /// Quarter turn counter-clockwise.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three quarter turns counter-clockwise (one clockwise).
    Deg270,
}

impl Rotation {
    /// Angle in degrees, counter-clockwise.
    #[must_use]
    pub const fn degrees(self) -> u32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Dimensions of a `width`×`height` image after this rotation.
    #[must_use]
    pub const fn rotated_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Self::Deg0 | Self::Deg180 => (width, height),
            Self::Deg90 | Self::Deg270 => (height, width),
        }
    }

    /// Rotate `img`, growing the bounds so no corner is cropped.
    #[must_use]
    pub fn apply(self, img: &RgbaImage) -> RgbaImage {
        // imageops rotates clockwise
        match self {
            Self::Deg0 => img.clone(),
            Self::Deg90 => imageops::rotate270(img),
            Self::Deg180 => imageops::rotate180(img),
            Self::Deg270 => imageops::rotate90(img),
        }
    }
}

/// Cardinal position of one arm of the cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// One row of the layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arm {
    pub direction: Direction,
    pub rotation: Rotation,
    /// Unit vector from the canvas centre towards this arm (y grows down).
    pub outward: (i8, i8),
}

/// The four arms, in paste order. Later arms win where copies overlap.
pub const CROSS_LAYOUT: [Arm; 4] = [
    Arm {
        direction: Direction::North,
        rotation: Rotation::Deg0,
        outward: (0, -1),
    },
    Arm {
        direction: Direction::East,
        rotation: Rotation::Deg270,
        outward: (1, 0),
    },
    Arm {
        direction: Direction::South,
        rotation: Rotation::Deg180,
        outward: (0, 1),
    },
    Arm {
        direction: Direction::West,
        rotation: Rotation::Deg90,
        outward: (-1, 0),
    },
];

/// Where one rotated copy of the subject lands on the canvas.
///
/// `x`/`y` may be negative or past the canvas edge; pasting clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub direction: Direction,
    pub rotation: Rotation,
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Geometry of the cross canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossLayout {
    /// Side of the square canvas in pixels.
    pub canvas_size: u32,
    /// Side of the blank square at the centre in pixels.
    pub blank_size: u32,
    /// Shift of every arm towards the centre (negative pushes outward).
    pub inset: i32,
    /// Gray level of the background and the blank square.
    pub background: u8,
}

impl CrossLayout {
    /// Canvas centre, shared by both axes.
    #[must_use]
    pub const fn center(&self) -> u32 {
        self.canvas_size / 2
    }

    /// Opaque background colour.
    #[must_use]
    pub const fn background_pixel(&self) -> Rgba<u8> {
        Rgba([self.background, self.background, self.background, 255])
    }

    /// Compute the four placements for a subject of the given size.
    #[must_use]
    pub fn placements(&self, subject_dims: (u32, u32)) -> [Placement; 4] {
        let center = i64::from(self.center());
        let half_blank = i64::from(self.blank_size / 2);
        let inset = i64::from(self.inset);

        // Along the outward axis the near edge sits on the blank square,
        // moved `inset` towards the centre; across it the copy is centred.
        let axis = |outward: i8, extent: u32| {
            let extent = i64::from(extent);
            match outward.signum() {
                0 => center - extent / 2,
                1 => center + half_blank - inset,
                _ => center - half_blank - extent + inset,
            }
        };

        CROSS_LAYOUT.map(|arm| {
            let (width, height) = arm
                .rotation
                .rotated_dimensions(subject_dims.0, subject_dims.1);
            Placement {
                direction: arm.direction,
                rotation: arm.rotation,
                x: axis(arm.outward.0, width),
                y: axis(arm.outward.1, height),
                width,
                height,
            }
        })
    }

    /// Build the cross: background canvas, four pasted copies, blank centre.
    #[must_use]
    pub fn compose(&self, subject: &RgbaImage) -> RgbaImage {
        let mut canvas =
            RgbaImage::from_pixel(self.canvas_size, self.canvas_size, self.background_pixel());

        for placement in self.placements(subject.dimensions()) {
            tracing::debug!(
                "Placing {:?} at ({}, {}) rotated {} degrees",
                placement.direction,
                placement.x,
                placement.y,
                placement.rotation.degrees()
            );
            let rotated = placement.rotation.apply(subject);
            // The subject's own alpha acts as the paste mask
            imageops::overlay(&mut canvas, &rotated, placement.x, placement.y);
        }

        self.clear_center(&mut canvas);
        canvas
    }

    /// Paint the blank square back to the background colour.
    ///
    /// Covers `[c - blank/2, c + blank/2]` on both axes, bounds inclusive.
    /// A zero blank size paints nothing.
    #[allow(clippy::cast_possible_wrap)]
    pub fn clear_center(&self, canvas: &mut RgbaImage) {
        if self.blank_size == 0 {
            return;
        }

        let half_blank = self.blank_size / 2;
        // Safe: canvas and blank sizes are bounded by MAX_CANVAS_SIZE
        let origin = self.center() as i32 - half_blank as i32;
        let side = 2 * half_blank + 1;

        draw_filled_rect_mut(
            canvas,
            Rect::at(origin, origin).of_size(side, side),
            self.background_pixel(),
        );
    }
}
