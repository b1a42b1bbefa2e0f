//! Layout for the landing page's bubble grid.
//!
//! The grid is a plane of circular avatar slots that the visitor drags
//! around. Slots near the edge of the viewport shrink and drift outward; the
//! numbers below are in CSS pixels.

use serde::Serialize;

use super::{Member, MemberId};

pub const ICON_SIZE: f64 = 100.0;
pub const ICON_MARGIN: f64 = 80.0;
pub const GRID_ROW_COUNT: usize = 10;
pub const MIN_COLUMNS: usize = 3;
pub const MAX_COLUMNS: usize = 10;
pub const INITIAL_PLANE: (f64, f64) = (-200.0, -100.0);
pub const DRAG_ELASTIC: f64 = 0.5;

const SLOT_PITCH: f64 = ICON_SIZE + ICON_MARGIN;
const SCREEN_INSET: f64 = 20.0;
const SCALE_CURVE: [f64; 4] = [0.0, 1.0, 1.0, 0.0];
const TRANSLATE_CURVE: [f64; 4] = [50.0, 0.0, 0.0, -50.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

pub fn column_count(viewport_width: f64) -> usize {
    let fitting = (viewport_width * 1.2 / SLOT_PITCH).floor();
    if fitting.is_nan() || fitting < MIN_COLUMNS as f64 {
        return MIN_COLUMNS;
    }
    (fitting as usize).min(MAX_COLUMNS)
}

/// Top-left corner of a slot on the plane. Odd rows shift half a slot right.
pub fn slot_offset(row: usize, col: usize) -> (f64, f64) {
    let x = col as f64 * SLOT_PITCH + (row % 2) as f64 * (SLOT_PITCH / 2.0);
    let y = row as f64 * ICON_SIZE;
    (x, y)
}

/// Piecewise-linear map from `input` control points to `output` values,
/// holding the end values outside the input range.
pub fn interpolate(value: f64, input: &[f64; 4], output: &[f64; 4]) -> f64 {
    if value <= input[0] {
        return output[0];
    }
    if value >= input[3] {
        return output[3];
    }

    let segment = input
        .windows(2)
        .position(|pair| value <= pair[1])
        .unwrap_or(2);
    let (from, to) = (input[segment], input[segment + 1]);
    if to == from {
        return output[segment + 1];
    }

    let progress = (value - from) / (to - from);
    output[segment] + (output[segment + 1] - output[segment]) * progress
}

/// Screen positions where a slot fades in, is fully shown, and fades out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewingBand {
    pub x: [f64; 4],
    pub y: [f64; 4],
}

impl ViewingBand {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            x: Self::axis(viewport.width),
            y: Self::axis(viewport.height),
        }
    }

    fn axis(extent: f64) -> [f64; 4] {
        let far_edge = extent - SLOT_PITCH / 2.0;
        [-60.0, 80.0, far_edge - 80.0, far_edge + 60.0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl SlotTransform {
    pub fn new(
        plane: (f64, f64),
        offset: (f64, f64),
        band: &ViewingBand,
    ) -> Self {
        let screen_x = plane.0 + offset.0 + SCREEN_INSET;
        let screen_y = plane.1 + offset.1 + SCREEN_INSET;

        let scale_x = interpolate(screen_x, &band.x, &SCALE_CURVE);
        let scale_y = interpolate(screen_y, &band.y, &SCALE_CURVE);

        Self {
            translate_x: interpolate(screen_x, &band.x, &TRANSLATE_CURVE),
            translate_y: interpolate(screen_y, &band.y, &TRANSLATE_CURVE),
            scale: scale_x.min(scale_y),
        }
    }
}

/// How far the plane may be dragged before it snaps back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DragBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl DragBounds {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            left: -viewport.width / 5.0,
            right: 100.0,
            top: -500.0,
            bottom: 50.0,
        }
    }

    /// Position shown while dragging: overshoot past a bound is scaled by
    /// `elastic` (0 pins the plane to the bound).
    pub fn constrain(&self, plane: (f64, f64), elastic: f64) -> (f64, f64) {
        (
            Self::constrain_axis(plane.0, self.left, self.right, elastic),
            Self::constrain_axis(plane.1, self.top, self.bottom, elastic),
        )
    }

    fn constrain_axis(value: f64, min: f64, max: f64, elastic: f64) -> f64 {
        if value < min {
            min + (value - min) * elastic
        } else if value > max {
            max + (value - max) * elastic
        } else {
            value
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotContent {
    Member {
        #[serde(rename = "memberId")]
        member_id: MemberId,
    },
    AddMember,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSlot {
    pub row: usize,
    pub col: usize,
    pub left: f64,
    pub top: f64,
    pub content: SlotContent,
    pub transform: SlotTransform,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingGrid {
    pub viewport: Viewport,
    pub columns: usize,
    pub rows: usize,
    pub plane: (f64, f64),
    pub bounds: DragBounds,
    pub band: ViewingBand,
    pub slots: Vec<GridSlot>,
    pub add_member_slot: GridSlot,
}

impl LandingGrid {
    /// Lays `members` out repeatedly over the grid, as seen with the plane
    /// dragged to `plane` (constrained to the drag bounds).
    pub fn layout(
        viewport: Viewport,
        members: &[Member],
        plane: (f64, f64),
    ) -> Self {
        let columns = column_count(viewport.width);
        let bounds = DragBounds::new(viewport);
        let band = ViewingBand::new(viewport);
        let plane = bounds.constrain(plane, DRAG_ELASTIC);

        let slot = |row: usize, col: usize, content: SlotContent| {
            let offset = slot_offset(row, col);
            GridSlot {
                row,
                col,
                left: offset.0,
                top: offset.1,
                content,
                transform: SlotTransform::new(plane, offset, &band),
            }
        };

        let mut slots = Vec::new();
        if !members.is_empty() {
            for row in 0..GRID_ROW_COUNT {
                for col in 0..columns {
                    let index = (row * columns + col) % members.len();
                    let content = SlotContent::Member {
                        member_id: members[index].id,
                    };
                    slots.push(slot(row, col, content));
                }
            }
        }

        let add_member_slot = slot(
            members.len() / columns,
            members.len() % columns,
            SlotContent::AddMember,
        );

        Self {
            viewport,
            columns,
            rows: GRID_ROW_COUNT,
            plane,
            bounds,
            band,
            slots,
            add_member_slot,
        }
    }
}
