// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The quadrilateral model: four named corners in screen convention (y grows
// down), edge midpoints derived on demand, and the conversions that carry it
// between coordinate spaces.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::point::{Point, Rect, Size, midpoint};
use crate::transform::AffineTransform;

/// Angles closer than this to a whole turn count as unrotated.
const ANGLE_EPSILON: f64 = 1e-9;

/// One of the four corner roles, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerPosition {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl CornerPosition {
    pub const ALL: [CornerPosition; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];
}

/// One of the four edge-midpoint roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgePosition {
    TopMiddle,
    BottomMiddle,
    RightMiddle,
    LeftMiddle,
}

impl EdgePosition {
    pub const ALL: [EdgePosition; 4] = [
        Self::TopMiddle,
        Self::BottomMiddle,
        Self::RightMiddle,
        Self::LeftMiddle,
    ];

    /// The two corners this edge connects.
    pub fn corners(self) -> (CornerPosition, CornerPosition) {
        use CornerPosition::*;
        match self {
            Self::TopMiddle => (TopLeft, TopRight),
            Self::BottomMiddle => (BottomLeft, BottomRight),
            Self::RightMiddle => (TopRight, BottomRight),
            Self::LeftMiddle => (TopLeft, BottomLeft),
        }
    }
}

/// A four-corner polygon.
///
/// Only the corners are stored. Edge midpoints are recomputed from the
/// current corners on every call to [`Quadrilateral::midpoint`], so they can
/// never disagree with the corners. No convexity is enforced: dragging can
/// legally produce a concave or self-intersecting shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadrilateral {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl Quadrilateral {
    pub const fn new(
        top_left: Point,
        top_right: Point,
        bottom_right: Point,
        bottom_left: Point,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// The quadrilateral covering `rect` exactly.
    pub fn from_rect(rect: Rect) -> Self {
        let [tl, tr, br, bl] = rect.corners();
        Self::new(tl, tr, br, bl)
    }

    // -- Accessors ------------------------------------------------------------

    pub fn corner(&self, position: CornerPosition) -> Point {
        match position {
            CornerPosition::TopLeft => self.top_left,
            CornerPosition::TopRight => self.top_right,
            CornerPosition::BottomRight => self.bottom_right,
            CornerPosition::BottomLeft => self.bottom_left,
        }
    }

    pub fn set_corner(&mut self, position: CornerPosition, point: Point) {
        match position {
            CornerPosition::TopLeft => self.top_left = point,
            CornerPosition::TopRight => self.top_right = point,
            CornerPosition::BottomRight => self.bottom_right = point,
            CornerPosition::BottomLeft => self.bottom_left = point,
        }
    }

    /// Midpoint of an edge, always derived from the current corners.
    pub fn midpoint(&self, edge: EdgePosition) -> Point {
        let (a, b) = edge.corners();
        midpoint(self.corner(a), self.corner(b))
    }

    /// Corners in canonical order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    /// Closed outline for renderers: the four corners followed by the first again.
    pub fn outline(&self) -> [Point; 5] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
            self.top_left,
        ]
    }

    // -- Transforms -----------------------------------------------------------

    /// Apply one transform to every corner.
    pub fn applying(&self, transform: AffineTransform) -> Self {
        Self::new(
            transform.apply(self.top_left),
            transform.apply(self.top_right),
            transform.apply(self.bottom_right),
            transform.apply(self.bottom_left),
        )
    }

    /// Apply a chain of transforms in order, first to last.
    pub fn apply_transforms(&self, transforms: &[AffineTransform]) -> Self {
        self.applying(AffineTransform::compose_all(transforms))
    }

    /// Screen convention to cartesian convention: `y' = height - y` for every
    /// corner, x unchanged. Applying it twice with the same height is a no-op.
    ///
    /// The corner roles are not relabelled; call [`Quadrilateral::reorganize`]
    /// afterwards.
    pub fn to_cartesian(&self, height: f64) -> Self {
        self.applying(AffineTransform::flip_vertical(height))
    }

    /// Relabel the corners after a flip so the roles match position again.
    ///
    /// The two points with the smallest y become the top pair and the other
    /// two the bottom pair; within each pair the smaller x is the left one.
    /// Sorting is stable, so ties keep their current order. On a quadrilateral
    /// that is already ordered this way nothing changes.
    pub fn reorganize(&mut self) {
        let mut points = self.corners();
        points.sort_by(|a, b| a.y.total_cmp(&b.y));

        let (mut top, mut bottom) = ([points[0], points[1]], [points[2], points[3]]);
        top.sort_by(|a, b| a.x.total_cmp(&b.x));
        bottom.sort_by(|a, b| a.x.total_cmp(&b.x));

        self.top_left = top[0];
        self.top_right = top[1];
        self.bottom_right = bottom[1];
        self.bottom_left = bottom[0];
    }

    /// Map a quadrilateral expressed against a `from`-sized area onto a
    /// `to`-sized area.
    ///
    /// The factor is uniform, `to.width / from.width`; both areas are
    /// expected to share an aspect ratio (an aspect-fit overlay and its
    /// image). A zero source width is replaced by the smallest positive
    /// float rather than dividing by zero.
    pub fn scale(&self, from: Size, to: Size) -> Self {
        self.scale_rotated(from, to, 0.0)
    }

    /// [`Quadrilateral::scale`] for an image that is displayed rotated by
    /// `radians`, then re-centred on `to`.
    ///
    /// The angle is taken modulo a full turn. When it is nearest an odd
    /// number of quarter turns the source size is transposed before the
    /// factor is computed; a whole turn is the same as no rotation.
    pub fn scale_rotated(&self, from: Size, to: Size, radians: f64) -> Self {
        let turn = radians.rem_euclid(TAU);
        let rotated = turn > ANGLE_EPSILON && TAU - turn > ANGLE_EPSILON;
        let quarter_turns = (turn / FRAC_PI_2).round() as i64;
        let oriented_from = if quarter_turns % 2 == 1 {
            from.transposed()
        } else {
            from
        };

        let from_width = if oriented_from.width == 0.0 {
            f64::MIN_POSITIVE
        } else {
            oriented_from.width
        };
        let scale = AffineTransform::uniform_scale(to.width / from_width);
        let scaled = self.applying(scale);
        if !rotated {
            return scaled;
        }

        let rotation = AffineTransform::rotation(turn);
        let from_bounds = scale.then(rotation).apply_to_rect(Rect::from_size(from));
        let translation = AffineTransform::translate_centers(from_bounds, Rect::from_size(to));
        scaled.apply_transforms(&[rotation, translation])
    }

    // -- Diagnostics ----------------------------------------------------------

    pub fn perimeter(&self) -> f64 {
        let o = self.outline();
        o.windows(2).map(|w| w[0].distance_to(w[1])).sum()
    }

    /// Area by the shoelace formula. For a self-intersecting quad this is the
    /// absolute signed area, not the covered area.
    pub fn area(&self) -> f64 {
        let c = self.corners();
        let mut twice = 0.0;
        for i in 0..4 {
            let j = (i + 1) % 4;
            twice += c[i].x * c[j].y - c[j].x * c[i].y;
        }
        twice.abs() / 2.0
    }

    /// True if every turn goes the same way. Informational only; editing
    /// never rejects or corrects a non-convex quad.
    pub fn is_convex(&self) -> bool {
        let c = self.corners();
        let mut sign = 0.0f64;
        for i in 0..4 {
            let a = c[i];
            let b = c[(i + 1) % 4];
            let d = c[(i + 2) % 4];
            let cross = (b.x - a.x) * (d.y - b.y) - (b.y - a.y) * (d.x - b.x);
            if cross == 0.0 {
                return false;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// True if each corner lies within `distance` of the same corner of `other`.
    pub fn is_within(&self, distance: f64, other: &Quadrilateral) -> bool {
        CornerPosition::ALL
            .iter()
            .all(|&c| self.corner(c).distance_to(other.corner(c)) <= distance)
    }

    // -- Perspective correction -----------------------------------------------

    /// The four control points a perspective-correction filter takes, for an
    /// image-space quad on an image `image_height` tall.
    ///
    /// Flips to cartesian, reorganizes, then names the points the way the
    /// filter does: after the flip the reorganized top pair (smallest y) is
    /// the physically lower edge of the document.
    pub fn perspective_corners(&self, image_height: f64) -> PerspectiveCorners {
        let mut cartesian = self.to_cartesian(image_height);
        cartesian.reorganize();
        PerspectiveCorners::from_reorganized_cartesian(&cartesian)
    }
}

/// Control points for a perspective-correction filter, in cartesian
/// coordinates (y grows up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveCorners {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl PerspectiveCorners {
    /// Build from a quad that has been flipped to cartesian and reorganized.
    pub fn from_reorganized_cartesian(quad: &Quadrilateral) -> Self {
        Self {
            top_left: quad.bottom_left,
            top_right: quad.bottom_right,
            bottom_left: quad.top_left,
            bottom_right: quad.top_right,
        }
    }
}
