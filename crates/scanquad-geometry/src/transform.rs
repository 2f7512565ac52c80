// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// 2D affine transforms: scale, rotation, translation and reflection folded
// into one operator, backed by `glam::DAffine2`.

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

use crate::point::{Point, Rect, Size};

/// A 2D affine map.
///
/// Composition is associative but not commutative. `a.then(b)` applies `a`
/// first and `b` second, which is the order every transform chain in this
/// crate is written in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform(DAffine2);

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: Self = Self(DAffine2::IDENTITY);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Non-uniform scale about the origin.
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self(DAffine2::from_scale(DVec2::new(sx, sy)))
    }

    pub fn uniform_scale(factor: f64) -> Self {
        Self::scale(factor, factor)
    }

    /// Rotation about the origin. Positive angles turn +x towards +y, which
    /// on a y-down screen is clockwise.
    pub fn rotation(radians: f64) -> Self {
        Self(DAffine2::from_angle(radians))
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self(DAffine2::from_translation(DVec2::new(tx, ty)))
    }

    /// Reflection `y' = height - y`, converting between y-down screen
    /// coordinates and y-up cartesian coordinates.
    pub fn flip_vertical(height: f64) -> Self {
        Self::scale(1.0, -1.0).then(Self::translation(0.0, height))
    }

    /// Uniform scale that makes `from` cover `to` without distortion
    /// (aspect fill): the larger of the two axis ratios.
    pub fn aspect_fill_scale(from: Size, to: Size) -> Self {
        let factor = (to.width / from.width).max(to.height / from.height);
        Self::uniform_scale(factor)
    }

    /// Translation that moves the centre of `from` onto the centre of `to`.
    pub fn translate_centers(from: Rect, to: Rect) -> Self {
        Self::translation(to.mid_x() - from.mid_x(), to.mid_y() - from.mid_y())
    }

    /// Compose: apply `self`, then `next`.
    pub fn then(self, next: AffineTransform) -> Self {
        Self(next.0 * self.0)
    }

    /// Fold a chain into one operator, applied first-to-last.
    pub fn compose_all(chain: &[AffineTransform]) -> Self {
        chain
            .iter()
            .fold(Self::IDENTITY, |acc, t| acc.then(*t))
    }

    /// The inverse map, or `None` if the transform collapses the plane.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.0.matrix2.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Self(self.0.inverse()))
    }

    pub fn apply(&self, point: Point) -> Point {
        self.0.transform_point2(point.into()).into()
    }

    /// Transform a size as a vector (ignores translation), keeping the signs
    /// the linear part produces.
    pub fn apply_to_size(&self, size: Size) -> Size {
        let v = self.0.transform_vector2(DVec2::new(size.width, size.height));
        Size::new(v.x, v.y)
    }

    /// Axis-aligned bounding box of `rect` after the transform.
    pub fn apply_to_rect(&self, rect: Rect) -> Rect {
        let corners = rect.corners().map(|c| self.apply(c));
        Rect::bounding(&corners)
    }
}

impl From<DAffine2> for AffineTransform {
    fn from(inner: DAffine2) -> Self {
        Self(inner)
    }
}

/// Largest rect with the proportions of `aspect` that fits inside `bounds`,
/// centred in it. This is where an aspect-fit image lands inside its view.
pub fn aspect_fit_rect(aspect: Size, bounds: Rect) -> Rect {
    let factor = (bounds.size.width / aspect.width).min(bounds.size.height / aspect.height);
    let size = Size::new(aspect.width * factor, aspect.height * factor);
    let origin = Point::new(
        bounds.mid_x() - size.width / 2.0,
        bounds.mid_y() - size.height / 2.0,
    );
    Rect::new(origin, size)
}
