// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Coordinate-space pipeline: the ordered transform chains a quadrilateral
// goes through between the detector, the display and the perspective filter.
//
// ## Crossings
//
// 1. Detector -> live preview: aspect-fill scale, fixed sensor rotation,
//    re-centring translation.
// 2. Source image -> edit overlay: aspect-fill scale into the aspect-fit
//    frame of the displayed image.
// 3. Edit overlay -> output: scale back to the source image, flip to
//    cartesian, reorganize, name the filter's control points.
//
// None of these validate their sizes. Passing a zero-area rect makes the
// scale factors infinite or NaN; boundary code should use
// `Size::validated` first.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::point::{Point, Rect, Size};
use crate::quad::{PerspectiveCorners, Quadrilateral};
use crate::transform::AffineTransform;

/// Inset rectangle used when the detector found nothing: corners at
/// `inset` and `1 - inset` of each image dimension, in image coordinates.
pub fn default_quad(image_size: Size, inset: f64) -> Quadrilateral {
    let (near, far) = (inset, 1.0 - inset);
    let (w, h) = (image_size.width, image_size.height);
    Quadrilateral::new(
        Point::new(w * near, h * near),
        Point::new(w * far, h * near),
        Point::new(w * far, h * far),
        Point::new(w * near, h * far),
    )
}

/// The detector -> display chain, in application order:
/// `[scale, rotation, translation]`.
///
/// `frame_size` is the detector's frame as delivered by the sensor. The
/// frame is scaled so its rotated bounds fill `view_bounds` without
/// distortion, rotated by `rotation_radians`, then translated so its centre
/// lands on the centre of `view_bounds`.
pub fn detector_to_display_transforms(
    frame_size: Size,
    view_bounds: Rect,
    rotation_radians: f64,
) -> [AffineTransform; 3] {
    let rotation = AffineTransform::rotation(rotation_radians);
    let oriented = rotation.apply_to_rect(Rect::from_size(frame_size)).size;

    let scale = AffineTransform::aspect_fill_scale(oriented, view_bounds.size);
    let scaled_size = scale.apply_to_size(frame_size);

    let image_bounds = rotation.apply_to_rect(Rect::from_size(scaled_size));
    let translation = AffineTransform::translate_centers(image_bounds, view_bounds);

    [scale, rotation, translation]
}

/// Map a detector quad into live-preview display coordinates.
#[instrument(skip(quad))]
pub fn detector_to_display(
    quad: &Quadrilateral,
    frame_size: Size,
    view_bounds: Rect,
    rotation_radians: f64,
) -> Quadrilateral {
    let chain = detector_to_display_transforms(frame_size, view_bounds, rotation_radians);
    let mapped = quad.apply_transforms(&chain);
    trace!(?mapped, "Detector quad mapped to display");
    mapped
}

/// Map an image-space quad into the edit overlay, which is sized to the
/// aspect-fit frame of the displayed image.
pub fn image_to_overlay(
    quad: &Quadrilateral,
    image_size: Size,
    overlay_size: Size,
) -> Quadrilateral {
    quad.apply_transforms(&[AffineTransform::aspect_fill_scale(image_size, overlay_size)])
}

/// Everything produced when an edit is committed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputQuad {
    /// The edited quad in source-image coordinates (screen convention).
    pub image: Quadrilateral,
    /// The same quad flipped to cartesian and reorganized.
    pub cartesian: Quadrilateral,
    /// Control points for the perspective-correction filter.
    pub corners: PerspectiveCorners,
}

/// Map an edited overlay quad to the source image and on to the filter's
/// cartesian control points.
#[instrument(skip(quad))]
pub fn overlay_to_output(quad: &Quadrilateral, overlay_size: Size, image_size: Size) -> OutputQuad {
    let image = quad.scale(overlay_size, image_size);

    let mut cartesian = image.to_cartesian(image_size.height);
    cartesian.reorganize();
    let corners = PerspectiveCorners::from_reorganized_cartesian(&cartesian);

    debug!(
        top_left = ?corners.top_left,
        top_right = ?corners.top_right,
        bottom_left = ?corners.bottom_left,
        bottom_right = ?corners.bottom_right,
        "Perspective control points computed"
    );

    OutputQuad {
        image,
        cartesian,
        corners,
    }
}
