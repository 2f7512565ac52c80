// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic collaborator traits.
//
// Detection, drawing and pixel resampling live outside this workspace. These
// traits are the seams a platform layer implements; the stub module provides
// inert implementations for headless builds and tests.

use scanquad_core::error::Result;
use scanquad_geometry::{Handle, PerspectiveCorners, Quadrilateral};

/// Finds a document quadrilateral in a frame.
pub trait QuadDetector {
    /// Whatever the detector consumes (a camera buffer, a decoded image).
    type Frame;

    /// Return the candidate quad in the frame's own coordinates, or `None`
    /// if nothing was found.
    fn detect(&mut self, frame: &Self::Frame) -> Option<Quadrilateral>;
}

/// Draws the quadrilateral overlay.
///
/// Quads handed to the renderer are already in the coordinates of the view
/// being drawn into.
pub trait QuadRenderer {
    /// Draw (or redraw) the outline and handles for `quad`.
    fn draw_quadrilateral(&mut self, quad: &Quadrilateral, animated: bool);

    /// Clear the overlay.
    fn remove_quadrilateral(&mut self);

    /// Emphasise the handle being dragged.
    fn highlight_handle(&mut self, _handle: Handle) {}

    /// Drop any emphasis added by `highlight_handle`.
    fn reset_highlights(&mut self) {}
}

/// Rectifies the image region bounded by four control points.
pub trait PerspectiveFilter {
    /// The rectified image, in whatever form the platform produces.
    type Output;

    /// Warp using cartesian control points (y grows up).
    fn correct(&self, corners: &PerspectiveCorners) -> Result<Self::Output>;
}
