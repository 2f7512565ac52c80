// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub collaborators for headless builds, tools and tests.
//
// `NullRenderer` draws nothing, `RecordingRenderer` keeps a log of what it
// was asked to draw, `NoDetector` never finds a quad, and
// `UnavailableFilter` reports `PlatformUnavailable`.

use scanquad_core::error::{Result, ScanQuadError};
use scanquad_geometry::{Handle, PerspectiveCorners, Quadrilateral};

use crate::traits::*;

/// Renderer that ignores every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl QuadRenderer for NullRenderer {
    fn draw_quadrilateral(&mut self, quad: &Quadrilateral, animated: bool) {
        tracing::trace!(?quad, animated, "NullRenderer::draw_quadrilateral");
    }

    fn remove_quadrilateral(&mut self) {
        tracing::trace!("NullRenderer::remove_quadrilateral");
    }
}

/// A call received by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Draw { quad: Quadrilateral, animated: bool },
    Remove,
    Highlight(Handle),
    ResetHighlights,
}

/// Renderer that records every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The quad from the most recent draw call, if any.
    pub fn last_drawn(&self) -> Option<&Quadrilateral> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::Draw { quad, .. } => Some(quad),
            _ => None,
        })
    }

    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::Draw { .. }))
            .count()
    }
}

impl QuadRenderer for RecordingRenderer {
    fn draw_quadrilateral(&mut self, quad: &Quadrilateral, animated: bool) {
        self.calls.push(RenderCall::Draw {
            quad: *quad,
            animated,
        });
    }

    fn remove_quadrilateral(&mut self) {
        self.calls.push(RenderCall::Remove);
    }

    fn highlight_handle(&mut self, handle: Handle) {
        self.calls.push(RenderCall::Highlight(handle));
    }

    fn reset_highlights(&mut self) {
        self.calls.push(RenderCall::ResetHighlights);
    }
}

/// Detector that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDetector;

impl QuadDetector for NoDetector {
    type Frame = ();

    fn detect(&mut self, _frame: &()) -> Option<Quadrilateral> {
        tracing::debug!("NoDetector::detect called on stub detector");
        None
    }
}

/// Perspective filter for platforms without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableFilter;

impl PerspectiveFilter for UnavailableFilter {
    type Output = ();

    fn correct(&self, _corners: &PerspectiveCorners) -> Result<()> {
        tracing::warn!("PerspectiveFilter::correct called on stub filter");
        Err(ScanQuadError::PlatformUnavailable)
    }
}
