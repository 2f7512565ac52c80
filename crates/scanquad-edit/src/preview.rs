// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Live scanning overlay: draws each detector result over the camera preview.

use scanquad_core::ScanConfig;
use scanquad_geometry::pipeline::detector_to_display;
use scanquad_geometry::{Quadrilateral, Rect, Size};
use tracing::debug;

use crate::traits::{QuadDetector, QuadRenderer};

/// Overlay for the live preview.
///
/// Detector quads arrive in sensor-frame coordinates and are drawn through
/// the detector -> display chain using the configured sensor rotation.
#[derive(Debug)]
pub struct PreviewOverlay<R: QuadRenderer> {
    view_bounds: Rect,
    renderer: R,
    config: ScanConfig,
    current: Option<Quadrilateral>,
}

impl<R: QuadRenderer> PreviewOverlay<R> {
    pub fn new(view_bounds: Rect, renderer: R, config: ScanConfig) -> Self {
        Self {
            view_bounds,
            renderer,
            config,
            current: None,
        }
    }

    /// Change the preview's bounds. The next detection is drawn against them.
    pub fn set_view_bounds(&mut self, view_bounds: Rect) {
        self.view_bounds = view_bounds;
    }

    /// Show `detected` (in the coordinates of a `frame_size` frame), or clear
    /// the overlay if the detector found nothing.
    pub fn on_detection(&mut self, detected: Option<&Quadrilateral>, frame_size: Size) {
        let Some(quad) = detected else {
            if self.current.take().is_some() {
                debug!("Detection lost; removing overlay");
            }
            self.renderer.remove_quadrilateral();
            return;
        };

        let display = detector_to_display(
            quad,
            frame_size,
            self.view_bounds,
            self.config.sensor_rotation_radians(),
        );
        self.renderer
            .draw_quadrilateral(&display, self.config.animate_detections);
        self.current = Some(display);
    }

    /// Run `detector` on `frame` and show the result.
    pub fn on_frame<D>(
        &mut self,
        detector: &mut D,
        frame: &D::Frame,
        frame_size: Size,
    ) -> Option<Quadrilateral>
    where
        D: QuadDetector,
    {
        let detected = detector.detect(frame);
        self.on_detection(detected.as_ref(), frame_size);
        self.current
    }

    /// The quad currently drawn, in display coordinates.
    pub fn current(&self) -> Option<&Quadrilateral> {
        self.current.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
