// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The editing screen: a still image shown aspect-fit, with an overlay the
// size of the fitted image on which the user adjusts the quadrilateral.
//
// The quad is kept in two spaces. `image_quad` is authoritative between
// layouts; `display_quad` is what the editor mutates. On relayout and on
// commit the display quad is mapped back into the image.

use scanquad_core::ScanConfig;
use scanquad_core::error::Result;
use scanquad_geometry::pipeline::{OutputQuad, default_quad, image_to_overlay, overlay_to_output};
use scanquad_geometry::{Quadrilateral, Rect, Size, aspect_fit_rect};
use tracing::{debug, info, instrument};

use crate::editor::QuadEditor;
use crate::gesture::GestureEvent;
use crate::traits::{PerspectiveFilter, QuadRenderer};

/// Edit-screen state for one source image.
#[derive(Debug)]
pub struct EditSurface<R: QuadRenderer> {
    image_size: Size,
    image_quad: Quadrilateral,
    /// Aspect-fit frame of the image inside the view, once laid out.
    overlay: Option<Rect>,
    display_quad: Option<Quadrilateral>,
    editor: QuadEditor,
    renderer: R,
    config: ScanConfig,
}

impl<R: QuadRenderer> EditSurface<R> {
    /// Build the surface for an image of `image_size`.
    ///
    /// `detected` is in image coordinates. Without it the surface starts from
    /// the default inset rectangle.
    pub fn new(
        image_size: Size,
        detected: Option<Quadrilateral>,
        renderer: R,
        config: ScanConfig,
    ) -> Self {
        let image_quad = match detected {
            Some(quad) => quad,
            None => {
                info!(
                    width = image_size.width,
                    height = image_size.height,
                    inset = config.default_inset,
                    "No detected quadrilateral; using default rectangle"
                );
                default_quad(image_size, config.default_inset)
            }
        };

        Self {
            image_size,
            image_quad,
            overlay: None,
            display_quad: None,
            editor: QuadEditor::from_config(Size::default(), &config),
            renderer,
            config,
        }
    }

    /// Fit the image into `view_bounds` and redraw the quad on the overlay.
    ///
    /// Safe to call repeatedly; edits made on the previous layout carry over.
    /// A drag in progress is cancelled, since its positions belong to the old
    /// overlay. A view with no usable area (before it is first sized) leaves
    /// the current layout untouched. Returns the fitted frame either way.
    #[instrument(skip(self))]
    pub fn layout(&mut self, view_bounds: Rect) -> Rect {
        let overlay = aspect_fit_rect(self.image_size, view_bounds);
        if overlay.size.is_degenerate() {
            debug!(?overlay, "View has no usable area; keeping current layout");
            return overlay;
        }

        if self.editor.is_dragging() {
            debug!("Relayout during a drag; cancelling the gesture");
            self.editor.cancel(&mut self.renderer);
        }
        if let (Some(previous), Some(display)) = (self.overlay, self.display_quad) {
            self.image_quad = display.scale(previous.size, self.image_size);
        }

        let display = image_to_overlay(&self.image_quad, self.image_size, overlay.size);
        debug!(?overlay, "Edit overlay laid out");

        self.editor.set_view_size(overlay.size);
        self.renderer.draw_quadrilateral(&display, false);
        self.overlay = Some(overlay);
        self.display_quad = Some(display);
        overlay
    }

    /// Feed a gesture event, positioned in overlay coordinates.
    ///
    /// Before the first `layout` there is nothing to edit and the event is
    /// ignored. Returns `true` if the quad moved.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> bool {
        self.editor
            .handle(event, self.display_quad.as_mut(), &mut self.renderer)
    }

    /// Map the current quad to the source image and to the filter's
    /// cartesian control points.
    #[instrument(skip(self))]
    pub fn commit(&mut self) -> OutputQuad {
        let output = match (self.overlay, self.display_quad) {
            (Some(overlay), Some(display)) => {
                overlay_to_output(&display, overlay.size, self.image_size)
            }
            // Never laid out: the image quad is already in image coordinates.
            _ => overlay_to_output(&self.image_quad, self.image_size, self.image_size),
        };
        self.image_quad = output.image;
        info!(
            area = output.image.area(),
            convex = output.image.is_convex(),
            "Quadrilateral committed"
        );
        output
    }

    /// [`commit`](Self::commit), then run `filter` on the control points.
    pub fn commit_with<F: PerspectiveFilter>(
        &mut self,
        filter: &F,
    ) -> Result<(OutputQuad, F::Output)> {
        let output = self.commit();
        let corrected = filter.correct(&output.corners)?;
        Ok((output, corrected))
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    /// The quad in image coordinates as of the last layout or commit.
    pub fn image_quad(&self) -> &Quadrilateral {
        &self.image_quad
    }

    /// The quad being edited, in overlay coordinates.
    pub fn display_quad(&self) -> Option<&Quadrilateral> {
        self.display_quad.as_ref()
    }

    pub fn overlay_frame(&self) -> Option<Rect> {
        self.overlay
    }

    pub fn editor(&self) -> &QuadEditor {
        &self.editor
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::{RecordingRenderer, RenderCall, UnavailableFilter};
    use scanquad_core::error::ScanQuadError;
    use scanquad_geometry::{PerspectiveCorners, Point};

    // A 400x300 image in a 200x300 view fits to a 200x150 overlay at y = 75.
    fn image() -> Size {
        Size::new(400.0, 300.0)
    }

    fn view() -> Rect {
        Rect::from_size(Size::new(200.0, 300.0))
    }

    fn surface(detected: Option<Quadrilateral>) -> EditSurface<RecordingRenderer> {
        EditSurface::new(image(), detected, RecordingRenderer::new(), ScanConfig::default())
    }

    #[test]
    fn missing_detection_falls_back_to_the_default_rectangle() {
        let s = surface(None);
        assert_eq!(*s.image_quad(), default_quad(image(), 0.05));
        assert!(s.display_quad().is_none());
    }

    #[test]
    fn layout_fits_the_image_and_draws_the_scaled_quad() {
        let mut s = surface(None);
        let overlay = s.layout(view());

        assert_eq!(overlay, Rect::new(Point::new(0.0, 75.0), Size::new(200.0, 150.0)));
        assert_eq!(s.editor().view_size(), Size::new(200.0, 150.0));

        let display = s.display_quad().copied().expect("laid out");
        assert_eq!(display.top_left, Point::new(10.0, 7.5));
        assert_eq!(display.bottom_right, Point::new(190.0, 142.5));
        assert_eq!(
            s.renderer().calls,
            vec![RenderCall::Draw {
                quad: display,
                animated: false
            }]
        );
    }

    #[test]
    fn gestures_before_layout_are_ignored() {
        let mut s = surface(None);
        assert!(!s.handle_gesture(GestureEvent::began(10.0, 7.5)));
        assert!(!s.handle_gesture(GestureEvent::moved(0.0, 0.0)));
        assert_eq!(s.renderer().draw_count(), 0);
    }

    #[test]
    fn drag_then_commit_maps_back_to_the_image() {
        let mut s = surface(None);
        s.layout(view());
        s.handle_gesture(GestureEvent::began(10.0, 7.5));
        assert!(s.handle_gesture(GestureEvent::moved(0.0, 0.0)));
        s.handle_gesture(GestureEvent::ended(0.0, 0.0));

        let out = s.commit();
        assert_eq!(out.image.top_left, Point::new(0.0, 0.0));
        assert_eq!(out.image.top_right, Point::new(380.0, 15.0));
        assert_eq!(out.image.bottom_right, Point::new(380.0, 285.0));
        assert_eq!(*s.image_quad(), out.image);

        // Filter top-left is the physically upper-left corner in cartesian space.
        assert_eq!(out.corners.top_left, Point::new(0.0, 300.0));
        assert_eq!(out.corners.bottom_right, Point::new(380.0, 15.0));
    }

    #[test]
    fn commit_without_layout_returns_the_detected_quad() {
        let detected = Quadrilateral::new(
            Point::new(30.0, 40.0),
            Point::new(350.0, 20.0),
            Point::new(370.0, 280.0),
            Point::new(25.0, 260.0),
        );
        let mut s = surface(Some(detected));
        let out = s.commit();
        assert_eq!(out.image, detected);
    }

    #[test]
    fn relayout_keeps_edits() {
        let mut s = surface(None);
        s.layout(view());
        s.handle_gesture(GestureEvent::began(190.0, 142.5));
        s.handle_gesture(GestureEvent::moved(200.0, 150.0));
        s.handle_gesture(GestureEvent::ended(200.0, 150.0));

        // Twice the size: overlay is now the full image resolution.
        s.layout(Rect::from_size(Size::new(400.0, 600.0)));
        let display = s.display_quad().copied().expect("laid out");
        assert_eq!(display.bottom_right, Point::new(400.0, 300.0));
        assert_eq!(display.top_left, Point::new(20.0, 15.0));
        assert_eq!(s.editor().view_size(), Size::new(400.0, 300.0));
    }

    #[test]
    fn relayout_mid_drag_cancels_the_gesture() {
        let mut s = surface(None);
        s.layout(view());
        s.handle_gesture(GestureEvent::began(10.0, 7.5));
        assert!(s.editor().is_dragging());

        s.layout(Rect::from_size(Size::new(400.0, 600.0)));
        assert!(!s.editor().is_dragging());
        assert!(s.renderer().calls.contains(&RenderCall::ResetHighlights));

        // The corner now sits at (20, 15). Touching it there moves nothing.
        assert!(!s.handle_gesture(GestureEvent::moved(20.0, 15.0)));
        assert_eq!(s.display_quad().map(|q| q.top_left), Some(Point::new(20.0, 15.0)));

        assert!(s.handle_gesture(GestureEvent::moved(25.0, 20.0)));
        assert_eq!(s.display_quad().map(|q| q.top_left), Some(Point::new(25.0, 20.0)));
    }

    #[test]
    fn zero_sized_view_keeps_the_quad() {
        let mut s = surface(None);
        s.layout(view());
        s.handle_gesture(GestureEvent::began(10.0, 7.5));
        s.handle_gesture(GestureEvent::moved(0.0, 0.0));
        s.handle_gesture(GestureEvent::ended(0.0, 0.0));

        let empty = s.layout(Rect::from_size(Size::new(0.0, 0.0)));
        assert!(empty.size.is_degenerate());
        assert_eq!(s.overlay_frame().map(|r| r.size), Some(Size::new(200.0, 150.0)));

        s.layout(view());
        assert_eq!(s.image_quad().top_left, Point::new(0.0, 0.0));
        assert_eq!(s.image_quad().bottom_right, Point::new(380.0, 285.0));
        assert_eq!(s.display_quad().map(|q| q.top_left), Some(Point::new(0.0, 0.0)));
        assert_eq!(s.renderer().draw_count(), 3);
    }

    #[test]
    fn commit_with_runs_the_filter_on_the_control_points() {
        struct Passthrough;

        impl PerspectiveFilter for Passthrough {
            type Output = PerspectiveCorners;

            fn correct(&self, corners: &PerspectiveCorners) -> Result<PerspectiveCorners> {
                Ok(*corners)
            }
        }

        let mut s = surface(None);
        s.layout(view());
        let (out, corners) = s.commit_with(&Passthrough).expect("filter succeeds");
        assert_eq!(out.corners, corners);

        let err = s.commit_with(&UnavailableFilter).expect_err("stub filter fails");
        assert!(matches!(err, ScanQuadError::PlatformUnavailable));
    }
}
