// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Corner/edge editor: turns a gesture stream into corner updates.
//
// Idle --(began/moved)--> Dragging --(moved)--> Dragging --(ended/cancelled)--> Idle
//
// The handle is resolved once, from the first event of a gesture, and held
// until the gesture ends. Each later move applies the pointer delta to the
// handle's corner (or to both corners of an edge handle), clamped to the
// view. Midpoints are derived from the corners, so they are in sync the
// moment a corner is written.

use scanquad_core::ScanConfig;
use scanquad_geometry::{Handle, Point, Quadrilateral, Size, closest_handle_among};
use tracing::{debug, info, trace};

use crate::gesture::{GestureEvent, GesturePhase};
use crate::session::DragSession;
use crate::traits::QuadRenderer;

/// Drag state machine for one editable view.
///
/// The editor does not own the quadrilateral; the caller passes it in with
/// each event. If there is no quad yet, every event is ignored.
#[derive(Debug, Clone)]
pub struct QuadEditor {
    /// Bounds corners are clamped to: `[0, width] x [0, height]`.
    view_size: Size,
    /// Handles the resolver may pick from.
    candidates: &'static [Handle],
    session: Option<DragSession>,
}

impl QuadEditor {
    /// Editor resolving all eight handles.
    pub fn new(view_size: Size) -> Self {
        Self {
            view_size,
            candidates: &Handle::ALL,
            session: None,
        }
    }

    /// Editor that resolves corners only, ignoring edge midpoints.
    pub fn corners_only(view_size: Size) -> Self {
        Self {
            candidates: &Handle::CORNERS,
            ..Self::new(view_size)
        }
    }

    /// Editor honouring `config.edge_handles_enabled`.
    pub fn from_config(view_size: Size, config: &ScanConfig) -> Self {
        if config.edge_handles_enabled {
            Self::new(view_size)
        } else {
            Self::corners_only(view_size)
        }
    }

    /// Update the clamp bounds after a layout change.
    pub fn set_view_size(&mut self, view_size: Size) {
        self.view_size = view_size;
    }

    pub fn view_size(&self) -> Size {
        self.view_size
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Handle held by the current gesture, if one is in progress.
    pub fn active_handle(&self) -> Option<Handle> {
        self.session.map(|s| s.handle())
    }

    /// Feed one gesture event.
    ///
    /// `quad` is the quadrilateral being edited, in the same coordinates as
    /// the event. Returns `true` if the quad was modified.
    pub fn handle<R>(
        &mut self,
        event: GestureEvent,
        quad: Option<&mut Quadrilateral>,
        renderer: &mut R,
    ) -> bool
    where
        R: QuadRenderer + ?Sized,
    {
        if event.phase.is_terminal() {
            self.end(event.phase, renderer);
            return false;
        }

        let Some(quad) = quad else {
            trace!(phase = ?event.phase, "No quadrilateral to edit; ignoring gesture");
            return false;
        };

        match (event.phase, self.session.as_mut()) {
            (GesturePhase::Moved, Some(session)) => {
                let delta = session.advance(event.position);
                let handle = session.handle();
                self.apply(handle, delta, quad);
                trace!(?handle, dx = delta.x, dy = delta.y, "Handle dragged");
                renderer.draw_quadrilateral(quad, false);
                true
            }
            _ => {
                // A fresh `Began`, or a `Moved` with no session (the source
                // skipped `Began`): resolve and hold a handle, no movement yet.
                self.begin(event.position, quad, renderer);
                false
            }
        }
    }

    /// End the current gesture, if any, as if it had been cancelled.
    ///
    /// Used when the view's coordinate system changes under a drag: the
    /// session's last position would no longer be comparable with new events.
    pub fn cancel<R>(&mut self, renderer: &mut R)
    where
        R: QuadRenderer + ?Sized,
    {
        self.end(GesturePhase::Cancelled, renderer);
    }

    fn begin<R>(&mut self, position: Point, quad: &Quadrilateral, renderer: &mut R)
    where
        R: QuadRenderer + ?Sized,
    {
        let Some(handle) = closest_handle_among(position, quad, self.candidates) else {
            return;
        };
        info!(?handle, x = position.x, y = position.y, "Drag started");
        self.session = Some(DragSession::new(handle, position));
        renderer.highlight_handle(handle);
    }

    fn end<R>(&mut self, phase: GesturePhase, renderer: &mut R)
    where
        R: QuadRenderer + ?Sized,
    {
        if let Some(session) = self.session.take() {
            debug!(handle = ?session.handle(), ?phase, "Drag finished");
        }
        renderer.reset_highlights();
    }

    /// Move `handle` by `delta`. Each moved corner is clamped on its own.
    fn apply(&self, handle: Handle, delta: Point, quad: &mut Quadrilateral) {
        match handle {
            Handle::Corner(corner) => {
                let moved = (quad.corner(corner) + delta).clamped_to(self.view_size);
                quad.set_corner(corner, moved);
            }
            Handle::Edge(edge) => {
                let (a, b) = edge.corners();
                for corner in [a, b] {
                    let moved = (quad.corner(corner) + delta).clamped_to(self.view_size);
                    quad.set_corner(corner, moved);
                }
            }
        }
    }
}
