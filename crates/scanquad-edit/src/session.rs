// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-gesture drag state.

use scanquad_geometry::{Handle, Point};

/// State of one continuous drag.
///
/// The handle is resolved once when the session starts and never changes
/// afterwards, even if the pointer ends up nearer to a different handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    handle: Handle,
    previous_position: Point,
}

impl DragSession {
    pub fn new(handle: Handle, position: Point) -> Self {
        Self {
            handle,
            previous_position: position,
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn previous_position(&self) -> Point {
        self.previous_position
    }

    /// Offset from the last observed position to `position`, recording
    /// `position` for the next call.
    pub fn advance(&mut self, position: Point) -> Point {
        let delta = position - self.previous_position;
        self.previous_position = position;
        delta
    }
}
