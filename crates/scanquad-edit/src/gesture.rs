// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pointer events as delivered by the platform's gesture source.

use scanquad_geometry::Point;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of one pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

impl GesturePhase {
    /// True for the phases that close a gesture.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One pointer sample, in the coordinates of the view being edited.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub position: Point,
    pub phase: GesturePhase,
}

impl GestureEvent {
    pub fn new(position: Point, phase: GesturePhase) -> Self {
        Self { position, phase }
    }

    pub fn began(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), GesturePhase::Began)
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), GesturePhase::Moved)
    }

    pub fn ended(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), GesturePhase::Ended)
    }

    pub fn cancelled(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), GesturePhase::Cancelled)
    }
}
