// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Draggable handles and closest-handle resolution.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::quad::{CornerPosition, EdgePosition, Quadrilateral};

/// One of the eight draggable points on a quadrilateral.
///
/// An `Edge` handle is composite: it has no stored position of its own, and
/// dragging it moves both corners of that edge by the same delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    Corner(CornerPosition),
    Edge(EdgePosition),
}

impl Handle {
    /// All handles in resolution order. Ties go to the earlier entry.
    pub const ALL: [Handle; 8] = [
        Handle::Corner(CornerPosition::TopLeft),
        Handle::Corner(CornerPosition::TopRight),
        Handle::Corner(CornerPosition::BottomRight),
        Handle::Corner(CornerPosition::BottomLeft),
        Handle::Edge(EdgePosition::TopMiddle),
        Handle::Edge(EdgePosition::BottomMiddle),
        Handle::Edge(EdgePosition::RightMiddle),
        Handle::Edge(EdgePosition::LeftMiddle),
    ];

    /// Corner handles only.
    pub const CORNERS: [Handle; 4] = [
        Handle::Corner(CornerPosition::TopLeft),
        Handle::Corner(CornerPosition::TopRight),
        Handle::Corner(CornerPosition::BottomRight),
        Handle::Corner(CornerPosition::BottomLeft),
    ];

    /// Current position of the handle on `quad`.
    pub fn position(self, quad: &Quadrilateral) -> Point {
        match self {
            Handle::Corner(c) => quad.corner(c),
            Handle::Edge(e) => quad.midpoint(e),
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(self, Handle::Corner(_))
    }
}

impl Quadrilateral {
    /// Every handle with its current position, in [`Handle::ALL`] order.
    pub fn handles(&self) -> [(Handle, Point); 8] {
        Handle::ALL.map(|handle| (handle, handle.position(self)))
    }
}

/// The handle nearest to `point` by Euclidean distance.
///
/// Walks [`Handle::ALL`] keeping the first strictly smaller distance, so on
/// an exact tie corners win over midpoints and earlier roles over later ones.
///
/// A non-finite `point` (or quad) has no meaningful nearest handle; this
/// then returns the first handle, top-left. Use [`closest_handle_among`] to
/// tell that case apart.
pub fn closest_handle(point: Point, quad: &Quadrilateral) -> Handle {
    closest_handle_among(point, quad, &Handle::ALL).unwrap_or(Handle::ALL[0])
}

/// [`closest_handle`] restricted to `candidates`, with the same tie-break
/// (earlier candidate wins).
///
/// Candidates at a non-finite distance are skipped, so this returns `None`
/// for an empty candidate list or a NaN/infinite query point.
pub fn closest_handle_among(
    point: Point,
    quad: &Quadrilateral,
    candidates: &[Handle],
) -> Option<Handle> {
    let mut best: Option<(Handle, f64)> = None;
    for &handle in candidates {
        let distance = point.distance_to(handle.position(quad));
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, smallest)) if distance >= smallest => {}
            _ => best = Some((handle, distance)),
        }
    }
    best.map(|(handle, _)| handle)
}
