// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanquad-geometry: the quadrilateral data model and the coordinate spaces it
// moves between.
//
// Provides 2D primitives (points, sizes, rects, affine transforms), the
// four-corner quadrilateral with derived edge midpoints, closest-handle
// resolution, and the ordered transform chains that carry a quadrilateral
// from detector space to display space and from display space to the
// cartesian corners a perspective-correction filter consumes.

pub mod handle;
pub mod pipeline;
pub mod point;
pub mod quad;
pub mod transform;

// Re-export the primary types so callers can use `scanquad_geometry::Quadrilateral` etc.
pub use handle::{Handle, closest_handle, closest_handle_among};
pub use point::{Point, Rect, Size, midpoint};
pub use quad::{CornerPosition, EdgePosition, PerspectiveCorners, Quadrilateral};
pub use transform::{AffineTransform, aspect_fit_rect};
