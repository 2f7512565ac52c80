// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanquad-edit: interactive editing of a document quadrilateral.
//
// The collaborator traits describe what this crate needs from the outside
// world (a detector, a renderer, a perspective filter). The editor turns a
// stream of gesture events into coordinated corner updates; the edit surface
// and preview overlay tie the editor, the renderer and the coordinate
// pipeline together for the two screens of a scanning flow.

pub mod editor;
pub mod gesture;
pub mod preview;
pub mod session;
pub mod stub;
pub mod surface;
pub mod traits;

pub use editor::QuadEditor;
pub use gesture::{GestureEvent, GesturePhase};
pub use preview::PreviewOverlay;
pub use session::DragSession;
pub use surface::EditSurface;
pub use traits::{PerspectiveFilter, QuadDetector, QuadRenderer};
