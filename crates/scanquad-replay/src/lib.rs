// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scanquad-replay: run a recorded gesture script through the edit surface
// headlessly and report what would be handed to the perspective filter.
//
// A script is JSON:
//
// ```json
// {
//   "image_size":  { "width": 400, "height": 300 },
//   "view_bounds": { "origin": { "x": 0, "y": 0 }, "size": { "width": 200, "height": 300 } },
//   "detected":    null,
//   "config":      { "default_inset": 0.05 },
//   "events": [
//     { "position": { "x": 10, "y": 7.5 }, "phase": "began" },
//     { "position": { "x": 0,  "y": 0 },   "phase": "moved" },
//     { "position": { "x": 0,  "y": 0 },   "phase": "ended" }
//   ]
// }
// ```
//
// Event positions are in overlay coordinates: relative to the aspect-fit
// frame of the image inside `view_bounds`, not to the view itself.

use std::path::Path;

use scanquad_core::ScanConfig;
use scanquad_core::error::{Result, ScanQuadError};
use scanquad_edit::stub::NullRenderer;
use scanquad_edit::{EditSurface, GestureEvent};
use scanquad_geometry::{PerspectiveCorners, Quadrilateral, Rect, Size};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A recorded editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Source image size, in pixels.
    pub image_size: Size,
    /// Bounds of the view the image is displayed in.
    pub view_bounds: Rect,
    /// Detector result in image coordinates. Absent means "use the default".
    #[serde(default)]
    pub detected: Option<Quadrilateral>,
    #[serde(default)]
    pub config: Option<ScanConfig>,
    #[serde(default)]
    pub events: Vec<GestureEvent>,
}

impl Script {
    /// Parse a script from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    /// Reject scripts the geometry core cannot run meaningfully.
    pub fn validate(&self) -> Result<()> {
        self.image_size.validated()?;
        self.view_bounds.size.validated()?;
        if let Some(config) = &self.config {
            config.validate()?;
        }

        let origin = self.view_bounds.origin;
        if !(origin.x.is_finite() && origin.y.is_finite()) {
            return Err(ScanQuadError::InvalidScript(
                "view_bounds origin must be finite".into(),
            ));
        }
        let detected_finite = self
            .detected
            .is_none_or(|quad| quad.corners().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        if !detected_finite {
            return Err(ScanQuadError::InvalidScript(
                "detected quadrilateral has a non-finite corner".into(),
            ));
        }
        if let Some(index) = self
            .events
            .iter()
            .position(|e| !(e.position.x.is_finite() && e.position.y.is_finite()))
        {
            return Err(ScanQuadError::InvalidScript(format!(
                "event {index} has a non-finite position"
            )));
        }
        Ok(())
    }
}

/// Load and validate a script file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_script(path: impl AsRef<Path>) -> Result<Script> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let script = Script::from_json_str(&text)?;
    debug!(events = script.events.len(), "Gesture script loaded");
    Ok(script)
}

/// What a replay produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutput {
    /// Aspect-fit frame of the image inside the view.
    pub overlay: Rect,
    /// Committed quad in source-image coordinates.
    pub image_quad: Quadrilateral,
    /// Control points for the perspective filter (cartesian, y up).
    pub corners: PerspectiveCorners,
    /// Number of events that moved the quad.
    pub moves_applied: usize,
    pub convex: bool,
}

/// Replay `script` against a headless edit surface and commit the result.
#[instrument(skip_all, fields(events = script.events.len()))]
pub fn run_script(script: &Script) -> Result<ReplayOutput> {
    script.validate()?;

    let config = script.config.clone().unwrap_or_default();
    let mut surface = EditSurface::new(script.image_size, script.detected, NullRenderer, config);
    let overlay = surface.layout(script.view_bounds);

    let mut moves_applied = 0;
    for &event in &script.events {
        if surface.handle_gesture(event) {
            moves_applied += 1;
        }
    }
    if surface.editor().is_dragging() {
        warn!("Script ended mid-gesture; committing the quad as it stands");
    }

    let output = surface.commit();
    info!(moves_applied, "Replay finished");

    Ok(ReplayOutput {
        overlay,
        image_quad: output.image,
        corners: output.corners,
        moves_applied,
        convex: output.image.is_convex(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanquad_edit::GesturePhase;
    use scanquad_geometry::Point;

    fn script() -> Script {
        Script {
            image_size: Size::new(400.0, 300.0),
            view_bounds: Rect::from_size(Size::new(200.0, 300.0)),
            detected: None,
            config: None,
            events: Vec::new(),
        }
    }

    #[test]
    fn empty_script_commits_the_default_rectangle() {
        let out = run_script(&script()).expect("replay");
        assert_eq!(out.image_quad.top_left, Point::new(20.0, 15.0));
        assert_eq!(out.image_quad.bottom_right, Point::new(380.0, 285.0));
        assert_eq!(out.moves_applied, 0);
        assert!(out.convex);
    }

    #[test]
    fn non_finite_event_is_rejected() {
        let mut s = script();
        s.events.push(GestureEvent::new(Point::new(f64::NAN, 1.0), GesturePhase::Began));
        let err = run_script(&s).expect_err("NaN position");
        assert!(matches!(err, ScanQuadError::InvalidScript(ref m) if m.contains("event 0")));
    }

    #[test]
    fn degenerate_view_is_rejected() {
        let mut s = script();
        s.view_bounds = Rect::from_size(Size::new(0.0, 300.0));
        assert!(matches!(
            run_script(&s),
            Err(ScanQuadError::DegenerateSize { .. })
        ));
    }

    #[test]
    fn unterminated_gesture_still_commits() {
        let mut s = script();
        s.events = vec![GestureEvent::began(10.0, 7.5), GestureEvent::moved(5.0, 5.0)];
        let out = run_script(&s).expect("replay");
        assert_eq!(out.moves_applied, 1);
        assert_eq!(out.image_quad.top_left, Point::new(10.0, 10.0));
    }
}
