// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for scanquad.
//
// The geometry core and the editor never fail; these errors only surface at
// the boundaries (configuration, size validation, script replay, stub
// collaborators).

use thiserror::Error;

/// Top-level error type for boundary operations.
#[derive(Debug, Error)]
pub enum ScanQuadError {
    // -- Geometry input --
    #[error("degenerate size {width}x{height}: both dimensions must be finite and positive")]
    DegenerateSize { width: f64, height: f64 },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid gesture script: {0}")]
    InvalidScript(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Collaborators --
    #[error("collaborator not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScanQuadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_size_message_names_dimensions() {
        let err = ScanQuadError::DegenerateSize {
            width: 0.0,
            height: 480.0,
        };
        assert_eq!(
            err.to_string(),
            "degenerate size 0x480: both dimensions must be finite and positive"
        );
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn open_missing() -> Result<Vec<u8>> {
            Ok(std::fs::read("/definitely/not/here.json")?)
        }
        let err = open_missing().expect_err("missing file must fail");
        assert!(matches!(err, ScanQuadError::Io(_)));
    }
}
