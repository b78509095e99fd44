//! Error types for feed loading and route planning.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the raw request feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("feed is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// A start feature must carry its price.
    #[error("start point of leg {leg_id:?} has no price")]
    MissingPrice { leg_id: String },
}

/// Errors raised by the planning pipeline.
///
/// Every variant aborts the whole planning call; there is no partial route.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    /// A start point is not immediately followed by its end point.
    #[error("start of leg {leg_id:?} at feed position {position} is not followed by its end")]
    UnmatchedLegPair { leg_id: String, position: usize },
    /// Two legs were paired out of execution order. Indicates a grouping defect.
    #[error("paired legs {first:?} and {second:?} are not in execution order")]
    InconsistentPairing { first: String, second: String },
    #[error("invalid option {field}: {reason}")]
    InvalidOption { field: &'static str, reason: String },
}
