//! trusker-planner core
//!
//! Plans one delivery worker's next few hours from a snapshot of pending
//! requests: keep what starts inside the horizon, chain cheap requests with
//! nearby well-paid ones, then greedily sequence the result.

pub mod error;
pub mod feed;
pub mod generator;
pub mod grouper;
pub mod haversine;
pub mod horizon;
pub mod http_feed;
pub mod model;
pub mod planner;
pub mod report;
pub mod route_builder;
pub mod traits;

pub use error::{FeedError, PlanError};
pub use model::{CombinedLeg, Leg, Point, PointKind, Route, WorkerState};
pub use planner::{PairingMode, PlanOptions, plan, plan_many, plan_with};
