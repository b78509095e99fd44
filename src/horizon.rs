//! Horizon filter: keeps the legs starting inside the look-ahead window.

use tracing::{debug, warn};

use crate::error::PlanError;
use crate::model::{Leg, Point, PointKind};

/// Default look-ahead window: 4 hours.
pub const DEFAULT_HORIZON_MS: i64 = 4 * 60 * 60 * 1000;

/// Select every leg whose start satisfies `now < start < now + horizon`.
///
/// Start points outside the window are skipped without looking at their
/// partner. An in-window start that is not immediately followed by an end
/// point with the same leg id fails the whole batch.
pub fn filter(points: &[Point], now_millis: i64, horizon_ms: i64) -> Result<Vec<Leg>, PlanError> {
    let mut legs = Vec::new();

    for (position, point) in points.iter().enumerate() {
        if point.kind != PointKind::Start {
            continue;
        }

        let start = point.timestamp_millis;
        if start <= now_millis || start - now_millis >= horizon_ms {
            continue;
        }

        match points.get(position + 1) {
            Some(end) if end.kind == PointKind::End && end.leg_id == point.leg_id => {
                legs.push(Leg::new(point.clone(), end.clone()));
            }
            _ => {
                warn!(leg_id = %point.leg_id, position, "start point without matching end point");
                return Err(PlanError::UnmatchedLegPair {
                    leg_id: point.leg_id.clone(),
                    position,
                });
            }
        }
    }

    debug!(points = points.len(), legs = legs.len(), "horizon filter done");
    Ok(legs)
}
