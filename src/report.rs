//! Route reporting: the stable JSON shape and a human summary.

use std::fmt;

use jiff::Timestamp;
use serde::Serialize;

use crate::model::{CombinedLeg, Route};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDates {
    pub start: Timestamp,
    pub end: Timestamp,
}

/// One combined leg as handed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub date: ReportDates,
    pub price: i64,
    /// Leg names in execution order.
    pub courses: Vec<String>,
}

impl TryFrom<&CombinedLeg> for ReportEntry {
    type Error = jiff::Error;

    fn try_from(leg: &CombinedLeg) -> Result<Self, Self::Error> {
        Ok(Self {
            date: ReportDates {
                start: Timestamp::from_millisecond(leg.start_time)?,
                end: Timestamp::from_millisecond(leg.end_time)?,
            },
            price: leg.total_price,
            courses: leg.leg_ids().map(str::to_string).collect(),
        })
    }
}

/// Serializes as a bare JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouteReport {
    pub entries: Vec<ReportEntry>,
}

impl RouteReport {
    pub fn from_route(route: &Route) -> Result<Self, jiff::Error> {
        let entries = route.iter().map(ReportEntry::try_from).collect::<Result<_, _>>()?;
        Ok(Self { entries })
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Human-readable digest of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub now: Timestamp,
    pub first_start: Option<Timestamp>,
    pub last_end: Option<Timestamp>,
    pub course_count: usize,
    pub total_price: i64,
    pub has_grouped: bool,
    pub course_names: Vec<String>,
}

impl Summary {
    pub fn new(route: &Route, now: Timestamp) -> Result<Self, jiff::Error> {
        let first_start = route
            .legs
            .first()
            .map(|leg| Timestamp::from_millisecond(leg.start_time))
            .transpose()?;
        let last_end = route
            .legs
            .last()
            .map(|leg| Timestamp::from_millisecond(leg.end_time))
            .transpose()?;

        Ok(Self {
            now,
            first_start,
            last_end,
            course_count: route.course_count(),
            total_price: route.total_price(),
            has_grouped: route.has_grouped_legs(),
            course_names: route
                .iter()
                .flat_map(CombinedLeg::leg_ids)
                .map(str::to_string)
                .collect(),
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(first_start), Some(last_end)) = (self.first_start, self.last_end) else {
            return writeln!(f, "No courses to display");
        };

        writeln!(f, "It is currently {}", self.now)?;
        writeln!(f, "The first course starts at {first_start}")?;
        writeln!(f, "The last course ends at {last_end}")?;
        writeln!(
            f,
            "{} courses for a total of {}",
            self.course_count,
            format_amount(self.total_price)
        )?;
        if self.has_grouped {
            writeln!(f, "This route contains grouped courses")?;
        } else {
            writeln!(f, "This route contains no grouped courses")?;
        }
        writeln!(f, "Courses:")?;
        writeln!(f, "{}", self.course_names.join(" then "))
    }
}

/// Cents to a display amount, e.g. `3200` -> `32.00 €`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02} €", cents / 100, cents % 100)
}
