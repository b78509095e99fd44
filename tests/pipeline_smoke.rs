//! Generated feed -> file -> plan -> report.

use std::env;

use jiff::{SignedDuration, Timestamp};
use rand::SeedableRng;
use rand::rngs::StdRng;

use trusker_planner::feed::{FileFeed, write_feed};
use trusker_planner::generator::{GeneratorConfig, generate};
use trusker_planner::report::{RouteReport, Summary};
use trusker_planner::traits::LegRepository;
use trusker_planner::{PairingMode, PlanOptions, WorkerState, plan};

#[test]
fn generated_paris_day_is_planned() {
    let day: Timestamp = "2017-07-15T00:00:00Z".parse().unwrap();
    let collection = generate(&GeneratorConfig::paris(day), &mut StdRng::seed_from_u64(2017));

    let path = env::temp_dir().join(format!("trusker-planner-smoke-{}.json", std::process::id()));
    write_feed(&path, &collection).expect("write feed");
    let points = FileFeed::new(&path).points().expect("read feed back");
    std::fs::remove_file(&path).ok();
    assert_eq!(points.len(), 400);

    let now = day + SignedDuration::from_hours(12) + SignedDuration::from_secs(1);
    let worker = WorkerState::new(48.85341, 2.3488, now.as_millisecond());

    for pairing in [PairingMode::FirstFit, PairingMode::BestFit] {
        let options = PlanOptions {
            pairing,
            ..PlanOptions::default()
        };
        let route = plan(&points, worker, &options).expect("plan");
        assert!(!route.is_empty(), "a busy afternoon should yield work");

        let mut cursor = now.as_millisecond();
        for leg in &route {
            assert!(leg.start_time > cursor);
            assert!(leg.start_time < now.as_millisecond() + options.horizon_ms);
            cursor = leg.end_time;
        }

        let report = RouteReport::from_route(&route).expect("report");
        assert_eq!(report.entries.len(), route.len());

        let summary = Summary::new(&route, now).expect("summary");
        assert_eq!(summary.course_count, route.course_count());
        assert!(summary.to_string().contains("Course"));
    }
}
