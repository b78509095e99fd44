//! GeoJSON-like request feed.
//!
//! The feed is a `FeatureCollection` of point features. Each request is a
//! `start` feature (carrying the price) immediately followed by its `end`
//! feature, both sharing the same `name`.

use std::fs;
use std::path::{Path, PathBuf};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::model::{Point, PointKind};
use crate::traits::LegRepository;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "feature_collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default = "point_type")]
    pub kind: String,
    /// `[longitude, latitude]`.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Leg identifier shared by the start and end features.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PointKind,
    pub date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

fn feature_collection_type() -> String {
    "FeatureCollection".to_string()
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn point_type() -> String {
    "Point".to_string()
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: feature_collection_type(),
            features,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, FeedError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert every feature into a planning point, keeping feed order.
    pub fn to_points(&self) -> Result<Vec<Point>, FeedError> {
        self.features.iter().map(Point::try_from).collect()
    }
}

impl Feature {
    pub fn new(
        name: impl Into<String>,
        kind: PointKind,
        lat: f64,
        lng: f64,
        date: Timestamp,
        price: Option<i64>,
    ) -> Self {
        Self {
            kind: feature_type(),
            geometry: Geometry {
                kind: point_type(),
                coordinates: [lng, lat],
            },
            properties: Properties {
                name: name.into(),
                kind,
                date,
                price,
            },
        }
    }

    pub fn lat(&self) -> f64 {
        self.geometry.coordinates[1]
    }

    pub fn lng(&self) -> f64 {
        self.geometry.coordinates[0]
    }
}

impl TryFrom<&Feature> for Point {
    type Error = FeedError;

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        let props = &feature.properties;
        if props.kind == PointKind::Start && props.price.is_none() {
            return Err(FeedError::MissingPrice {
                leg_id: props.name.clone(),
            });
        }

        Ok(Point {
            leg_id: props.name.clone(),
            kind: props.kind,
            lat: feature.lat(),
            lng: feature.lng(),
            timestamp_millis: props.date.as_millisecond(),
            price: match props.kind {
                PointKind::Start => props.price,
                PointKind::End => None,
            },
        })
    }
}

impl LegRepository for FeatureCollection {
    fn points(&self) -> Result<Vec<Point>, FeedError> {
        self.to_points()
    }
}

/// A feed stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileFeed {
    pub path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<FeatureCollection, FeedError> {
        let json = fs::read_to_string(&self.path).map_err(|source| FeedError::Io {
            path: self.path.clone(),
            source,
        })?;
        FeatureCollection::from_json_str(&json)
    }
}

impl LegRepository for FileFeed {
    fn points(&self) -> Result<Vec<Point>, FeedError> {
        self.load()?.to_points()
    }
}

/// Write `collection` as pretty JSON to `path`.
pub fn write_feed(path: &Path, collection: &FeatureCollection) -> Result<(), FeedError> {
    let json = collection.to_json_pretty()?;
    fs::write(path, json).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })
}
