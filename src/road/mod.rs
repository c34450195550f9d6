use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;

pub mod sample;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Segment geometry, either both endpoints or a single representative point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Geometry {
    Line { start: LatLng, end: LatLng },
    Point(LatLng),
}

impl Geometry {
    /// Single coordinate used for markers: the point itself, or the line midpoint.
    pub fn anchor(&self) -> LatLng {
        match self {
            Geometry::Point(point) => *point,
            Geometry::Line { start, end } => LatLng {
                lat: (start.lat + end.lat) / 2.0,
                lng: (start.lng + end.lng) / 2.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub road_id: String,
    pub geometry: Geometry,
    /// meters; lower is sharper
    pub curve_radius: f64,
    /// degrees
    pub road_slope: f64,
    pub num_lanes: u32,
    /// km/h
    pub speed_limit: f64,
    /// junctions per segment
    pub junction_density: u32,
}

/// Read-only source of road segments handed to the scoring callers.
pub trait SegmentRepository: Send + Sync + fmt::Debug {
    fn segments(&self) -> Result<Vec<RoadSegment>, AppError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySegmentRepository {
    segments: Vec<RoadSegment>,
}

impl InMemorySegmentRepository {
    pub fn new(segments: Vec<RoadSegment>) -> Self {
        Self { segments }
    }

    /// The ten built-in Bangalore segments.
    pub fn sample() -> Self {
        Self::new(sample::sample_segments())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SegmentLoadError> {
        let contents = std::fs::read_to_string(path)?;
        let segments: Vec<RoadSegment> = serde_json::from_str(&contents)?;
        validate_segments(&segments)?;
        Ok(Self::new(segments))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl SegmentRepository for InMemorySegmentRepository {
    fn segments(&self) -> Result<Vec<RoadSegment>, AppError> {
        Ok(self.segments.clone())
    }
}

#[derive(Debug, Error)]
pub enum SegmentLoadError {
    #[error("failed to read segment file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse segment file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid segment data: {0}")]
    Invalid(String),
}

pub fn validate_segments(segments: &[RoadSegment]) -> Result<(), SegmentLoadError> {
    let mut seen = HashSet::with_capacity(segments.len());
    for segment in segments {
        if segment.road_id.trim().is_empty() {
            return Err(SegmentLoadError::Invalid("empty road_id".to_string()));
        }
        if !seen.insert(segment.road_id.as_str()) {
            return Err(SegmentLoadError::Invalid(format!(
                "duplicate road_id: {}",
                segment.road_id
            )));
        }
        if segment.num_lanes == 0 {
            return Err(SegmentLoadError::Invalid(format!(
                "{}: num_lanes must be at least 1",
                segment.road_id
            )));
        }
        let numerics = [
            segment.curve_radius,
            segment.road_slope,
            segment.speed_limit,
        ];
        if numerics.iter().any(|value| !value.is_finite()) {
            return Err(SegmentLoadError::Invalid(format!(
                "{}: non-finite road attribute",
                segment.road_id
            )));
        }
    }
    Ok(())
}
