use crate::road::{Geometry, LatLng, RoadSegment};

#[allow(clippy::too_many_arguments)]
fn segment(
    road_id: &str,
    lat: f64,
    lng: f64,
    curve_radius: f64,
    road_slope: f64,
    num_lanes: u32,
    speed_limit: f64,
    junction_density: u32,
) -> RoadSegment {
    RoadSegment {
        road_id: road_id.to_string(),
        geometry: Geometry::Point(LatLng::new(lat, lng)),
        curve_radius,
        road_slope,
        num_lanes,
        speed_limit,
        junction_density,
    }
}

/// Demo corridor around Bangalore used when no segment file is configured.
pub fn sample_segments() -> Vec<RoadSegment> {
    vec![
        segment("NH48_101", 12.9716, 77.5946, 35.0, 12.0, 2, 80.0, 4),
        segment("NH48_102", 12.9656, 77.6046, 120.0, 3.0, 4, 60.0, 2),
        segment("NH48_103", 12.9786, 77.5846, 25.0, 15.0, 2, 100.0, 5),
        segment("MG_ROAD_01", 12.9756, 77.6106, 200.0, 2.0, 6, 50.0, 6),
        segment("OUTER_RING_01", 12.9516, 77.6446, 80.0, 5.0, 4, 80.0, 3),
        segment("OUTER_RING_02", 12.9616, 77.6346, 45.0, 8.0, 4, 70.0, 4),
        segment("SARJAPUR_01", 12.9116, 77.6846, 60.0, 6.0, 2, 60.0, 5),
        segment("WHITEFIELD_01", 12.9696, 77.7496, 100.0, 4.0, 4, 60.0, 3),
        segment("ELECTRONIC_CITY_01", 12.8396, 77.6776, 150.0, 2.0, 6, 80.0, 2),
        segment("HEBBAL_FLY_01", 13.0356, 77.5946, 40.0, 10.0, 4, 60.0, 4),
    ]
}
