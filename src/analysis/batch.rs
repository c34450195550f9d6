use crate::conditions::{ClimateConditions, PredictionInput, TimeConditions};
use crate::road::RoadSegment;
use crate::scoring::{RiskModel, RiskPrediction};

#[derive(Debug, Clone, PartialEq)]
pub struct AssessedSegment {
    pub segment: RoadSegment,
    pub prediction: RiskPrediction,
}

/// Score every segment under one set of conditions. Output order matches input order.
pub fn assess_segments(
    model: &dyn RiskModel,
    segments: &[RoadSegment],
    climate: &ClimateConditions,
    time: TimeConditions,
) -> Vec<AssessedSegment> {
    segments
        .iter()
        .map(|segment| {
            let input = PredictionInput::new(segment.clone(), climate.clone(), time);
            AssessedSegment {
                segment: segment.clone(),
                prediction: model.predict(&input),
            }
        })
        .collect()
}
