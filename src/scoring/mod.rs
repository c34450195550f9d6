pub mod color;
pub mod factors;
pub mod features;
pub mod model;
pub mod rules;
pub mod sanitize;

pub use color::risk_color;
pub use factors::{Recommendation, RiskFactor};
pub use model::{RiskLevel, RiskModel, RiskPrediction};
pub use rules::RuleBasedModel;
