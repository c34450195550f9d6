use crate::road::{InMemorySegmentRepository, SegmentRepository};
use crate::scoring::{RiskModel, RuleBasedModel};
use std::sync::Arc;

/// Read-only collaborators shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    repository: Arc<dyn SegmentRepository>,
    model: Arc<dyn RiskModel>,
}

impl AppState {
    pub fn new(repository: Arc<dyn SegmentRepository>, model: Arc<dyn RiskModel>) -> Self {
        Self { repository, model }
    }

    pub fn repository(&self) -> &dyn SegmentRepository {
        self.repository.as_ref()
    }

    pub fn model(&self) -> &dyn RiskModel {
        self.model.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(InMemorySegmentRepository::sample()),
            Arc::new(RuleBasedModel::new()),
        )
    }
}
