use std::sync::Arc;

use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicUseCase, RecomputeTopicCountersUseCase,
    TopicActionUseCase,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get: Arc<dyn GetTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
    pub action: Arc<dyn TopicActionUseCase + Send + Sync>,
    pub recompute: Arc<dyn RecomputeTopicCountersUseCase + Send + Sync>,
}
