mod create_topic_service;
mod delete_topic_service;
mod get_topic_service;
mod recompute_topic_counters_service;
mod topic_action_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use get_topic_service::GetTopicService;
pub use recompute_topic_counters_service::RecomputeTopicCountersService;
pub use topic_action_service::TopicActionService;
