mod create_topic;
mod delete_topic;
mod get_topic;
mod recompute_topic_counters;
mod topic_action;

pub use create_topic::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
};
pub use delete_topic::{DeleteTopicError, DeleteTopicUseCase};
pub use get_topic::{GetTopicError, GetTopicUseCase};
pub use recompute_topic_counters::{RecomputeTopicCountersError, RecomputeTopicCountersUseCase};
pub use topic_action::{TopicActionCommand, TopicActionError, TopicActionUseCase};
