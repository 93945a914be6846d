mod create_topic;
mod delete_topic;
mod get_topic;
mod recompute_topic_counters;
mod topic_action;

pub use create_topic::{__path_create_topic_handler, create_topic_handler, CreateTopicRequest};
pub use delete_topic::delete_topic_handler;
pub use get_topic::{__path_get_topic_handler, get_topic_handler};
pub use recompute_topic_counters::recompute_topic_counters_handler;
pub use topic_action::{
    __path_clear_topic_action_handler, __path_set_topic_action_handler, clear_topic_action_handler,
    set_topic_action_handler,
};
