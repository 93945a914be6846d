mod topic_query;
mod topic_repository;
mod topic_user_repository;

pub use topic_query::{TopicQuery, TopicQueryError};
pub use topic_repository::{CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult};
pub use topic_user_repository::{TopicUserRepository, TopicUserRepositoryError};
