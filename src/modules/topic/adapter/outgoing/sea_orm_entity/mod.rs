pub mod topic_users;
pub mod topics;
