use chrono::Utc;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    category::application::ports::outgoing::CategoryResult,
    comment::application::ports::outgoing::CommentResult,
    topic::application::ports::outgoing::TopicResult,
};

pub fn category_result(name: &str) -> CategoryResult {
    let now = Utc::now();
    CategoryResult {
        id: Uuid::new_v4(),
        name: name.to_string(),
        alias: name.to_lowercase(),
        description: String::new(),
        topics_count: 0,
        last_topic_id: None,
        position: 1,
        created_at: now,
        updated_at: now,
    }
}

pub fn topic_result(owner: UserId) -> TopicResult {
    let now = Utc::now();
    TopicResult {
        id: Uuid::new_v4(),
        title: "Borrow checker questions".to_string(),
        body: "Why does this not compile?".to_string(),
        category_id: Uuid::new_v4(),
        user_id: owner,
        comments_count: 0,
        likes_count: 0,
        bookmarks_count: 0,
        is_liked_by: false,
        is_bookmarked_by: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn comment_result(owner: UserId, topic_id: Uuid) -> CommentResult {
    let now = Utc::now();
    CommentResult {
        id: Uuid::new_v4(),
        body: "Try cloning the Arc first.".to_string(),
        topic_id,
        user_id: owner,
        score: 0,
        created_at: now,
        updated_at: now,
    }
}
