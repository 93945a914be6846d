use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const TOPIC_TITLE_MAX_LEN: usize = 72;

/// Per-user flag on a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicAction {
    Liked,
    Bookmarked,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown topic action: {0}")]
pub struct UnknownTopicAction(pub String);

impl TopicAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicAction::Liked => "liked",
            TopicAction::Bookmarked => "bookmarked",
        }
    }
}

impl FromStr for TopicAction {
    type Err = UnknownTopicAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "liked" => Ok(TopicAction::Liked),
            "bookmarked" => Ok(TopicAction::Bookmarked),
            other => Err(UnknownTopicAction(other.to_string())),
        }
    }
}

/// The (topic, user) relation row. Created on first interaction and never
/// deleted; clearing a flag sets it back to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicUserRelation {
    pub topic_id: Uuid,
    pub user_id: UserId,
    pub liked_at: Option<DateTime<Utc>>,
    pub bookmarked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TopicUserRelation {
    /// In-memory row for a user who never interacted with the topic.
    pub fn stub(topic_id: Uuid, user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            topic_id,
            user_id,
            liked_at: None,
            bookmarked_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn flag(&self, action: TopicAction) -> Option<DateTime<Utc>> {
        match action {
            TopicAction::Liked => self.liked_at,
            TopicAction::Bookmarked => self.bookmarked_at,
        }
    }

    pub fn is_set(&self, action: TopicAction) -> bool {
        self.flag(action).is_some()
    }

    fn set_flag(&mut self, action: TopicAction, value: Option<DateTime<Utc>>) {
        match action {
            TopicAction::Liked => self.liked_at = value,
            TopicAction::Bookmarked => self.bookmarked_at = value,
        }
    }
}

/// Result of applying one toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub relation: TopicUserRelation,
    /// Next value of the topic's counter for the toggled action.
    pub count: i64,
    /// The relation row does not exist yet and must be inserted.
    pub is_new: bool,
}

/// Derives the next relation state and the topic counter from the row as it
/// was read and the count of flagged rows taken before the write.
///
/// Setting an already-set flag keeps its original timestamp; the counter is
/// `pre_count - was_set + state`, floored at zero.
pub fn toggle(
    existing: Option<TopicUserRelation>,
    topic_id: Uuid,
    user_id: UserId,
    action: TopicAction,
    state: bool,
    pre_count: i64,
    now: DateTime<Utc>,
) -> ToggleOutcome {
    let is_new = existing.is_none();
    let mut relation = existing.unwrap_or_else(|| TopicUserRelation::stub(topic_id, user_id, now));

    let was_set = relation.is_set(action);
    let next_flag = match (state, relation.flag(action)) {
        (true, Some(at)) => Some(at),
        (true, None) => Some(now),
        (false, _) => None,
    };
    relation.set_flag(action, next_flag);
    relation.updated_at = now;

    let count = (pre_count - i64::from(was_set) + i64::from(state)).max(0);

    ToggleOutcome {
        relation,
        count,
        is_new,
    }
}

/// Counters recomputed from source rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopicCounters {
    pub comments_count: i64,
    pub likes_count: i64,
    pub bookmarks_count: i64,
}
