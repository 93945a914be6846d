use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Actor, UserId};
use crate::category::application::ports::{
    incoming::use_cases::{
        CreateCategoryCommand, CreateCategoryError, CreateCategoryUseCase, EmitCategoryError,
        EmitCategoryUseCase, GetCategoriesError, GetCategoriesUseCase, UpdateCategoryCommand,
        UpdateCategoryError, UpdateCategoryUseCase,
    },
    outgoing::CategoryResult,
};
use crate::comment::application::ports::{
    incoming::use_cases::{
        CreateCommentCommand, CreateCommentError, CreateCommentUseCase, DeleteCommentError,
        DeleteCommentUseCase, GetCommentsError, GetCommentsUseCase, UpdateCommentCommand,
        UpdateCommentError, UpdateCommentUseCase,
    },
    outgoing::CommentResult,
};
use crate::statistic::application::{
    domain::entities::StatisticKind,
    ports::{
        incoming::use_cases::{GetStatisticsError, GetStatisticsUseCase, RecordStatisticUseCase},
        outgoing::StatisticResult,
    },
};
use crate::topic::application::ports::{
    incoming::use_cases::{
        CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
        DeleteTopicUseCase, GetTopicError, GetTopicUseCase, RecomputeTopicCountersError,
        RecomputeTopicCountersUseCase, TopicActionCommand, TopicActionError, TopicActionUseCase,
    },
    outgoing::TopicResult,
};

//
// ──────────────────────────────────────────────────────────
// Category
// ──────────────────────────────────────────────────────────
//

pub struct StubCreateCategoryUseCase(pub Result<CategoryResult, CreateCategoryError>);

#[async_trait]
impl CreateCategoryUseCase for StubCreateCategoryUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        _command: CreateCategoryCommand,
    ) -> Result<CategoryResult, CreateCategoryError> {
        self.0.clone()
    }
}

pub struct StubUpdateCategoryUseCase(pub Result<CategoryResult, UpdateCategoryError>);

#[async_trait]
impl UpdateCategoryUseCase for StubUpdateCategoryUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        _command: UpdateCategoryCommand,
    ) -> Result<CategoryResult, UpdateCategoryError> {
        self.0.clone()
    }
}

pub struct StubEmitCategoryUseCase(pub Result<CategoryResult, EmitCategoryError>);

#[async_trait]
impl EmitCategoryUseCase for StubEmitCategoryUseCase {
    async fn execute(&self, _category_id: Uuid) -> Result<CategoryResult, EmitCategoryError> {
        self.0.clone()
    }
}

/// Serves a fixed listing; `find` looks the id up in it.
pub struct StubGetCategoriesUseCase(pub Result<Vec<CategoryResult>, GetCategoriesError>);

impl StubGetCategoriesUseCase {
    pub fn listing(categories: Vec<CategoryResult>) -> Self {
        Self(Ok(categories))
    }

    pub fn failure(msg: &str) -> Self {
        Self(Err(GetCategoriesError::QueryFailed(msg.to_string())))
    }
}

#[async_trait]
impl GetCategoriesUseCase for StubGetCategoriesUseCase {
    async fn list(&self) -> Result<Vec<CategoryResult>, GetCategoriesError> {
        self.0.clone()
    }

    async fn find(&self, key: &str) -> Result<Option<CategoryResult>, GetCategoriesError> {
        let categories = self.0.clone()?;
        Ok(categories
            .into_iter()
            .find(|c| c.id.to_string() == key || c.name == key))
    }
}

//
// ──────────────────────────────────────────────────────────
// Topic
// ──────────────────────────────────────────────────────────
//

pub struct StubCreateTopicUseCase(pub Result<TopicResult, CreateTopicError>);

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError> {
        self.0.clone()
    }
}

/// Remembers the viewer of the last read.
#[derive(Clone)]
pub struct StubGetTopicUseCase {
    topic: Option<TopicResult>,
    viewer: Arc<Mutex<Option<UserId>>>,
}

impl StubGetTopicUseCase {
    pub fn found(topic: TopicResult) -> Self {
        Self {
            topic: Some(topic),
            viewer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn missing() -> Self {
        Self {
            topic: None,
            viewer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_viewer(&self) -> Option<UserId> {
        *self.viewer.lock().unwrap()
    }
}

#[async_trait]
impl GetTopicUseCase for StubGetTopicUseCase {
    async fn execute(
        &self,
        _topic_id: &str,
        viewer: Option<UserId>,
    ) -> Result<Option<TopicResult>, GetTopicError> {
        *self.viewer.lock().unwrap() = viewer;
        Ok(self.topic.clone())
    }
}

pub struct StubDeleteTopicUseCase(pub Result<(), DeleteTopicError>);

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _actor: Actor, _topic_id: Uuid) -> Result<(), DeleteTopicError> {
        self.0.clone()
    }
}

/// Remembers the state of the last action it was asked to apply.
#[derive(Clone)]
pub struct StubTopicActionUseCase {
    result: Result<TopicResult, TopicActionError>,
    state: Arc<Mutex<Option<bool>>>,
}

impl StubTopicActionUseCase {
    pub fn returning(topic: TopicResult) -> Self {
        Self {
            result: Ok(topic),
            state: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(err: TopicActionError) -> Self {
        Self {
            result: Err(err),
            state: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_state(&self) -> Option<bool> {
        *self.state.lock().unwrap()
    }
}

#[async_trait]
impl TopicActionUseCase for StubTopicActionUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        command: TopicActionCommand,
    ) -> Result<TopicResult, TopicActionError> {
        *self.state.lock().unwrap() = Some(command.state());
        self.result.clone()
    }
}

pub struct StubRecomputeTopicCountersUseCase(
    pub Result<TopicResult, RecomputeTopicCountersError>,
);

#[async_trait]
impl RecomputeTopicCountersUseCase for StubRecomputeTopicCountersUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        _topic_id: Uuid,
    ) -> Result<TopicResult, RecomputeTopicCountersError> {
        self.0.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Comment
// ──────────────────────────────────────────────────────────
//

pub struct StubCreateCommentUseCase(pub Result<CommentResult, CreateCommentError>);

#[async_trait]
impl CreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(
        &self,
        _command: CreateCommentCommand,
    ) -> Result<CommentResult, CreateCommentError> {
        self.0.clone()
    }
}

pub struct StubUpdateCommentUseCase(pub Result<CommentResult, UpdateCommentError>);

#[async_trait]
impl UpdateCommentUseCase for StubUpdateCommentUseCase {
    async fn execute(
        &self,
        _actor: Actor,
        _command: UpdateCommentCommand,
    ) -> Result<CommentResult, UpdateCommentError> {
        self.0.clone()
    }
}

pub struct StubDeleteCommentUseCase(pub Result<(), DeleteCommentError>);

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(&self, _actor: Actor, _comment_id: Uuid) -> Result<(), DeleteCommentError> {
        self.0.clone()
    }
}

/// Serves the same page for topic and user reads and remembers the last
/// offset it was given.
#[derive(Clone)]
pub struct StubGetCommentsUseCase {
    result: Result<Vec<CommentResult>, GetCommentsError>,
    offset: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl StubGetCommentsUseCase {
    pub fn page(comments: Vec<CommentResult>) -> Self {
        Self {
            result: Ok(comments),
            offset: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetCommentsError::QueryFailed(msg.to_string())),
            offset: Arc::new(Mutex::new(None)),
        }
    }

    pub fn last_offset(&self) -> Option<DateTime<Utc>> {
        *self.offset.lock().unwrap()
    }
}

#[async_trait]
impl GetCommentsUseCase for StubGetCommentsUseCase {
    async fn by_topic(
        &self,
        _topic_id: &str,
        offset: Option<DateTime<Utc>>,
    ) -> Result<Vec<CommentResult>, GetCommentsError> {
        *self.offset.lock().unwrap() = offset;
        self.result.clone()
    }

    async fn by_user(
        &self,
        _user_id: &str,
        offset: Option<DateTime<Utc>>,
    ) -> Result<Vec<CommentResult>, GetCommentsError> {
        *self.offset.lock().unwrap() = offset;
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Statistic
// ──────────────────────────────────────────────────────────
//

pub struct StubGetStatisticsUseCase(pub Result<Vec<StatisticResult>, GetStatisticsError>);

impl StubGetStatisticsUseCase {
    pub fn rows(rows: Vec<(&str, i64)>) -> Self {
        let now = Utc::now();
        Self(Ok(rows
            .into_iter()
            .map(|(name, count)| StatisticResult {
                name: name.to_string(),
                count,
                created_at: now,
                updated_at: now,
            })
            .collect()))
    }

    pub fn failure(msg: &str) -> Self {
        Self(Err(GetStatisticsError::QueryFailed(msg.to_string())))
    }
}

#[async_trait]
impl GetStatisticsUseCase for StubGetStatisticsUseCase {
    async fn execute(&self) -> Result<Vec<StatisticResult>, GetStatisticsError> {
        self.0.clone()
    }
}

pub struct NoopRecordStatistic;

impl RecordStatisticUseCase for NoopRecordStatistic {
    fn record(&self, _kind: StatisticKind) {}
}
