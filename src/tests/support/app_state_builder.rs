use actix_web::web;
use std::sync::Arc;

use crate::category::application::{
    category_use_cases::CategoryUseCases,
    ports::incoming::use_cases::{
        CreateCategoryError, CreateCategoryUseCase, EmitCategoryError, EmitCategoryUseCase,
        GetCategoriesUseCase, UpdateCategoryError, UpdateCategoryUseCase,
    },
};
use crate::comment::application::{
    comment_use_cases::CommentUseCases,
    ports::incoming::use_cases::{
        CreateCommentError, CreateCommentUseCase, DeleteCommentError, DeleteCommentUseCase,
        GetCommentsUseCase, UpdateCommentError, UpdateCommentUseCase,
    },
};
use crate::statistic::application::{
    ports::incoming::use_cases::GetStatisticsUseCase, statistic_use_cases::StatisticUseCases,
};
use crate::tests::support::stubs::*;
use crate::topic::application::{
    ports::incoming::use_cases::{
        CreateTopicError, CreateTopicUseCase, DeleteTopicError, DeleteTopicUseCase,
        GetTopicUseCase, RecomputeTopicCountersError, RecomputeTopicCountersUseCase,
        TopicActionError, TopicActionUseCase,
    },
    topic_use_cases::TopicUseCases,
};
use crate::AppState;

const UNUSED: &str = "not used in this test";

/// Every use case defaults to a stub that fails; tests swap in the ones
/// they exercise.
pub struct TestAppStateBuilder {
    category: CategoryUseCases,
    topic: TopicUseCases,
    comment: CommentUseCases,
    statistic: StatisticUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            category: CategoryUseCases {
                create: Arc::new(StubCreateCategoryUseCase(Err(
                    CreateCategoryError::TransactionError(UNUSED.into()),
                ))),
                update: Arc::new(StubUpdateCategoryUseCase(Err(
                    UpdateCategoryError::TransactionError(UNUSED.into()),
                ))),
                emit: Arc::new(StubEmitCategoryUseCase(Err(
                    EmitCategoryError::TransactionError(UNUSED.into()),
                ))),
                get: Arc::new(StubGetCategoriesUseCase::failure(UNUSED)),
            },
            topic: TopicUseCases {
                create: Arc::new(StubCreateTopicUseCase(Err(
                    CreateTopicError::RepositoryError(UNUSED.into()),
                ))),
                get: Arc::new(StubGetTopicUseCase::missing()),
                delete: Arc::new(StubDeleteTopicUseCase(Err(DeleteTopicError::DatabaseError(
                    UNUSED.into(),
                )))),
                action: Arc::new(StubTopicActionUseCase::failing(
                    TopicActionError::TransactionError(UNUSED.into()),
                )),
                recompute: Arc::new(StubRecomputeTopicCountersUseCase(Err(
                    RecomputeTopicCountersError::TransactionError(UNUSED.into()),
                ))),
            },
            comment: CommentUseCases {
                create: Arc::new(StubCreateCommentUseCase(Err(
                    CreateCommentError::TransactionError(UNUSED.into()),
                ))),
                update: Arc::new(StubUpdateCommentUseCase(Err(
                    UpdateCommentError::TransactionError(UNUSED.into()),
                ))),
                delete: Arc::new(StubDeleteCommentUseCase(Err(
                    DeleteCommentError::TransactionError(UNUSED.into()),
                ))),
                get: Arc::new(StubGetCommentsUseCase::failure(UNUSED)),
            },
            statistic: StatisticUseCases {
                record: Arc::new(NoopRecordStatistic),
                get: Arc::new(StubGetStatisticsUseCase::failure(UNUSED)),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_category(mut self, uc: impl CreateCategoryUseCase + 'static) -> Self {
        self.category.create = Arc::new(uc);
        self
    }

    pub fn with_update_category(mut self, uc: impl UpdateCategoryUseCase + 'static) -> Self {
        self.category.update = Arc::new(uc);
        self
    }

    pub fn with_emit_category(mut self, uc: impl EmitCategoryUseCase + 'static) -> Self {
        self.category.emit = Arc::new(uc);
        self
    }

    pub fn with_get_categories(mut self, uc: impl GetCategoriesUseCase + 'static) -> Self {
        self.category.get = Arc::new(uc);
        self
    }

    pub fn with_create_topic(mut self, uc: impl CreateTopicUseCase + 'static) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + 'static) -> Self {
        self.topic.get = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(mut self, uc: impl DeleteTopicUseCase + 'static) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    pub fn with_topic_action(mut self, uc: impl TopicActionUseCase + 'static) -> Self {
        self.topic.action = Arc::new(uc);
        self
    }

    pub fn with_recompute_topic_counters(
        mut self,
        uc: impl RecomputeTopicCountersUseCase + 'static,
    ) -> Self {
        self.topic.recompute = Arc::new(uc);
        self
    }

    pub fn with_create_comment(mut self, uc: impl CreateCommentUseCase + 'static) -> Self {
        self.comment.create = Arc::new(uc);
        self
    }

    pub fn with_update_comment(mut self, uc: impl UpdateCommentUseCase + 'static) -> Self {
        self.comment.update = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(mut self, uc: impl DeleteCommentUseCase + 'static) -> Self {
        self.comment.delete = Arc::new(uc);
        self
    }

    pub fn with_get_comments(mut self, uc: impl GetCommentsUseCase + 'static) -> Self {
        self.comment.get = Arc::new(uc);
        self
    }

    pub fn with_get_statistics(mut self, uc: impl GetStatisticsUseCase + 'static) -> Self {
        self.statistic.get = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            category: self.category,
            topic: self.topic,
            comment: self.comment,
            statistic: self.statistic,
        })
    }
}
