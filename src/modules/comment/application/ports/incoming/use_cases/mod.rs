mod create_comment;
mod delete_comment;
mod get_comments;
mod update_comment;

pub use create_comment::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase};
pub use delete_comment::{DeleteCommentError, DeleteCommentUseCase};
pub use get_comments::{GetCommentsError, GetCommentsUseCase};
pub use update_comment::{UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase};
