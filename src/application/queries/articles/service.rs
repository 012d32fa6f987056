use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository, comment::CommentRepository, topic::TopicRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) topic_repo: Arc<dyn TopicRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        topic_repo: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            topic_repo,
        }
    }
}
