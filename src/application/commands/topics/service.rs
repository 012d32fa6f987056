use std::sync::Arc;

use crate::domain::topic::TopicRepository;

pub struct TopicCommandService {
    pub(super) topic_repo: Arc<dyn TopicRepository>,
}

impl TopicCommandService {
    pub fn new(topic_repo: Arc<dyn TopicRepository>) -> Self {
        Self { topic_repo }
    }
}
