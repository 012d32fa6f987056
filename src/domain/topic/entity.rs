use crate::domain::topic::value_objects::{TopicDescription, TopicSlug};

#[derive(Debug, Clone)]
pub struct Topic {
    pub slug: TopicSlug,
    pub description: TopicDescription,
}

pub type NewTopic = Topic;
