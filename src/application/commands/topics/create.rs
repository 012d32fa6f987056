use super::TopicCommandService;
use crate::{
    application::{
        dto::TopicDto,
        error::{ApplicationResult, required},
    },
    domain::topic::{NewTopic, TopicDescription, TopicSlug},
};

pub struct CreateTopicCommand {
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl TopicCommandService {
    pub async fn create_topic(&self, command: CreateTopicCommand) -> ApplicationResult<TopicDto> {
        let topic = NewTopic {
            slug: TopicSlug::new(required(command.slug, "slug")?)?,
            description: TopicDescription::new(required(command.description, "description")?)?,
        };
        let created = self.topic_repo.insert(topic).await?;
        tracing::info!(slug = %created.slug, "topic created");
        Ok(created.into())
    }
}
