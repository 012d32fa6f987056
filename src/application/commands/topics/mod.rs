mod create;
mod service;

pub use create::CreateTopicCommand;
pub use service::TopicCommandService;
