mod service;

pub use service::TopicQueryService;
