pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTopic, Topic};
pub use repository::TopicRepository;
pub use value_objects::{TopicDescription, TopicSlug};
