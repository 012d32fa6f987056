mod get_by_username;
mod list;
mod service;

pub use get_by_username::GetUserQuery;
pub use service::UserQueryService;
