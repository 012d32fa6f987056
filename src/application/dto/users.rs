use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            username: user.username.into_inner(),
            name: user.name,
            avatar_url: user.avatar_url,
        }
    }
}
