use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct GetUserQuery {
    pub username: String,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let username = Username::new(query.username)?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user {username} not found")))?;
        Ok(user.into())
    }
}
