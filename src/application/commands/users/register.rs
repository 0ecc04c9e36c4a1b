// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::AuthSessionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, UserId, Username},
};

pub struct RegisterUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<AuthSessionDto> {
        let (Some(username), Some(email), Some(password)) =
            (command.username, command.email, command.password)
        else {
            return Err(ApplicationError::validation(
                "Please provide username, email and password",
            ));
        };

        let username = Username::new(username)?;
        let email = Email::new(email)?;
        validate_password(&password)?;

        let hashed = self.password_hasher.hash(&password).await?;
        let new_user = NewUser {
            id: UserId::generate(),
            username,
            email,
            password_hash: PasswordHash::new(hashed)?,
            created_at: self.clock.now(),
        };

        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");

        self.issue_session(user).await
    }
}
