// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::AuthSessionDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginUserCommand {
    pub email: Option<String>,
    pub password: Option<String>,
}

fn invalid_credentials() -> ApplicationError {
    ApplicationError::unauthorized("Invalid credentials")
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<AuthSessionDto> {
        let (Some(email), Some(password)) = (
            command.email.filter(|e| !e.trim().is_empty()),
            command.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(ApplicationError::validation(
                "Please provide email and password",
            ));
        };

        let user = self.find_and_authenticate_user(&email, &password).await?;
        self.issue_session(user).await
    }

    async fn find_and_authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<User> {
        // A malformed address can never match a stored one.
        let email = Email::new(email).map_err(|_| invalid_credentials())?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid_credentials)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => invalid_credentials(),
                other => other,
            })?;

        Ok(user)
    }
}
