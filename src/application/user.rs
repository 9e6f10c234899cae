use crate::domain::ports::{EmailServiceBox, UserRepositoryBox};
use crate::domain::user::{User, UserRequest};
use crate::error::{CapabilityError, Result};
use serde::Serialize;
use tracing::{debug, info};

pub const WELCOME_MESSAGE: &str = "Welcome to our app";
pub const USER_CREATED_MESSAGE: &str = "User created successfully";

/// Creates users and persists them. Nothing else.
pub struct UserService {
    repository: UserRepositoryBox,
}

impl UserService {
    pub fn new(repository: UserRepositoryBox) -> Self {
        Self { repository }
    }

    /// Validates the request, rejects already registered emails and saves the new user.
    pub async fn create_user(&self, request: &UserRequest) -> Result<User> {
        let user = User::create(request)?;

        if self.repository.find_by_email(&user.email).await?.is_some() {
            return Err(CapabilityError::Conflict(format!(
                "A user with email '{}' already exists",
                user.email
            )));
        }

        self.repository.save(user.clone()).await?;
        debug!(email = %user.email, "user saved");
        Ok(user)
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        self.repository.all().await
    }
}

/// Sends user-facing notifications through whichever email service it was given.
pub struct UserNotificationService {
    email_service: EmailServiceBox,
}

impl UserNotificationService {
    pub fn new(email_service: EmailServiceBox) -> Self {
        Self { email_service }
    }

    pub async fn send_welcome_email(&self, user: &User) -> Result<()> {
        self.email_service.send(&user.email, WELCOME_MESSAGE).await
    }
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: String,
    pub user: User,
}

/// Coordinates user creation and the welcome email, then shapes the response.
pub struct UserController {
    user_service: UserService,
    notification_service: UserNotificationService,
}

impl UserController {
    pub fn new(user_service: UserService, notification_service: UserNotificationService) -> Self {
        Self {
            user_service,
            notification_service,
        }
    }

    /// Creates the user and sends the welcome email.
    ///
    /// The user stays saved when the email fails; the delivery error is returned.
    pub async fn create_user(&self, request: &UserRequest) -> Result<CreateUserResponse> {
        let user = self.user_service.create_user(request).await?;
        self.notification_service.send_welcome_email(&user).await?;
        info!(email = %user.email, "user created");

        Ok(CreateUserResponse {
            message: USER_CREATED_MESSAGE.to_string(),
            user,
        })
    }

    pub fn user_service(&self) -> &UserService {
        &self.user_service
    }
}
