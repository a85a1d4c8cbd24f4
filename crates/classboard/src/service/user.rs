//! User registration service.

use std::sync::Arc;

use classboard_core::classroom::{DomainError, NewUser, Result, User, UserRole};
use classboard_core::storage::UserRepository;

/// Registers teachers and students. Users are never cached.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_teacher_user(&self, new_user: NewUser) -> Result<User> {
        self.create_user(new_user, UserRole::Teacher).await
    }

    pub async fn create_student_user(&self, new_user: NewUser) -> Result<User> {
        self.create_user(new_user, UserRole::Student).await
    }

    async fn create_user(&self, new_user: NewUser, role: UserRole) -> Result<User> {
        let user = self
            .repository
            .create_user(&new_user.user_id, &new_user.user_name, role)
            .await
            .map_err(|err| {
                tracing::error!(
                    user_id = %new_user.user_id,
                    role = role.as_str(),
                    error = %err,
                    "Failed to create user"
                );
                DomainError::UserCreationFailed
            })?;

        tracing::debug!(user_id = %user.user_id, role = role.as_str(), "User created");
        Ok(user)
    }
}
