use async_trait::async_trait;

use crate::classroom::{Class, ClassList, ClassNotice, ClassNoticeList, User, UserRole};

use super::{PageRequest, Result};

/// Durable store for classes and their notices.
///
/// Every write runs in its own transaction: it commits on success and rolls
/// back before returning an error. Reads never open a write transaction.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// Inserts a class and returns the persisted row, including `created_at`.
    async fn create_class(
        &self,
        class_id: &str,
        class_name: &str,
        teacher_id: &str,
    ) -> Result<Class>;

    /// Gets one page of classes in insertion order.
    async fn read_class_list(&self, page: PageRequest) -> Result<ClassList>;

    /// Gets a class by its id.
    async fn read_class(&self, class_id: &str) -> Result<Option<Class>>;

    /// Inserts a notice under `class_id`. The class is not checked for existence.
    async fn create_class_notice(&self, class_id: &str, message: &str) -> Result<ClassNotice>;

    /// Gets one page of notices for a class, most recently created first.
    async fn read_class_notice_list(
        &self,
        class_id: &str,
        page: PageRequest,
    ) -> Result<ClassNoticeList>;

    /// Replaces the message of the notice matching both `class_id` and
    /// `notice_id` and stamps `updated_at`. Returns `None` if no row matched.
    async fn update_class_notice(
        &self,
        class_id: &str,
        notice_id: i64,
        message: &str,
    ) -> Result<Option<ClassNotice>>;

    /// Deletes the notice matching both keys and returns its prior values,
    /// or `None` if no row matched.
    async fn delete_class_notice(&self, class_id: &str, notice_id: i64)
        -> Result<Option<ClassNotice>>;
}

/// Durable store for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user with the given role and returns the persisted row.
    async fn create_user(&self, user_id: &str, user_name: &str, role: UserRole) -> Result<User>;
}
