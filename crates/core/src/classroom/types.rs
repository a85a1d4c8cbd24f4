use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::Page;

/// A class taught by a teacher.
///
/// The `class_id` is chosen by the caller before the class is persisted and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub class_id: String,
    pub class_name: String,
    /// Opaque reference to the teaching user. Not checked by the store.
    pub teacher_id: String,
    pub created_at: DateTime<Utc>,
}

impl Class {
    /// Creates a class stamped with the current time.
    pub fn new(
        class_id: impl Into<String>,
        class_name: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            class_name: class_name.into(),
            teacher_id: teacher_id.into(),
            created_at: Utc::now(),
        }
    }

    /// Sets a specific creation timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// A notice posted to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassNotice {
    /// Store-assigned identifier.
    pub id: i64,
    pub class_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// `None` until the notice is first updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl ClassNotice {
    /// Creates a notice that has never been updated.
    pub fn new(id: i64, class_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            class_id: class_id.into(),
            message: message.into(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Sets a specific creation timestamp (useful for testing).
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the last update timestamp.
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }
}

/// One page of classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList {
    pub data: Vec<Class>,
    pub page: Page,
}

/// One page of notices for a single class, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNoticeList {
    pub data: Vec<ClassNotice>,
    pub page: Page,
}

impl ClassNoticeList {
    /// Returns true if the page holds no notices.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Role a user plays in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Teacher,
    Student,
}

impl UserRole {
    /// Returns the string stored in the database for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Teacher => "TEACHER",
            UserRole::Student => "STUDENT",
        }
    }

    /// Parses a stored role string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TEACHER" => Some(UserRole::Teacher),
            "STUDENT" => Some(UserRole::Student),
            _ => None,
        }
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub user_name: String,
    pub user_role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user stamped with the current time.
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            user_role: role,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_class_serializes_camel_case() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let class = Class::new("abc", "Algo101", "t1").with_created_at(created_at);

        let json = serde_json::to_value(&class).unwrap();

        assert_eq!(json["classId"], "abc");
        assert_eq!(json["className"], "Algo101");
        assert_eq!(json["teacherId"], "t1");
        assert_eq!(json["createdAt"], "2024-03-01T09:00:00Z");
    }

    #[test]
    fn test_new_notice_has_no_updated_at() {
        let notice = ClassNotice::new(7, "abc", "hw1");

        assert_eq!(notice.id, 7);
        assert!(notice.updated_at.is_none());

        let json = serde_json::to_value(&notice).unwrap();
        assert!(json["updatedAt"].is_null());
    }

    #[test]
    fn test_user_role_round_trips_through_storage_string() {
        for role in [UserRole::Teacher, UserRole::Student] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("ADMIN"), None);
    }

    #[test]
    fn test_user_role_serializes_uppercase() {
        let user = User::new("u1", "kim", UserRole::Teacher);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["userRole"], "TEACHER");
        assert_eq!(json["userName"], "kim");
    }
}
