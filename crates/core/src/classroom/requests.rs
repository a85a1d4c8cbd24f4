//! Request payloads and the commands built from them.
//!
//! The `*Request` types are the JSON bodies accepted at the HTTP boundary.
//! The commands (`NewClass`, `NewClassNotice`, `ClassNoticeUpdate`,
//! `NewUser`) are what the services consume. Pure data, no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a caller-side identifier: a v4 UUID rendered as 32 hex digits.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Request payload for creating a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    pub class_name: String,
    pub teacher_id: String,
}

impl CreateClassRequest {
    /// Converts the request into a command with a freshly generated class id.
    pub fn into_new_class(self) -> NewClass {
        NewClass {
            class_id: generate_id(),
            class_name: self.class_name,
            teacher_id: self.teacher_id,
        }
    }
}

/// Request payload for creating or updating a class notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassNoticeRequest {
    pub message: String,
}

impl ClassNoticeRequest {
    /// Builds a create command scoped to `class_id`.
    pub fn into_new_notice(self, class_id: impl Into<String>) -> NewClassNotice {
        NewClassNotice {
            class_id: class_id.into(),
            message: self.message,
        }
    }

    /// Builds an update command scoped to `(class_id, notice_id)`.
    pub fn into_update(self, class_id: impl Into<String>, notice_id: i64) -> ClassNoticeUpdate {
        ClassNoticeUpdate {
            class_id: class_id.into(),
            notice_id,
            message: self.message,
        }
    }
}

/// Request payload for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub user_name: String,
}

impl CreateUserRequest {
    /// Converts the request into a command with a freshly generated user id.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            user_id: generate_id(),
            user_name: self.user_name,
        }
    }
}

/// Command: persist a class whose id was already chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    pub class_id: String,
    pub class_name: String,
    pub teacher_id: String,
}

/// Command: post a notice to a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassNotice {
    pub class_id: String,
    pub message: String,
}

/// Command: replace the message of the notice matching both keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNoticeUpdate {
    pub class_id: String,
    pub notice_id: i64,
    pub message: String,
}

/// Command: register a user whose id was already chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub user_id: String,
    pub user_name: String,
}
