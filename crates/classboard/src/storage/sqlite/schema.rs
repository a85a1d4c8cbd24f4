//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.
//!
//! Timestamps are assigned by the store as RFC 3339 strings with
//! millisecond precision.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Classes table
CREATE TABLE IF NOT EXISTS class (
    class_id TEXT PRIMARY KEY,
    class_name TEXT NOT NULL,
    teacher_id TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

-- Class notices table
CREATE TABLE IF NOT EXISTS class_notice (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    class_id TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT
);

-- Users table
CREATE TABLE IF NOT EXISTS users (
    user_id TEXT PRIMARY KEY,
    user_name TEXT NOT NULL,
    user_role TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_class_notice_class_created
    ON class_notice(class_id, created_at DESC, id DESC);
"#;

// Class queries
pub const INSERT_CLASS: &str = r#"
INSERT INTO class (class_id, class_name, teacher_id)
VALUES (?1, ?2, ?3)
RETURNING class_id, class_name, teacher_id, created_at
"#;

pub const SELECT_CLASS_BY_ID: &str = r#"
SELECT class_id, class_name, teacher_id, created_at
FROM class
WHERE class_id = ?1
"#;

pub const SELECT_CLASS_PAGE: &str = r#"
SELECT class_id, class_name, teacher_id, created_at
FROM class
ORDER BY rowid ASC
LIMIT ?1 OFFSET ?2
"#;

pub const COUNT_CLASSES: &str = r#"
SELECT COUNT(*) FROM class
"#;

// Class notice queries
pub const INSERT_CLASS_NOTICE: &str = r#"
INSERT INTO class_notice (class_id, message)
VALUES (?1, ?2)
RETURNING id, class_id, message, created_at, updated_at
"#;

pub const SELECT_CLASS_NOTICE_PAGE: &str = r#"
SELECT id, class_id, message, created_at, updated_at
FROM class_notice
WHERE class_id = ?1
ORDER BY created_at DESC, id DESC
LIMIT ?2 OFFSET ?3
"#;

pub const COUNT_CLASS_NOTICES: &str = r#"
SELECT COUNT(*) FROM class_notice
WHERE class_id = ?1
"#;

pub const UPDATE_CLASS_NOTICE: &str = r#"
UPDATE class_notice
SET message = ?3, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
WHERE class_id = ?1 AND id = ?2
RETURNING id, class_id, message, created_at, updated_at
"#;

pub const DELETE_CLASS_NOTICE: &str = r#"
DELETE FROM class_notice
WHERE class_id = ?1 AND id = ?2
RETURNING id, class_id, message, created_at, updated_at
"#;

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (user_id, user_name, user_role)
VALUES (?1, ?2, ?3)
RETURNING user_id, user_name, user_role, created_at
"#;
