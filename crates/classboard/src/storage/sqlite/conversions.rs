//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without the async connection.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use classboard_core::classroom::{Class, ClassNotice, User, UserRole};

/// Convert a SQLite row to a Class.
///
/// Expected columns: class_id, class_name, teacher_id, created_at
pub fn row_to_class(row: &Row) -> rusqlite::Result<Class> {
    let class_id: String = row.get(0)?;
    let class_name: String = row.get(1)?;
    let teacher_id: String = row.get(2)?;
    let created_at: String = row.get(3)?;

    Ok(Class {
        class_id,
        class_name,
        teacher_id,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Convert a SQLite row to a ClassNotice.
///
/// Expected columns: id, class_id, message, created_at, updated_at
pub fn row_to_class_notice(row: &Row) -> rusqlite::Result<ClassNotice> {
    let id: i64 = row.get(0)?;
    let class_id: String = row.get(1)?;
    let message: String = row.get(2)?;
    let created_at: String = row.get(3)?;
    let updated_at: Option<String> = row.get(4)?;

    Ok(ClassNotice {
        id,
        class_id,
        message,
        created_at: parse_datetime(&created_at)?,
        updated_at: updated_at.as_deref().map(parse_datetime).transpose()?,
    })
}

/// Convert a SQLite row to a User.
///
/// Expected columns: user_id, user_name, user_role, created_at
pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    let user_id: String = row.get(0)?;
    let user_name: String = row.get(1)?;
    let user_role: String = row.get(2)?;
    let created_at: String = row.get(3)?;

    Ok(User {
        user_id,
        user_name,
        user_role: parse_role(&user_role)?,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Parse UserRole from its stored string.
fn parse_role(s: &str) -> rusqlite::Result<UserRole> {
    UserRole::parse(s).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid user role: {s}"),
            )),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rusqlite::Connection;

    #[test]
    fn test_parse_datetime_with_milliseconds() {
        let dt = parse_datetime("2024-06-15T09:30:00.250Z").unwrap();

        assert_eq!(
            dt,
            Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
                + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("TEACHER").unwrap(), UserRole::Teacher);
        assert_eq!(parse_role("STUDENT").unwrap(), UserRole::Student);
        assert!(parse_role("teacher").is_err());
    }

    #[test]
    fn test_row_to_class() {
        let conn = Connection::open_in_memory().unwrap();

        let class = conn
            .query_row(
                "SELECT 'c1', 'Algo101', 't1', '2024-06-15T09:30:00.000Z'",
                [],
                row_to_class,
            )
            .unwrap();

        assert_eq!(class.class_id, "c1");
        assert_eq!(class.class_name, "Algo101");
        assert_eq!(class.teacher_id, "t1");
        assert_eq!(
            class.created_at,
            Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_row_to_class_notice_with_null_updated_at() {
        let conn = Connection::open_in_memory().unwrap();

        let notice = conn
            .query_row(
                "SELECT 3, 'c1', 'hw1', '2024-06-15T09:30:00.000Z', NULL",
                [],
                row_to_class_notice,
            )
            .unwrap();

        assert_eq!(notice.id, 3);
        assert_eq!(notice.message, "hw1");
        assert!(notice.updated_at.is_none());
    }

    #[test]
    fn test_row_to_class_notice_with_updated_at() {
        let conn = Connection::open_in_memory().unwrap();

        let notice = conn
            .query_row(
                "SELECT 3, 'c1', 'hw1', '2024-06-15T09:30:00.000Z', '2024-06-16T10:00:00.000Z'",
                [],
                row_to_class_notice,
            )
            .unwrap();

        assert_eq!(
            notice.updated_at,
            Some(Utc.with_ymd_and_hms(2024, 6, 16, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_row_to_user_rejects_unknown_role() {
        let conn = Connection::open_in_memory().unwrap();

        let result = conn.query_row(
            "SELECT 'u1', 'kim', 'ADMIN', '2024-06-15T09:30:00.000Z'",
            [],
            row_to_user,
        );

        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(..))
        ));
    }
}
