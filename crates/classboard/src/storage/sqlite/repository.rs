//! SQLite repository implementation.
//!
//! Implements the repository traits from `classboard_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use classboard_core::classroom::{Class, ClassList, ClassNotice, ClassNoticeList, User, UserRole};
use classboard_core::storage::{
    ClassRepository, PageRequest, RepositoryError, Result, UserRepository,
};

use super::conversions::{row_to_class, row_to_class_notice, row_to_user};
use super::error::map_tokio_rusqlite_error;
use super::schema;
use super::transaction::in_transaction;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Maps `QueryReturnedNoRows` to `None`.
fn optional<T>(result: rusqlite::Result<T>) -> rusqlite::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

fn limit_and_offset(page: &PageRequest) -> (i64, i64) {
    let limit = i64::from(page.limit());
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for classes, notices and users.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// ClassRepository implementation
// ============================================================================

#[async_trait]
impl ClassRepository for SqliteRepository {
    async fn create_class(
        &self,
        class_id: &str,
        class_name: &str,
        teacher_id: &str,
    ) -> Result<Class> {
        let id = class_id.to_string();
        let name = class_name.to_string();
        let teacher = teacher_id.to_string();

        self.conn
            .call(move |conn| {
                in_transaction(conn, |tx| {
                    tx.query_row(
                        schema::INSERT_CLASS,
                        rusqlite::params![id, name, teacher],
                        row_to_class,
                    )
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Class", class_id))
    }

    async fn read_class_list(&self, page: PageRequest) -> Result<ClassList> {
        let (limit, offset) = limit_and_offset(&page);

        let (data, total) = self
            .conn
            .call(move |conn| {
                let total: i64 = conn
                    .query_row(schema::COUNT_CLASSES, [], |row| row.get(0))
                    .map_err(wrap_err)?;

                let mut stmt = conn.prepare(schema::SELECT_CLASS_PAGE).map_err(wrap_err)?;
                let rows = stmt
                    .query_map([limit, offset], row_to_class)
                    .map_err(wrap_err)?;

                let mut classes = Vec::new();
                for row_result in rows {
                    classes.push(row_result.map_err(wrap_err)?);
                }
                Ok((classes, total))
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(ClassList {
            data,
            page: page.with_total(u64::try_from(total).unwrap_or_default()),
        })
    }

    async fn read_class(&self, class_id: &str) -> Result<Option<Class>> {
        let id = class_id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_CLASS_BY_ID).map_err(wrap_err)?;
                optional(stmt.query_row([&id], row_to_class)).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Class", class_id))
    }

    async fn create_class_notice(&self, class_id: &str, message: &str) -> Result<ClassNotice> {
        let id = class_id.to_string();
        let message = message.to_string();

        self.conn
            .call(move |conn| {
                in_transaction(conn, |tx| {
                    tx.query_row(
                        schema::INSERT_CLASS_NOTICE,
                        rusqlite::params![id, message],
                        row_to_class_notice,
                    )
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ClassNotice", class_id))
    }

    async fn read_class_notice_list(
        &self,
        class_id: &str,
        page: PageRequest,
    ) -> Result<ClassNoticeList> {
        let id = class_id.to_string();
        let (limit, offset) = limit_and_offset(&page);

        let (data, total) = self
            .conn
            .call(move |conn| {
                let total: i64 = conn
                    .query_row(schema::COUNT_CLASS_NOTICES, [&id], |row| row.get(0))
                    .map_err(wrap_err)?;

                let mut stmt = conn
                    .prepare(schema::SELECT_CLASS_NOTICE_PAGE)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![id, limit, offset], row_to_class_notice)
                    .map_err(wrap_err)?;

                let mut notices = Vec::new();
                for row_result in rows {
                    notices.push(row_result.map_err(wrap_err)?);
                }
                Ok((notices, total))
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(ClassNoticeList {
            data,
            page: page.with_total(u64::try_from(total).unwrap_or_default()),
        })
    }

    async fn update_class_notice(
        &self,
        class_id: &str,
        notice_id: i64,
        message: &str,
    ) -> Result<Option<ClassNotice>> {
        let id = class_id.to_string();
        let message = message.to_string();

        self.conn
            .call(move |conn| {
                in_transaction(conn, |tx| {
                    optional(tx.query_row(
                        schema::UPDATE_CLASS_NOTICE,
                        rusqlite::params![id, notice_id, message],
                        row_to_class_notice,
                    ))
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ClassNotice", notice_id.to_string()))
    }

    async fn delete_class_notice(
        &self,
        class_id: &str,
        notice_id: i64,
    ) -> Result<Option<ClassNotice>> {
        let id = class_id.to_string();

        self.conn
            .call(move |conn| {
                in_transaction(conn, |tx| {
                    optional(tx.query_row(
                        schema::DELETE_CLASS_NOTICE,
                        rusqlite::params![id, notice_id],
                        row_to_class_notice,
                    ))
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "ClassNotice", notice_id.to_string()))
    }
}

// ============================================================================
// UserRepository implementation
// ============================================================================

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn create_user(&self, user_id: &str, user_name: &str, role: UserRole) -> Result<User> {
        let id = user_id.to_string();
        let name = user_name.to_string();

        self.conn
            .call(move |conn| {
                in_transaction(conn, |tx| {
                    tx.query_row(
                        schema::INSERT_USER,
                        rusqlite::params![id, name, role.as_str()],
                        row_to_user,
                    )
                })
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "User", user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repository() -> SqliteRepository {
        SqliteRepository::new_in_memory()
            .await
            .expect("in-memory database should open")
    }

    fn page(page: u32, limit: u32) -> PageRequest {
        PageRequest::new(page, limit).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_read_class() {
        let repo = repository().await;

        let created = repo.create_class("c1", "Algo101", "t1").await.unwrap();
        let read = repo.read_class("c1").await.unwrap();

        assert_eq!(created.class_name, "Algo101");
        assert_eq!(read, Some(created));
    }

    #[tokio::test]
    async fn test_read_missing_class_returns_none() {
        let repo = repository().await;

        assert_eq!(repo.read_class("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_class_id_is_rejected() {
        let repo = repository().await;
        repo.create_class("c1", "Algo101", "t1").await.unwrap();

        let result = repo.create_class("c1", "Other", "t2").await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Class",
                ..
            })
        ));
        assert_eq!(
            repo.read_class("c1").await.unwrap().unwrap().class_name,
            "Algo101"
        );
    }

    #[tokio::test]
    async fn test_class_list_pages_in_insertion_order() {
        let repo = repository().await;
        for id in ["a", "b", "c"] {
            repo.create_class(id, "name", "t1").await.unwrap();
        }

        let first = repo.read_class_list(page(1, 2)).await.unwrap();
        let second = repo.read_class_list(page(2, 2)).await.unwrap();

        let ids: Vec<_> = first.data.iter().map(|c| c.class_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(first.page.total, 3);
        assert_eq!(second.data.len(), 1);
        assert_eq!(second.data[0].class_id, "c");
    }

    #[tokio::test]
    async fn test_class_list_past_the_end_is_empty() {
        let repo = repository().await;
        repo.create_class("a", "name", "t1").await.unwrap();

        let list = repo.read_class_list(page(5, 10)).await.unwrap();

        assert!(list.data.is_empty());
        assert_eq!(list.page.total, 1);
    }

    #[tokio::test]
    async fn test_notices_are_listed_most_recent_first() {
        let repo = repository().await;
        let first = repo.create_class_notice("c1", "hw1").await.unwrap();
        let second = repo.create_class_notice("c1", "hw2").await.unwrap();
        repo.create_class_notice("c2", "other").await.unwrap();

        let list = repo
            .read_class_notice_list("c1", PageRequest::default())
            .await
            .unwrap();

        assert!(second.id > first.id);
        let ids: Vec<_> = list.data.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert_eq!(list.page.total, 2);
        assert!(list.data.iter().all(|n| n.updated_at.is_none()));
    }

    #[tokio::test]
    async fn test_notice_for_unknown_class_is_accepted() {
        let repo = repository().await;

        let notice = repo.create_class_notice("no-such-class", "hi").await.unwrap();

        assert_eq!(notice.class_id, "no-such-class");
    }

    #[tokio::test]
    async fn test_update_notice_sets_updated_at() {
        let repo = repository().await;
        let notice = repo.create_class_notice("c1", "hw1").await.unwrap();

        let updated = repo
            .update_class_notice("c1", notice.id, "hw1 (revised)")
            .await
            .unwrap()
            .expect("notice should exist");

        assert_eq!(updated.message, "hw1 (revised)");
        assert_eq!(updated.created_at, notice.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_notice_with_wrong_class_matches_nothing() {
        let repo = repository().await;
        let notice = repo.create_class_notice("c1", "hw1").await.unwrap();

        let result = repo
            .update_class_notice("c2", notice.id, "hijack")
            .await
            .unwrap();

        assert!(result.is_none());
        let list = repo
            .read_class_notice_list("c1", PageRequest::default())
            .await
            .unwrap();
        assert_eq!(list.data[0].message, "hw1");
    }

    #[tokio::test]
    async fn test_delete_notice_returns_prior_values() {
        let repo = repository().await;
        let notice = repo.create_class_notice("c1", "hw1").await.unwrap();

        let deleted = repo.delete_class_notice("c1", notice.id).await.unwrap();
        let again = repo.delete_class_notice("c1", notice.id).await.unwrap();

        assert_eq!(deleted, Some(notice));
        assert!(again.is_none());
        let list = repo
            .read_class_notice_list("c1", PageRequest::default())
            .await
            .unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_stores_role() {
        let repo = repository().await;

        let user = repo
            .create_user("u1", "kim", UserRole::Teacher)
            .await
            .unwrap();

        assert_eq!(user.user_id, "u1");
        assert_eq!(user.user_role, UserRole::Teacher);
    }

    #[tokio::test]
    async fn test_duplicate_user_is_rejected() {
        let repo = repository().await;
        repo.create_user("u1", "kim", UserRole::Student)
            .await
            .unwrap();

        let result = repo.create_user("u1", "lee", UserRole::Student).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                ..
            })
        ));
    }
}
