//! SQLite Activity Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{db_error, CamperRow, DbPool};
use crate::application::ports::{
    ActivityRecord, ActivityRepositoryPort, CamperRecord, RepositoryError,
};
use crate::domain::Activity;

/// SQLite Activity Repository
pub struct SqliteActivityRepository {
    pool: DbPool,
}

impl SqliteActivityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(super) struct ActivityRow {
    id: i64,
    name: Option<String>,
    difficulty: Option<i64>,
}

impl From<ActivityRow> for ActivityRecord {
    fn from(row: ActivityRow) -> Self {
        ActivityRecord {
            id: row.id,
            name: row.name,
            difficulty: row.difficulty,
        }
    }
}

#[async_trait]
impl ActivityRepositoryPort for SqliteActivityRepository {
    async fn insert(&self, activity: &Activity) -> Result<ActivityRecord, RepositoryError> {
        let result = sqlx::query("INSERT INTO activities (name, difficulty) VALUES (?, ?)")
            .bind(activity.name())
            .bind(activity.difficulty())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(ActivityRecord {
            id: result.last_insert_rowid(),
            name: activity.name().map(str::to_string),
            difficulty: activity.difficulty(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ActivityRecord>, RepositoryError> {
        let row: Option<ActivityRow> =
            sqlx::query_as("SELECT id, name, difficulty FROM activities WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(row.map(ActivityRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<ActivityRecord>, RepositoryError> {
        let rows: Vec<ActivityRow> =
            sqlx::query_as("SELECT id, name, difficulty FROM activities ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(rows.into_iter().map(ActivityRecord::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        // 使用事务确保原子性
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        // 删除关联的 signups
        let removed = sqlx::query("DELETE FROM signups WHERE activity_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        // 删除 activity
        let result = sqlx::query("DELETE FROM activities WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        tracing::debug!(
            activity_id = id,
            signups_removed = removed.rows_affected(),
            "Activity delete committed"
        );

        Ok(result.rows_affected() > 0)
    }

    async fn find_campers(&self, activity_id: i64) -> Result<Vec<CamperRecord>, RepositoryError> {
        let rows: Vec<CamperRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.name, c.age
            FROM signups s
            JOIN campers c ON c.id = s.camper_id
            WHERE s.activity_id = ?
            ORDER BY s.id
            "#,
        )
        .bind(activity_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(CamperRecord::from).collect())
    }
}
