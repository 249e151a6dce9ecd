//! SQLite Camper Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{db_error, fetch_signups_with_activity, ActivityRow, DbPool};
use crate::application::ports::{
    ActivityRecord, CamperDetail, CamperRecord, CamperRepositoryPort, RepositoryError,
};
use crate::domain::{Camper, CamperChanges};

/// SQLite Camper Repository
pub struct SqliteCamperRepository {
    pool: DbPool,
}

impl SqliteCamperRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(super) struct CamperRow {
    id: i64,
    name: String,
    age: i64,
}

impl From<CamperRow> for CamperRecord {
    fn from(row: CamperRow) -> Self {
        CamperRecord {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

#[async_trait]
impl CamperRepositoryPort for SqliteCamperRepository {
    async fn insert(&self, camper: &Camper) -> Result<CamperRecord, RepositoryError> {
        let result = sqlx::query("INSERT INTO campers (name, age) VALUES (?, ?)")
            .bind(camper.name().as_str())
            .bind(camper.age().value())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(CamperRecord {
            id: result.last_insert_rowid(),
            name: camper.name().to_string(),
            age: camper.age().value(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CamperRecord>, RepositoryError> {
        let row: Option<CamperRow> =
            sqlx::query_as("SELECT id, name, age FROM campers WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(row.map(CamperRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<CamperRecord>, RepositoryError> {
        let rows: Vec<CamperRow> = sqlx::query_as("SELECT id, name, age FROM campers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(CamperRecord::from).collect())
    }

    async fn find_with_signups(&self, id: i64) -> Result<Option<CamperDetail>, RepositoryError> {
        // 营员和报名在同一个读事务里取，保证是同一份快照
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let row: Option<CamperRow> =
            sqlx::query_as("SELECT id, name, age FROM campers WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error)?;

        let detail = match row {
            Some(row) => {
                let signups = fetch_signups_with_activity(&mut *tx, id)
                    .await
                    .map_err(db_error)?;
                Some(CamperDetail {
                    camper: row.into(),
                    signups,
                })
            }
            None => None,
        };

        tx.commit().await.map_err(db_error)?;

        Ok(detail)
    }

    async fn update_fields(
        &self,
        id: i64,
        changes: &CamperChanges,
    ) -> Result<Option<CamperRecord>, RepositoryError> {
        // 单条语句：未出现的列保持当前值，RETURNING 读回写入后的整行
        let row: Option<CamperRow> = sqlx::query_as(
            r#"
            UPDATE campers
            SET name = COALESCE(?, name), age = COALESCE(?, age)
            WHERE id = ?
            RETURNING id, name, age
            "#,
        )
        .bind(changes.name().map(|name| name.as_str()))
        .bind(changes.age().map(|age| age.value()))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(CamperRecord::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        // 使用事务确保原子性
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        // 删除关联的 signups
        sqlx::query("DELETE FROM signups WHERE camper_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        // 删除 camper
        let result = sqlx::query("DELETE FROM campers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_activities(&self, camper_id: i64) -> Result<Vec<ActivityRecord>, RepositoryError> {
        let rows: Vec<ActivityRow> = sqlx::query_as(
            r#"
            SELECT a.id, a.name, a.difficulty
            FROM signups s
            JOIN activities a ON a.id = s.activity_id
            WHERE s.camper_id = ?
            ORDER BY s.id
            "#,
        )
        .bind(camper_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(ActivityRecord::from).collect())
    }
}
