//! SQLite Signup Repository

use async_trait::async_trait;
use sqlx::{Executor, FromRow, Sqlite};

use super::{db_error, DbPool};
use crate::application::ports::{
    ActivityRecord, RepositoryError, SignupActivityRecord, SignupRecord, SignupRepositoryPort,
};
use crate::domain::Signup;

/// SQLite Signup Repository
pub struct SqliteSignupRepository {
    pool: DbPool,
}

impl SqliteSignupRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct SignupRow {
    id: i64,
    time: i64,
    camper_id: i64,
    activity_id: i64,
}

impl From<SignupRow> for SignupRecord {
    fn from(row: SignupRow) -> Self {
        SignupRecord {
            id: row.id,
            time: row.time,
            camper_id: row.camper_id,
            activity_id: row.activity_id,
        }
    }
}

#[derive(FromRow)]
struct SignupActivityRow {
    id: i64,
    time: i64,
    camper_id: i64,
    activity_id: i64,
    activity_name: Option<String>,
    activity_difficulty: Option<i64>,
}

impl From<SignupActivityRow> for SignupActivityRecord {
    fn from(row: SignupActivityRow) -> Self {
        SignupActivityRecord {
            signup: SignupRecord {
                id: row.id,
                time: row.time,
                camper_id: row.camper_id,
                activity_id: row.activity_id,
            },
            activity: ActivityRecord {
                id: row.activity_id,
                name: row.activity_name,
                difficulty: row.activity_difficulty,
            },
        }
    }
}

#[async_trait]
impl SignupRepositoryPort for SqliteSignupRepository {
    async fn insert(&self, signup: &Signup) -> Result<SignupRecord, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO signups (time, camper_id, activity_id) VALUES (?, ?, ?)")
                .bind(signup.time().value())
                .bind(signup.camper_id().value())
                .bind(signup.activity_id().value())
                .execute(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(SignupRecord {
            id: result.last_insert_rowid(),
            time: signup.time().value(),
            camper_id: signup.camper_id().value(),
            activity_id: signup.activity_id().value(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SignupRecord>, RepositoryError> {
        let row: Option<SignupRow> =
            sqlx::query_as("SELECT id, time, camper_id, activity_id FROM signups WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(row.map(SignupRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<SignupRecord>, RepositoryError> {
        let rows: Vec<SignupRow> =
            sqlx::query_as("SELECT id, time, camper_id, activity_id FROM signups ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(rows.into_iter().map(SignupRecord::from).collect())
    }
}

/// 营员的全部报名及对应活动，按报名 ID 排序
///
/// 接受任意执行器，营员详情在自己的事务里调用
pub(super) async fn fetch_signups_with_activity<'e, E>(
    executor: E,
    camper_id: i64,
) -> Result<Vec<SignupActivityRecord>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows: Vec<SignupActivityRow> = sqlx::query_as(
        r#"
        SELECT s.id, s.time, s.camper_id, s.activity_id,
               a.name AS activity_name, a.difficulty AS activity_difficulty
        FROM signups s
        JOIN activities a ON a.id = s.activity_id
        WHERE s.camper_id = ?
        ORDER BY s.id
        "#,
    )
    .bind(camper_id)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(SignupActivityRecord::from).collect())
}
