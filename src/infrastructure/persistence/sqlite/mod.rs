//! SQLite Persistence - SQLite 数据库持久化实现

mod activity_repo;
mod camper_repo;
mod database;
mod signup_repo;

use activity_repo::ActivityRow;
use camper_repo::CamperRow;
use signup_repo::fetch_signups_with_activity;

pub use activity_repo::SqliteActivityRepository;
pub use camper_repo::SqliteCamperRepository;
pub use database::{clear_all_data, create_pool, run_migrations, DatabaseConfig, DbPool};
pub use signup_repo::SqliteSignupRepository;

pub(crate) use database::db_error;
#[cfg(test)]
pub(crate) use database::test_pool;
