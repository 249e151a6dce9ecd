//! camp-seed：清空数据库并写入一组固定的开发数据
//!
//! 与服务器读取同一份配置（环境变量 > 配置文件 > 默认值）

use anyhow::Context;

use camp_signup::application::{
    ActivityRepositoryPort, CamperRepositoryPort, SignupRepositoryPort,
};
use camp_signup::config::load_config;
use camp_signup::domain::{Activity, ActivityId, Camper, CamperId, Signup};
use camp_signup::infrastructure::persistence::sqlite::{
    clear_all_data, create_pool, run_migrations, DatabaseConfig, SqliteActivityRepository,
    SqliteCamperRepository, SqliteSignupRepository,
};

const CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Nicholas", 12),
    ("Ashley", 11),
    ("Ryan", 15),
    ("Dominic", 10),
    ("Brianna", 17),
    ("Jasmine", 13),
];

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Swimming in the lake", 1),
    ("Hiking by the stream", 3),
    ("Mountain biking", 4),
    ("Canoeing", 3),
    ("Rock climbing", 5),
];

/// (营员下标, 活动下标, 时刻)
const SIGNUPS: &[(usize, usize, i64)] = &[
    (0, 0, 9),
    (0, 1, 14),
    (1, 2, 10),
    (2, 3, 8),
    (2, 5, 16),
    (3, 1, 11),
    (4, 5, 13),
    (5, 4, 15),
    (6, 2, 7),
    (7, 0, 20),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_config().context("Failed to load config")?;
    if config.database.uses_file_path() {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    let pool = create_pool(&DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    })
    .await?;
    run_migrations(&pool).await?;

    tracing::info!("Clearing db...");
    clear_all_data(&pool).await?;

    let camper_repo = SqliteCamperRepository::new(pool.clone());
    let activity_repo = SqliteActivityRepository::new(pool.clone());
    let signup_repo = SqliteSignupRepository::new(pool.clone());

    tracing::info!("Seeding campers...");
    let mut camper_ids = Vec::with_capacity(CAMPERS.len());
    for (name, age) in CAMPERS {
        let camper = Camper::new(Some(name.to_string()), Some(*age))?;
        camper_ids.push(camper_repo.insert(&camper).await?.id);
    }

    tracing::info!("Seeding activities...");
    let mut activity_ids = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        let activity = Activity::new(Some(name.to_string()), Some(*difficulty));
        activity_ids.push(activity_repo.insert(&activity).await?.id);
    }

    tracing::info!("Seeding signups...");
    for &(camper, activity, time) in SIGNUPS {
        let signup = Signup::new(
            Some(time),
            CamperId::new(camper_ids[camper]),
            ActivityId::new(activity_ids[activity]),
        )?;
        signup_repo.insert(&signup).await?;
    }

    tracing::info!(
        campers = camper_ids.len(),
        activities = activity_ids.len(),
        signups = SIGNUPS.len(),
        "Done seeding!"
    );

    pool.close().await;
    Ok(())
}
