//! HTTP Routes
//!
//! API Endpoints:
//! - /                  GET     空响应
//! - /campers           GET     营员列表
//! - /campers           POST    创建营员
//! - /campers/:id       GET     营员详情（报名 + 活动）
//! - /campers/:id       PATCH   部分更新营员
//! - /activities        GET     活动列表
//! - /activities/:id    DELETE  删除活动（级联删除报名）
//! - /signups           POST    创建报名

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home))
        .merge(camper_routes())
        .merge(activity_routes())
        .route("/signups", post(handlers::create_signup))
}

/// Camper 路由
fn camper_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/campers",
            get(handlers::list_campers).post(handlers::create_camper),
        )
        .route(
            "/campers/:id",
            get(handlers::get_camper).patch(handlers::update_camper),
        )
}

/// Activity 路由
fn activity_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(handlers::list_activities))
        .route("/activities/:id", delete(handlers::delete_activity))
}
