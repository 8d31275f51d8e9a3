#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use folio_core::types::Date;
use folio_db::models::category::{Category, CreateCategory};
use folio_db::models::contact::{Contact, CreateContact};
use folio_db::models::image::{CreateImage, Image};
use folio_db::models::info::{CreateInfo, Info};
use folio_db::models::project::{CreateProject, Project};
use folio_db::models::service::{CreateService, Service};
use folio_db::repositories::{
    CategoryRepo, ContactRepo, ImageRepo, InfoRepo, ProjectRepo, ServiceRepo,
};
use folio_web::app::build_router;
use folio_web::config::ServerConfig;
use folio_web::state::AppState;

/// A 2x1 GIF.
pub const SMALL_GIF: &[u8] = b"\x47\x49\x46\x38\x39\x61\x02\x00\
    \x01\x00\x80\x00\x00\x00\x00\x00\
    \xFF\xFF\xFF\x21\xF9\x04\x00\x00\
    \x00\x00\x00\x2C\x00\x00\x00\x00\
    \x02\x00\x01\x00\x00\x02\x02\x0C\
    \x0A\x00\x3B";

/// Build a test `ServerConfig` with safe defaults and SMTP disabled.
pub fn test_config(media_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        media_root,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        email: None,
    }
}

/// App state with SMTP disabled, serving media from `media_root`.
pub fn test_state(pool: PgPool, media_root: PathBuf) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config(media_root)),
        notifier: None,
    }
}

/// Build the full application router, including middleware, serving media
/// from `media_root`.
pub fn build_test_app_with_media(pool: PgPool, media_root: PathBuf) -> Router {
    build_router(test_state(pool, media_root))
}

pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media(pool, std::env::temp_dir())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// One record of each content type, mirroring a freshly seeded site.
pub struct Seeded {
    pub category: Category,
    pub project: Project,
    pub image: Image,
    pub service: Service,
    pub info: Info,
    pub contact: Contact,
}

pub async fn seed_site(pool: &PgPool) -> Seeded {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            title: "Заголовок категории".to_string(),
        },
    )
    .await
    .unwrap();

    let project = ProjectRepo::create(
        pool,
        &CreateProject {
            title: "Project".to_string(),
            category_id: category.id,
            area: "Область".to_string(),
            date: Date::from_ymd_opt(2024, 3, 1).unwrap(),
            description: "Тестовое описание проекта".to_string(),
        },
    )
    .await
    .unwrap();

    let image = ImageRepo::create(
        pool,
        &CreateImage {
            project_id: project.id,
            image: "portfolio/images/projects/small.gif".to_string(),
        },
    )
    .await
    .unwrap();

    let service = ServiceRepo::create(
        pool,
        &CreateService {
            title: "Услуга".to_string(),
            description: "Тестовое описание услуги".to_string(),
            price: "от 100 рублей".to_string(),
        },
    )
    .await
    .unwrap();

    let info = InfoRepo::create(
        pool,
        &CreateInfo {
            description: "Тестовое описание архитектора".to_string(),
            image: "portfolio/images/info/small.gif".to_string(),
        },
    )
    .await
    .unwrap();

    let contact = ContactRepo::create(
        pool,
        &CreateContact {
            telephone: 89991112233,
            email: "email@yandex.ru".to_string(),
            description: "Описание контакта".to_string(),
        },
    )
    .await
    .unwrap();

    Seeded {
        category,
        project,
        image,
        service,
        info,
        contact,
    }
}
