//! Integration tests for loading JSON fixtures.

mod common;

use assert_matches::assert_matches;
use common::SMALL_GIF;
use folio_core::media::LocalStorage;
use folio_db::repositories::{
    BlogRepo, CategoryRepo, ContactRepo, ImageRepo, InfoRepo, ProjectRepo, ServiceRepo,
};
use folio_web::fixtures::{load_fixture, FixtureError, FixtureSummary};
use sqlx::PgPool;

const SITE_FIXTURE: &str = r#"{
    "categories": [
        { "key": "houses", "title": "Дома" },
        { "key": "interiors", "title": "Интерьеры" }
    ],
    "projects": [
        {
            "title": "Дом у озера", "category": "houses", "area": "120 м2",
            "date": "2024-05-01", "description": "Каркасный дом",
            "images": ["img/small.gif", "img/small.gif"]
        },
        {
            "title": "Квартира", "category": "interiors", "area": "60 м2",
            "date": "2024-02-10", "description": "Ремонт"
        }
    ],
    "services": [{ "title": "Услуга", "description": "Проект дома", "price": "от 100 рублей" }],
    "info": [{ "description": "Архитектор", "image": "img/small.gif" }],
    "contacts": [{ "telephone": 89991112233, "email": "email@yandex.ru", "description": "Звоните" }],
    "blogs": [{ "title": "Запись", "description": "Текст", "image": "img/small.gif", "date": "2024-06-01" }]
}"#;

/// Write `json` and a sample image into a fresh fixture directory.
fn fixture_dir(json: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("img")).unwrap();
    std::fs::write(dir.path().join("img/small.gif"), SMALL_GIF).unwrap();
    std::fs::write(dir.path().join("site.json"), json).unwrap();
    dir
}

#[sqlx::test(migrations = "../db/migrations")]
async fn full_fixture_is_loaded(pool: PgPool) {
    let fixtures = fixture_dir(SITE_FIXTURE);
    let media = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(media.path());

    let summary = load_fixture(&pool, &storage, &fixtures.path().join("site.json"))
        .await
        .unwrap();

    assert_eq!(
        summary,
        FixtureSummary {
            categories: 2,
            projects: 2,
            images: 2,
            services: 1,
            info: 1,
            contacts: 1,
            blogs: 1,
        }
    );

    let projects = ProjectRepo::list_with_category(&pool).await.unwrap();
    assert_eq!(projects[0].title, "Дом у озера");
    assert_eq!(projects[0].category.title, "Дома");
    assert_eq!(projects[1].category.title, "Интерьеры");

    let images = ImageRepo::list_by_project(&pool, projects[0].id).await.unwrap();
    assert_eq!(images.len(), 2);
    assert_ne!(images[0].image, images[1].image);
    for image in &images {
        assert!(image.image.starts_with("portfolio/images/projects/"));
        assert_eq!(std::fs::read(media.path().join(&image.image)).unwrap(), SMALL_GIF);
    }

    let info = InfoRepo::list(&pool).await.unwrap();
    assert_eq!(info[0].image, "portfolio/images/info/small.gif");
    let blogs = BlogRepo::list(&pool).await.unwrap();
    assert_eq!(blogs[0].image, "portfolio/images/blogs/small.gif");
    assert_eq!(ServiceRepo::list(&pool).await.unwrap()[0].price, "от 100 рублей");
    assert_eq!(ContactRepo::list(&pool).await.unwrap()[0].telephone, 89991112233);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_category_rolls_back_everything(pool: PgPool) {
    let fixtures = fixture_dir(
        r#"{
            "categories": [{ "key": "houses", "title": "Дома" }],
            "projects": [{
                "title": "Баня", "category": "saunas", "area": "20",
                "date": "2024-01-01", "description": "-"
            }]
        }"#,
    );
    let media = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(media.path());

    let result = load_fixture(&pool, &storage, &fixtures.path().join("site.json")).await;

    assert_matches!(
        result,
        Err(FixtureError::UnknownCategory { key, .. }) if key == "saunas"
    );
    assert!(CategoryRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_image_aborts_the_load(pool: PgPool) {
    let fixtures = fixture_dir(
        r#"{
            "services": [{ "title": "Услуга", "description": "-", "price": "1" }],
            "info": [{ "description": "Архитектор", "image": "img/absent.gif" }]
        }"#,
    );
    let media = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(media.path());

    let result = load_fixture(&pool, &storage, &fixtures.path().join("site.json")).await;

    assert_matches!(result, Err(FixtureError::Read { .. }));
    assert!(ServiceRepo::list(&pool).await.unwrap().is_empty());
    assert!(InfoRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_image_file_is_rejected(pool: PgPool) {
    let fixtures = fixture_dir(
        r#"{ "blogs": [{ "title": "A", "description": "-", "image": "site.json", "date": "2024-01-01" }] }"#,
    );
    let media = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(media.path());

    let result = load_fixture(&pool, &storage, &fixtures.path().join("site.json")).await;

    assert_matches!(result, Err(FixtureError::Storage(_)));
    assert!(BlogRepo::list(&pool).await.unwrap().is_empty());
}
