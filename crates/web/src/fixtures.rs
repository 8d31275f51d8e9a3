//! JSON data fixtures for seeding site content.
//!
//! Everything except visitor mail is entered through fixtures:
//!
//! ```json
//! {
//!   "categories": [{ "key": "houses", "title": "Houses" }],
//!   "projects": [{
//!     "title": "Lake house", "category": "houses", "area": "120 m2",
//!     "date": "2024-05-01", "description": "...",
//!     "images": ["img/lake-1.jpg"]
//!   }],
//!   "services": [{ "title": "Design", "description": "...", "price": "from 100" }],
//!   "info": [{ "description": "...", "image": "img/me.jpg" }],
//!   "contacts": [{ "telephone": 89991112233, "email": "me@example.com", "description": "..." }],
//!   "blogs": [{ "title": "...", "description": "...", "image": "img/post.png", "date": "2024-06-01" }]
//! }
//! ```
//!
//! Image entries are paths relative to the fixture file. All rows go in one
//! transaction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use folio_core::media::{FileStorage, StorageError, BLOG_IMAGES, INFO_IMAGES, PROJECT_IMAGES};
use folio_core::types::{Date, DbId};
use folio_db::models::blog::CreateBlog;
use folio_db::models::category::CreateCategory;
use folio_db::models::contact::CreateContact;
use folio_db::models::image::CreateImage;
use folio_db::models::info::CreateInfo;
use folio_db::models::project::CreateProject;
use folio_db::models::service::CreateService;
use folio_db::repositories::{
    BlogRepo, CategoryRepo, ContactRepo, ImageRepo, InfoRepo, ProjectRepo, ServiceRepo,
};
use folio_db::DbPool;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid fixture JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Project '{project}' refers to unknown category '{key}'")]
    UnknownCategory { project: String, key: String },

    #[error("Duplicate category key '{0}'")]
    DuplicateCategory(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fixture {
    pub categories: Vec<CategoryFixture>,
    pub projects: Vec<ProjectFixture>,
    pub services: Vec<CreateService>,
    pub info: Vec<InfoFixture>,
    pub contacts: Vec<CreateContact>,
    pub blogs: Vec<BlogFixture>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Fixture-local name that projects use to refer to this category.
    pub key: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ProjectFixture {
    pub title: String,
    /// A [`CategoryFixture::key`].
    pub category: String,
    pub area: String,
    pub date: Date,
    pub description: String,
    #[serde(default)]
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct InfoFixture {
    pub description: String,
    pub image: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct BlogFixture {
    pub title: String,
    pub description: String,
    pub image: PathBuf,
    pub date: Date,
}

impl Fixture {
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Row counts inserted by one load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSummary {
    pub categories: usize,
    pub projects: usize,
    pub images: usize,
    pub services: usize,
    pub info: usize,
    pub contacts: usize,
    pub blogs: usize,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read the fixture at `path` and insert its records.
pub async fn load_fixture(
    pool: &DbPool,
    storage: &dyn FileStorage,
    path: &Path,
) -> Result<FixtureSummary, FixtureError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let fixture = Fixture::from_json(&json)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

    apply_fixture(pool, storage, &fixture, base_dir).await
}

/// Insert `fixture`, resolving image paths against `base_dir`.
///
/// Nothing is committed unless every record and image succeeds. Files
/// already copied into storage by a failed load are left in place.
pub async fn apply_fixture(
    pool: &DbPool,
    storage: &dyn FileStorage,
    fixture: &Fixture,
    base_dir: &Path,
) -> Result<FixtureSummary, FixtureError> {
    let mut summary = FixtureSummary::default();
    let mut tx = pool.begin().await?;

    let mut category_ids: HashMap<&str, DbId> = HashMap::new();
    for category in &fixture.categories {
        if category_ids.contains_key(category.key.as_str()) {
            return Err(FixtureError::DuplicateCategory(category.key.clone()));
        }
        let row = CategoryRepo::create(
            &mut *tx,
            &CreateCategory {
                title: category.title.clone(),
            },
        )
        .await?;
        category_ids.insert(&category.key, row.id);
        summary.categories += 1;
    }

    for project in &fixture.projects {
        let category_id = *category_ids.get(project.category.as_str()).ok_or_else(|| {
            FixtureError::UnknownCategory {
                project: project.title.clone(),
                key: project.category.clone(),
            }
        })?;

        let row = ProjectRepo::create(
            &mut *tx,
            &CreateProject {
                title: project.title.clone(),
                category_id,
                area: project.area.clone(),
                date: project.date,
                description: project.description.clone(),
            },
        )
        .await?;
        summary.projects += 1;

        for image in &project.images {
            let stored = copy_image(storage, base_dir, image, PROJECT_IMAGES).await?;
            ImageRepo::create(
                &mut *tx,
                &CreateImage {
                    project_id: row.id,
                    image: stored,
                },
            )
            .await?;
            summary.images += 1;
        }
    }

    for service in &fixture.services {
        ServiceRepo::create(&mut *tx, service).await?;
        summary.services += 1;
    }

    for info in &fixture.info {
        let image = copy_image(storage, base_dir, &info.image, INFO_IMAGES).await?;
        InfoRepo::create(
            &mut *tx,
            &CreateInfo {
                description: info.description.clone(),
                image,
            },
        )
        .await?;
        summary.info += 1;
    }

    for contact in &fixture.contacts {
        ContactRepo::create(&mut *tx, contact).await?;
        summary.contacts += 1;
    }

    for blog in &fixture.blogs {
        let image = copy_image(storage, base_dir, &blog.image, BLOG_IMAGES).await?;
        BlogRepo::create(
            &mut *tx,
            &CreateBlog {
                title: blog.title.clone(),
                description: blog.description.clone(),
                image,
                date: blog.date,
            },
        )
        .await?;
        summary.blogs += 1;
    }

    tx.commit().await?;
    tracing::info!(?summary, "Fixture loaded");
    Ok(summary)
}

/// Copy one fixture image into storage and return its media-relative path.
async fn copy_image(
    storage: &dyn FileStorage,
    base_dir: &Path,
    image: &Path,
    upload_to: &str,
) -> Result<String, FixtureError> {
    let source = base_dir.join(image);
    let bytes = tokio::fs::read(&source)
        .await
        .map_err(|e| FixtureError::Read {
            path: source.clone(),
            source: e,
        })?;
    let file_name = image
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StorageError::InvalidPath(image.display().to_string()))?;

    Ok(storage.save(upload_to, file_name, &bytes).await?)
}
