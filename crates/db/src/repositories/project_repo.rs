//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::project::{CreateProject, Project, ProjectListing, ProjectListingRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, category_id, area, date, description";

/// Projects joined with their category. Callers append `WHERE`/`ORDER BY`.
const LISTING_SELECT: &str = "SELECT p.id, p.title, p.category_id, c.title AS category_title, \
        p.area, p.date, p.description \
     FROM projects p \
     JOIN categories c ON c.id = p.category_id";

/// Provides insert and read operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateProject) -> Result<Project, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO projects (title, category_id, area, date, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(input.category_id)
            .bind(&input.area)
            .bind(input.date)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    /// Find a project by ID together with its category.
    pub async fn find_listing_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE p.id = $1");
        let row = sqlx::query_as::<_, ProjectListingRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ProjectListing::from))
    }

    /// List all projects with their categories, in creation order.
    pub async fn list_with_category(pool: &PgPool) -> Result<Vec<ProjectListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} ORDER BY p.id");
        let rows = sqlx::query_as::<_, ProjectListingRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProjectListing::from).collect())
    }
}
