//! Data access layer: one zero-sized repository per table.
//!
//! Reads take `&PgPool`. Inserts accept any `PgExecutor` so the fixture
//! loader can run them inside a single transaction.

pub mod blog_repo;
pub mod category_repo;
pub mod contact_repo;
pub mod image_repo;
pub mod info_repo;
pub mod mail_repo;
pub mod project_repo;
pub mod service_repo;

pub use blog_repo::BlogRepo;
pub use category_repo::CategoryRepo;
pub use contact_repo::ContactRepo;
pub use image_repo::ImageRepo;
pub use info_repo::InfoRepo;
pub use mail_repo::MailRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
