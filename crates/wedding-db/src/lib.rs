//! # wedding-db
//!
//! Row store layer implementing the repository traits from `wedding-core`.
//!
//! ## Overview
//!
//! Two implementations are provided:
//!
//! - PostgreSQL via SQLx: connection pool, schema migration, `FromRow`
//!   models, entity mappers, and one repository per table
//! - [`MemoryStore`]: an in-process store used by tests and by
//!   `DATABASE_URL=memory://`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wedding_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use wedding_db::repositories::PgRsvpRepository;
//! use wedding_core::traits::RsvpRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgres://localhost/wedding");
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let rsvps = PgRsvpRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgPageViewRepository, PgReplyRepository, PgRsvpRepository,
    PgStoreHealth,
};
