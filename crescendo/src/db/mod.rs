//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with MySQL.
//! It follows the Repository pattern to provide clean abstractions over
//! database operations:
//!
//! - [`handlers`]: Repository implementations for student records
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! Repositories wrap a SQLx connection or transaction and return domain
//! models from [`models`]. Write paths go through a transaction:
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! let mut repo = Students::new(&mut tx);
//! let student = repo.create(&create_request).await?;
//! tx.commit().await?;
//! ```
//!
//! Schema initialization is an explicit startup step: migrations from the
//! `migrations/` directory are run once by the process entry point via
//! [`crate::migrator`], never as a side effect of anything else.

pub mod errors;
pub mod handlers;
pub mod models;
