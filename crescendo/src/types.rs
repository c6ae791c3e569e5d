//! Common type definitions.

/// Identifier for a student record (AUTO_INCREMENT primary key).
pub type StudentId = i64;
