//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries mapped through `FromRow`.
//!
//! - [`PgUserRepository`] - User storage and retrieval

pub mod pg_user_repository;

pub use pg_user_repository::PgUserRepository;
