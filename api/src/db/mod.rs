//! # Database module — PostgreSQL connection pool
//!
//! Shared connection pool used by every server function in the crate, gated behind
//! `#[cfg(feature = "server")]` so WASM builds never pull in SQLx or Tokio networking.
//! The pool is a lazy process-wide singleton: the first [`get_pool`] call reads
//! `DATABASE_URL` (via `dotenvy`) and opens the pool, later callers get the cached
//! `&'static PgPool`.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
