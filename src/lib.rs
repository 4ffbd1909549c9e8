//! # AstroPlanner visibility backend
//!
//! Core engine of a personal observation-planning service: given one of a
//! user's stored observing locations and a point in time, rank a fixed
//! catalog of celestial targets (the seven major planets, the Moon, and a
//! few bright deep-sky objects) by how worthwhile they are to observe.
//!
//! ## Features
//!
//! - **Time Handling**: local wall-clock strings with IANA timezones, or
//!   absolute UTC instants, resolved to a single instant per request
//! - **Ephemeris**: topocentric apparent altitude/azimuth from VSOP87D and
//!   ELP-2000/82 series, behind a swappable provider trait
//! - **Visibility Rules**: ordered per-kind rule chains with human-readable
//!   failure reasons
//! - **Scoring**: composite desirability heuristic used for ranking
//! - **Location Store**: owner-scoped repository abstraction with an
//!   in-memory implementation
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: DTOs returned at the crate boundary
//! - [`catalog`]: the closed set of evaluated targets
//! - [`ephemeris`]: apparent-position provider (trait + production impl)
//! - [`models`]: location and request-time domain types
//! - [`services`]: rule chains, scorer, per-request orchestration
//! - [`db`]: repository pattern for the location store
//!
//! ## Concurrency
//!
//! The ephemeris provider and catalog are immutable after startup and shared
//! read-only across requests; each request's computation is pure, synchronous
//! and in-memory, so no locking is needed beyond that sharing.

pub mod api;
pub mod catalog;
pub mod db;
pub mod ephemeris;
pub mod models;
pub mod services;
