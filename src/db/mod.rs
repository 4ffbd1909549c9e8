//! Location store access via the repository pattern.
//!
//! The store is a collaborator of the visibility core, not part of it: the
//! core only needs `{latitude, longitude, timezone}` for an owner's
//! location. The trait keeps backends swappable; `LocalRepository` is the
//! in-memory implementation used by tests and the demo binary.

pub mod local;
pub mod repository;

pub use local::LocalRepository;
pub use repository::{LocationRepository, NewLocation, RepositoryError, RepositoryResult};
