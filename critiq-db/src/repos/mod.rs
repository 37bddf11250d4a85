//! Repository modules for database operations

pub mod reviews;

pub use reviews::ReviewRepository;
