//! Repository layer.

pub mod title_repo;

pub use title_repo::TitleRepo;
