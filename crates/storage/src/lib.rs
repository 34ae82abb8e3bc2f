#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    CoursePrefsRepository, InMemoryRepository, Storage, StorageError, StudentPrefsRepository,
};
