use thiserror::Error;

use crate::model::{AssignmentError, CatalogError, CourseError, IdError, UserError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Id(#[from] IdError),
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}
