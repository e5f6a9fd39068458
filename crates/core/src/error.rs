use thiserror::Error;

use crate::model::PersonError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Person(#[from] PersonError),
}
