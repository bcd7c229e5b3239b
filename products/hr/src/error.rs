use platform_api::ApiError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HrError {
    #[error("employee {0} not found")]
    NotFound(Uuid),
    #[error("operation returned nothing")]
    NotPersisted,
}

pub type HrResult<T> = Result<T, HrError>;

impl From<HrError> for ApiError {
    fn from(value: HrError) -> Self {
        match value {
            HrError::NotFound(_) => ApiError::NotFound,
            HrError::NotPersisted => ApiError::InvalidInput(value.to_string()),
        }
    }
}
