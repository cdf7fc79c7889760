use docdir_domain::ValidationError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Missing required fields: {}.", .fields.join(", "))]
	MissingField { fields: Vec<String> },
	#[error("{field} must be a non-negative integer, got {value:?}.")]
	InvalidNumber { field: String, value: String },
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<ValidationError> for Error {
	fn from(err: ValidationError) -> Self {
		match err {
			ValidationError::MissingField { fields } => Self::MissingField { fields },
			ValidationError::InvalidNumber { field, value } => Self::InvalidNumber { field, value },
		}
	}
}

impl From<docdir_storage::Error> for Error {
	fn from(err: docdir_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}
