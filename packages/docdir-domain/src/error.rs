#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("Missing required fields: {}.", .fields.join(", "))]
	MissingField { fields: Vec<String> },
	#[error("{field} must be a non-negative integer, got {value:?}.")]
	InvalidNumber { field: String, value: String },
}
