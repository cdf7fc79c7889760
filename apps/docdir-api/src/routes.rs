use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use docdir_service::{AddProviderRequest, AddProviderResponse, Error, ListRequest, ListResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/doctors/add-doctor", post(add_doctor))
		.route("/api/doctors/list-doctors", get(list_doctors))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn add_doctor(
	State(state): State<AppState>,
	Json(payload): Json<AddProviderRequest>,
) -> Result<(StatusCode, Json<AddProviderResponse>), ApiError> {
	let response = state.service.add_provider(payload).await?;

	Ok((StatusCode::CREATED, Json(response)))
}

async fn list_doctors(
	State(state): State<AppState>,
	Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListResponse>, ApiError> {
	let response = state.service.list_providers(ListRequest::from_pairs(params)).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		let message = err.to_string();

		match err {
			Error::MissingField { fields } =>
				Self::new(StatusCode::BAD_REQUEST, "MISSING_FIELD", message, Some(fields)),
			Error::InvalidNumber { field, .. } =>
				Self::new(StatusCode::BAD_REQUEST, "INVALID_NUMBER", message, Some(vec![field])),
			Error::InvalidRequest { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message, None),
			// Store details stay in the logs.
			Error::Storage { .. } => Self::new(
				StatusCode::INTERNAL_SERVER_ERROR,
				"STORAGE_ERROR",
				"Internal storage error.",
				None,
			),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}
