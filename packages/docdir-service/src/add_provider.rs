use serde_json::Value;

use docdir_domain::{
	ProviderRecord,
	assemble::{ProviderInput, assemble},
};

use crate::{DocdirService, Result};

/// Creation body. Keys also accept the names older clients send.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AddProviderRequest {
	pub name: Option<String>,
	pub specialization: Option<String>,
	#[serde(alias = "experience")]
	pub experience_years: Option<Value>,
	pub location: Option<String>,
	#[serde(alias = "charges")]
	pub charge_amount: Option<Value>,
	#[serde(alias = "photoUrl", alias = "photo")]
	pub photo_reference: Option<String>,
	pub qualifications: Option<Value>,
	#[serde(alias = "language")]
	pub spoken_languages: Option<Value>,
	#[serde(alias = "consultOption")]
	pub consult_modes: Option<Value>,
}
impl AddProviderRequest {
	pub fn as_input(&self) -> ProviderInput<'_> {
		ProviderInput {
			name: self.name.as_deref(),
			specialization: self.specialization.as_deref(),
			experience_years: self.experience_years.as_ref(),
			location: self.location.as_deref(),
			charge_amount: self.charge_amount.as_ref(),
			photo_reference: self.photo_reference.as_deref(),
			qualifications: self.qualifications.as_ref(),
			spoken_languages: self.spoken_languages.as_ref(),
			consult_modes: self.consult_modes.as_ref(),
		}
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AddProviderResponse {
	pub message: String,
	#[serde(rename = "doctor")]
	pub provider: ProviderRecord,
}

impl DocdirService {
	pub async fn add_provider(&self, req: AddProviderRequest) -> Result<AddProviderResponse> {
		let provider = assemble(&req.as_input())?;
		let record = self.store.insert(&provider).await.inspect_err(|err| {
			tracing::error!(error = %err, "Failed to insert provider.");
		})?;

		tracing::info!(
			provider_id = %record.id,
			specialization = %record.specialization,
			"Provider created."
		);

		Ok(AddProviderResponse { message: "Doctor added successfully".to_string(), provider: record })
	}
}
