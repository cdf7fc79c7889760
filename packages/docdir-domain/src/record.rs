use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The three attributes that clients may send as a list, JSON text, or comma text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiValuedField {
	Qualifications,
	SpokenLanguages,
	ConsultModes,
}
impl MultiValuedField {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Qualifications => "qualifications",
			Self::SpokenLanguages => "spoken_languages",
			Self::ConsultModes => "consult_modes",
		}
	}

	/// Separator used when the field arrives as plain text.
	pub fn separator(&self) -> Option<char> {
		match self {
			Self::Qualifications => Some(','),
			Self::SpokenLanguages | Self::ConsultModes => None,
		}
	}

	pub fn is_upper_cased(&self) -> bool {
		matches!(self, Self::Qualifications)
	}
}

/// A validated provider that the store has not assigned an identity to yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProvider {
	pub name: String,
	pub specialization: String,
	pub qualifications: Vec<String>,
	pub experience_years: u32,
	pub location: String,
	pub charge_amount: u32,
	pub photo_reference: String,
	pub spoken_languages: Vec<String>,
	pub consult_modes: Vec<String>,
}
impl NewProvider {
	pub fn into_record(self, id: Uuid) -> ProviderRecord {
		ProviderRecord {
			id,
			name: self.name,
			specialization: self.specialization,
			qualifications: self.qualifications,
			experience_years: self.experience_years,
			location: self.location,
			charge_amount: self.charge_amount,
			photo_reference: self.photo_reference,
			spoken_languages: self.spoken_languages,
			consult_modes: self.consult_modes,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
	pub id: Uuid,
	pub name: String,
	pub specialization: String,
	pub qualifications: Vec<String>,
	pub experience_years: u32,
	pub location: String,
	pub charge_amount: u32,
	pub photo_reference: String,
	pub spoken_languages: Vec<String>,
	pub consult_modes: Vec<String>,
}

/// A provider exactly as held at rest.
///
/// Rows written before the current normalization rules existed may carry any shape in the
/// multi-valued columns, so they stay untyped until the display path reconciles them.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredProvider {
	pub id: Uuid,
	pub name: String,
	pub specialization: String,
	pub qualifications: Value,
	pub experience_years: u32,
	pub location: String,
	pub charge_amount: u32,
	pub photo_reference: String,
	pub spoken_languages: Value,
	pub consult_modes: Value,
}
impl StoredProvider {
	pub fn from_new(id: Uuid, provider: &NewProvider) -> Self {
		Self {
			id,
			name: provider.name.clone(),
			specialization: provider.specialization.clone(),
			qualifications: string_array(&provider.qualifications),
			experience_years: provider.experience_years,
			location: provider.location.clone(),
			charge_amount: provider.charge_amount,
			photo_reference: provider.photo_reference.clone(),
			spoken_languages: string_array(&provider.spoken_languages),
			consult_modes: string_array(&provider.consult_modes),
		}
	}
}

pub fn string_array(items: &[String]) -> Value {
	Value::Array(items.iter().cloned().map(Value::String).collect())
}
