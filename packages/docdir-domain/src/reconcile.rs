use serde_json::Value;

use crate::{
	MultiValuedField, ProviderRecord, StoredProvider,
	normalize::{decode_json_array, strip_decoration, value_text},
};

/// Decodes a stored multi-valued column back into display tokens.
///
/// Accepts every shape earlier writers left behind. Anything that cannot be decoded becomes an
/// empty list.
pub fn reconcile(field: MultiValuedField, stored: &Value) -> Vec<String> {
	let tokens = match stored {
		Value::Array(items) => expand_list(items),
		Value::String(text) => expand_text(text).unwrap_or_default(),
		_ => Vec::new(),
	};

	tokens.iter().filter_map(|token| display_token(field, token)).collect()
}

pub fn reconcile_record(stored: StoredProvider) -> ProviderRecord {
	let qualifications = reconcile(MultiValuedField::Qualifications, &stored.qualifications);
	let spoken_languages = reconcile(MultiValuedField::SpokenLanguages, &stored.spoken_languages);
	let consult_modes = reconcile(MultiValuedField::ConsultModes, &stored.consult_modes);

	ProviderRecord {
		id: stored.id,
		name: stored.name,
		specialization: stored.specialization,
		qualifications,
		experience_years: stored.experience_years,
		location: stored.location,
		charge_amount: stored.charge_amount,
		photo_reference: stored.photo_reference,
		spoken_languages,
		consult_modes,
	}
}

fn expand_list(items: &[Value]) -> Vec<String> {
	let texts: Vec<String> = items.iter().map(value_text).collect();

	// A JSON array split across list elements, either whole or at its commas.
	for joiner in ["", ","] {
		if let Some(decoded) = decode_loose_array(&texts.join(joiner)) {
			return decoded;
		}
	}

	texts
}

fn expand_text(text: &str) -> Option<Vec<String>> {
	let trimmed = text.trim();

	if trimmed.starts_with('[') {
		return decode_loose_array(trimmed);
	}
	if let Some(decoded) = decode_json_array(trimmed) {
		return Some(decoded);
	}

	Some(trimmed.split(',').map(str::to_string).collect())
}

fn decode_loose_array(text: &str) -> Option<Vec<String>> {
	let trimmed = text.trim();

	// A list element may hold the array re-encoded as a JSON string literal.
	if trimmed.starts_with('"') {
		return decode_json_array(trimmed);
	}
	if !trimmed.starts_with('[') {
		return None;
	}

	decode_json_array(trimmed).or_else(|| decode_json_array(&trimmed.replace('\'', "\"")))
}

fn display_token(field: MultiValuedField, token: &str) -> Option<String> {
	let stripped = strip_decoration(token);
	let trimmed = stripped.trim();

	if trimmed.is_empty() {
		return None;
	}
	if field.is_upper_cased() {
		return Some(trimmed.to_uppercase());
	}

	Some(trimmed.to_string())
}
