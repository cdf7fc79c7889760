use serde_json::Value;

use crate::{
	MultiValuedField, NewProvider, ValidationError,
	normalize::{normalize_value, value_text},
};

/// Borrowed view over the fields of a creation request, in whatever shape the client sent them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderInput<'a> {
	pub name: Option<&'a str>,
	pub specialization: Option<&'a str>,
	pub experience_years: Option<&'a Value>,
	pub location: Option<&'a str>,
	pub charge_amount: Option<&'a Value>,
	pub photo_reference: Option<&'a str>,
	pub qualifications: Option<&'a Value>,
	pub spoken_languages: Option<&'a Value>,
	pub consult_modes: Option<&'a Value>,
}

pub fn assemble(input: &ProviderInput<'_>) -> Result<NewProvider, ValidationError> {
	let mut missing = Vec::new();
	let name = required_text(input.name, "name", &mut missing);
	let specialization = required_text(input.specialization, "specialization", &mut missing);
	let experience = required_value(input.experience_years, "experience_years", &mut missing);
	let location = required_text(input.location, "location", &mut missing);
	let charge = required_value(input.charge_amount, "charge_amount", &mut missing);
	let photo_reference = required_text(input.photo_reference, "photo_reference", &mut missing);
	let qualifications = normalize_value(MultiValuedField::Qualifications, input.qualifications);

	if qualifications.is_empty() {
		missing.push(MultiValuedField::Qualifications.as_str());
	}

	let (
		Some(name),
		Some(specialization),
		Some(experience),
		Some(location),
		Some(charge),
		Some(photo_reference),
	) = (name, specialization, experience, location, charge, photo_reference)
	else {
		return Err(missing_field(missing));
	};

	if !missing.is_empty() {
		return Err(missing_field(missing));
	}

	Ok(NewProvider {
		name: title_case(name),
		specialization: specialization.to_lowercase(),
		qualifications,
		experience_years: parse_count("experience_years", experience)?,
		location: location.to_lowercase(),
		charge_amount: parse_count("charge_amount", charge)?,
		photo_reference: photo_reference.to_string(),
		spoken_languages: normalize_value(
			MultiValuedField::SpokenLanguages,
			input.spoken_languages,
		),
		consult_modes: normalize_value(MultiValuedField::ConsultModes, input.consult_modes),
	})
}

/// Lower-cases the text and upper-cases the first letter of every space-separated word.
pub fn title_case(text: &str) -> String {
	text.trim().to_lowercase().split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();

	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

fn required_text<'a>(
	value: Option<&'a str>,
	label: &'static str,
	missing: &mut Vec<&'static str>,
) -> Option<&'a str> {
	let value = value.map(str::trim).filter(|value| !value.is_empty());

	if value.is_none() {
		missing.push(label);
	}

	value
}

fn required_value<'a>(
	value: Option<&'a Value>,
	label: &'static str,
	missing: &mut Vec<&'static str>,
) -> Option<&'a Value> {
	let value = value.filter(|value| match value {
		Value::Null => false,
		Value::String(text) => !text.trim().is_empty(),
		_ => true,
	});

	if value.is_none() {
		missing.push(label);
	}

	value
}

fn parse_count(label: &str, value: &Value) -> Result<u32, ValidationError> {
	let parsed = match value {
		Value::Number(number) => number.as_u64().and_then(|number| u32::try_from(number).ok()),
		Value::String(text) => text.trim().parse::<u32>().ok(),
		_ => None,
	};

	parsed.ok_or_else(|| ValidationError::InvalidNumber {
		field: label.to_string(),
		value: value_text(value),
	})
}

fn missing_field(fields: Vec<&'static str>) -> ValidationError {
	ValidationError::MissingField { fields: fields.into_iter().map(str::to_string).collect() }
}
