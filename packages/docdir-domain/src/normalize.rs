use serde_json::Value;

use crate::MultiValuedField;

/// Characters that clients paste around qualification tokens.
pub(crate) const DECORATION: [char; 5] = ['•', '·', '"', '[', ']'];

/// Shape of a multi-valued input, decided once before any cleaning happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawField {
	List(Vec<String>),
	JsonText(Vec<String>),
	PlainText(String),
	Absent,
}
impl RawField {
	pub fn classify(value: Option<&Value>) -> Self {
		match value {
			Some(Value::Array(items)) => Self::from_items(items),
			Some(Value::String(text)) => Self::from_text(text),
			// Numbers, booleans and objects carry no tokens.
			None | Some(Value::Null | Value::Bool(_) | Value::Number(_) | Value::Object(_)) =>
				Self::Absent,
		}
	}

	pub fn from_text(text: &str) -> Self {
		let trimmed = text.trim();

		if trimmed.is_empty() {
			return Self::Absent;
		}

		match decode_json_array(trimmed) {
			Some(items) => Self::JsonText(items),
			None => Self::PlainText(trimmed.to_string()),
		}
	}

	fn from_items(items: &[Value]) -> Self {
		// Multipart forms deliver a JSON-encoded array as the only element of a list.
		if let [Value::String(only)] = items
			&& let Some(decoded) = decode_json_array(only.trim())
		{
			return Self::JsonText(decoded);
		}

		Self::List(items.iter().map(value_text).collect())
	}
}

/// Canonicalizes one multi-valued field into ordered, deduplicated tokens.
///
/// Never fails: text that only looks like JSON is treated as plain text.
pub fn normalize(field: MultiValuedField, raw: &RawField) -> Vec<String> {
	let tokens = match raw {
		RawField::List(items) | RawField::JsonText(items) => items.clone(),
		RawField::PlainText(text) => match field.separator() {
			Some(separator) => text.split(separator).map(str::to_string).collect(),
			None => vec![text.clone()],
		},
		RawField::Absent => return Vec::new(),
	};
	let mut out: Vec<String> = Vec::with_capacity(tokens.len());

	for token in tokens {
		let Some(cleaned) = clean_token(field, &token) else {
			continue;
		};

		if !out.contains(&cleaned) {
			out.push(cleaned);
		}
	}

	out
}

pub fn normalize_value(field: MultiValuedField, value: Option<&Value>) -> Vec<String> {
	normalize(field, &RawField::classify(value))
}

pub(crate) fn strip_decoration(token: &str) -> String {
	token.replace(DECORATION, "")
}

pub(crate) fn value_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Decodes a JSON array, including one wrapped in a JSON string literal.
pub(crate) fn decode_json_array(text: &str) -> Option<Vec<String>> {
	match serde_json::from_str::<Value>(text).ok()? {
		Value::Array(items) => Some(items.iter().map(value_text).collect()),
		Value::String(inner) => match serde_json::from_str::<Value>(inner.trim()).ok()? {
			Value::Array(items) => Some(items.iter().map(value_text).collect()),
			_ => None,
		},
		_ => None,
	}
}

fn clean_token(field: MultiValuedField, token: &str) -> Option<String> {
	if !field.is_upper_cased() {
		let trimmed = token.trim();

		return (!trimmed.is_empty()).then(|| trimmed.to_string());
	}

	let stripped = strip_decoration(token);
	let trimmed = stripped.trim();

	(!trimmed.is_empty()).then(|| trimmed.to_uppercase())
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn classify_detects_each_shape() {
		assert_eq!(RawField::classify(None), RawField::Absent);
		assert_eq!(RawField::classify(Some(&Value::Null)), RawField::Absent);
		assert_eq!(RawField::classify(Some(&json!("   "))), RawField::Absent);
		assert_eq!(
			RawField::classify(Some(&json!(["MBBS", "MD"]))),
			RawField::List(vec!["MBBS".to_string(), "MD".to_string()])
		);
		assert_eq!(
			RawField::classify(Some(&json!("[\"MBBS\",\"MD\"]"))),
			RawField::JsonText(vec!["MBBS".to_string(), "MD".to_string()])
		);
		assert_eq!(
			RawField::classify(Some(&json!("mbbs, md"))),
			RawField::PlainText("mbbs, md".to_string())
		);
		assert_eq!(RawField::classify(Some(&json!(12))), RawField::Absent);
		assert_eq!(RawField::classify(Some(&json!(false))), RawField::Absent);
		assert_eq!(RawField::classify(Some(&json!({ "degree": "mbbs" }))), RawField::Absent);
	}

	#[test]
	fn classify_unwraps_double_encoded_text() {
		let raw = json!("\"[\\\"Online\\\",\\\"Hospital\\\"]\"");

		assert_eq!(
			RawField::classify(Some(&raw)),
			RawField::JsonText(vec!["Online".to_string(), "Hospital".to_string()])
		);
	}

	#[test]
	fn classify_expands_single_json_list_element() {
		let raw = json!(["[\"English\",\"Hindi\"]"]);

		assert_eq!(
			RawField::classify(Some(&raw)),
			RawField::JsonText(vec!["English".to_string(), "Hindi".to_string()])
		);
	}

	#[test]
	fn malformed_json_degrades_to_plain_text() {
		let raw = RawField::classify(Some(&json!("[\"Online\"")));

		assert_eq!(raw, RawField::PlainText("[\"Online\"".to_string()));
		assert_eq!(normalize(MultiValuedField::ConsultModes, &raw), vec!["[\"Online\"".to_string()]);
		assert_eq!(normalize(MultiValuedField::Qualifications, &raw), vec!["ONLINE".to_string()]);
	}
}
