use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

use docdir_domain::StoredProvider;

use crate::{Error, Result};

#[derive(Debug, sqlx::FromRow)]
pub struct ProviderRow {
	pub provider_id: Uuid,
	pub name: String,
	pub specialization: String,
	pub qualifications: Value,
	pub experience_years: i64,
	pub location: String,
	pub charge_amount: i64,
	pub photo_reference: String,
	pub spoken_languages: Value,
	pub consult_modes: Value,
	pub created_at: OffsetDateTime,
}
impl ProviderRow {
	pub fn into_stored(self) -> Result<StoredProvider> {
		let experience_years =
			column_count("experience_years", self.provider_id, self.experience_years)?;
		let charge_amount = column_count("charge_amount", self.provider_id, self.charge_amount)?;

		Ok(StoredProvider {
			id: self.provider_id,
			name: self.name,
			specialization: self.specialization,
			qualifications: self.qualifications,
			experience_years,
			location: self.location,
			charge_amount,
			photo_reference: self.photo_reference,
			spoken_languages: self.spoken_languages,
			consult_modes: self.consult_modes,
		})
	}
}

fn column_count(column: &str, provider_id: Uuid, value: i64) -> Result<u32> {
	u32::try_from(value).map_err(|_| {
		Error::InvalidRow(format!("Provider {provider_id} has out-of-range {column} {value}."))
	})
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn row(experience_years: i64) -> ProviderRow {
		ProviderRow {
			provider_id: Uuid::nil(),
			name: "Dr. Asha Rao".to_string(),
			specialization: "cardiology".to_string(),
			qualifications: json!("MBBS, MD"),
			experience_years,
			location: "bengaluru".to_string(),
			charge_amount: 700,
			photo_reference: "uploads/a.png".to_string(),
			spoken_languages: json!(["English"]),
			consult_modes: Value::Null,
			created_at: OffsetDateTime::UNIX_EPOCH,
		}
	}

	#[test]
	fn stored_columns_are_kept_verbatim() {
		let stored = row(8).into_stored().expect("valid row");

		assert_eq!(stored.experience_years, 8);
		assert_eq!(stored.qualifications, json!("MBBS, MD"));
		assert_eq!(stored.consult_modes, Value::Null);
	}

	#[test]
	fn negative_counts_are_rejected() {
		assert!(matches!(row(-1).into_stored(), Err(Error::InvalidRow(_))));
	}
}
