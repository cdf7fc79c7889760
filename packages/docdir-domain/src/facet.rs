use serde_json::Value;

use crate::StoredProvider;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One listing request, as an immutable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
	pub specialization: Option<String>,
	pub location: Option<String>,
	pub consult_modes: Vec<String>,
	pub spoken_languages: Vec<String>,
	pub experience_buckets: Vec<String>,
	pub charge_buckets: Vec<String>,
	pub sort: Option<String>,
	pub page: u32,
	pub page_size: u32,
}
impl FilterQuery {
	/// Bucket keywords that map to no known range. They constrain nothing.
	pub fn unrecognized_buckets(&self) -> Vec<&str> {
		let experience = self
			.experience_buckets
			.iter()
			.filter(|keyword| ExperienceBucket::parse(keyword).is_none());
		let charges =
			self.charge_buckets.iter().filter(|keyword| ChargeBucket::parse(keyword).is_none());

		experience.chain(charges).map(String::as_str).collect()
	}
}

impl Default for FilterQuery {
	fn default() -> Self {
		Self {
			specialization: None,
			location: None,
			consult_modes: Vec::new(),
			spoken_languages: Vec::new(),
			experience_buckets: Vec::new(),
			charge_buckets: Vec::new(),
			sort: None,
			page: 1,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
	Specialization,
	Location,
}
impl TextField {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Specialization => "specialization",
			Self::Location => "location",
		}
	}

	fn lookup<'a>(&self, provider: &'a StoredProvider) -> &'a str {
		match self {
			Self::Specialization => &provider.specialization,
			Self::Location => &provider.location,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
	SpokenLanguages,
	ConsultModes,
}
impl ListField {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::SpokenLanguages => "spoken_languages",
			Self::ConsultModes => "consult_modes",
		}
	}

	fn lookup<'a>(&self, provider: &'a StoredProvider) -> &'a Value {
		match self {
			Self::SpokenLanguages => &provider.spoken_languages,
			Self::ConsultModes => &provider.consult_modes,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
	ExperienceYears,
	ChargeAmount,
}
impl NumericField {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::ExperienceYears => "experience_years",
			Self::ChargeAmount => "charge_amount",
		}
	}

	pub fn lookup(&self, provider: &StoredProvider) -> u32 {
		match self {
			Self::ExperienceYears => provider.experience_years,
			Self::ChargeAmount => provider.charge_amount,
		}
	}
}

/// Condition tree handed to the store.
///
/// `Contains` terms and `AnyOf` values are kept lower-cased; stores compare them against
/// lower-cased column values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
	All,
	And(Vec<Predicate>),
	Or(Vec<Predicate>),
	Contains { field: TextField, term: String },
	AnyOf { field: ListField, values: Vec<String> },
	Range { field: NumericField, min: u32, max: Option<u32> },
}
impl Predicate {
	pub fn matches(&self, provider: &StoredProvider) -> bool {
		match self {
			Self::All => true,
			Self::And(nodes) => nodes.iter().all(|node| node.matches(provider)),
			Self::Or(nodes) => nodes.iter().any(|node| node.matches(provider)),
			Self::Contains { field, term } =>
				field.lookup(provider).to_lowercase().contains(term.as_str()),
			Self::AnyOf { field, values } => match field.lookup(provider) {
				Value::Array(items) => items.iter().filter_map(Value::as_str).any(|item| {
					let item = item.trim().to_lowercase();

					values.iter().any(|value| value == &item)
				}),
				_ => false,
			},
			Self::Range { field, min, max } => {
				let value = field.lookup(provider);

				value >= *min && max.is_none_or(|max| value <= max)
			},
		}
	}
}

/// A named numeric range a client can select for a facet.
pub trait Bucket
where
	Self: Sized,
{
	const FIELD: NumericField;

	fn parse(keyword: &str) -> Option<Self>;

	/// Inclusive lower bound and inclusive upper bound, if any.
	fn bounds(&self) -> (u32, Option<u32>);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceBucket {
	UpToFive,
	SixToTen,
	OverTen,
}
impl Bucket for ExperienceBucket {
	const FIELD: NumericField = NumericField::ExperienceYears;

	fn parse(keyword: &str) -> Option<Self> {
		match keyword.trim() {
			"0-5" => Some(Self::UpToFive),
			"6-10" => Some(Self::SixToTen),
			"10+" => Some(Self::OverTen),
			_ => None,
		}
	}

	fn bounds(&self) -> (u32, Option<u32>) {
		match self {
			Self::UpToFive => (0, Some(5)),
			Self::SixToTen => (6, Some(10)),
			Self::OverTen => (11, None),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeBucket {
	Under500,
	From500To1000,
	Over1000,
}
impl Bucket for ChargeBucket {
	const FIELD: NumericField = NumericField::ChargeAmount;

	fn parse(keyword: &str) -> Option<Self> {
		match keyword.trim() {
			"<500" => Some(Self::Under500),
			"500-1000" => Some(Self::From500To1000),
			"1000+" => Some(Self::Over1000),
			_ => None,
		}
	}

	// 500 itself belongs to the middle bucket.
	fn bounds(&self) -> (u32, Option<u32>) {
		match self {
			Self::Under500 => (0, Some(499)),
			Self::From500To1000 => (500, Some(1_000)),
			Self::Over1000 => (1_001, None),
		}
	}
}

/// Builds an AND of per-facet OR groups. An unconstrained query yields [`Predicate::All`].
pub fn build(query: &FilterQuery) -> Predicate {
	let conditions: Vec<Predicate> = [
		text_condition(TextField::Specialization, query.specialization.as_deref()),
		text_condition(TextField::Location, query.location.as_deref()),
		list_condition(ListField::ConsultModes, &query.consult_modes),
		list_condition(ListField::SpokenLanguages, &query.spoken_languages),
		bucket_condition::<ExperienceBucket>(&query.experience_buckets),
		bucket_condition::<ChargeBucket>(&query.charge_buckets),
	]
	.into_iter()
	.flatten()
	.collect();

	combine(conditions, Predicate::And).unwrap_or(Predicate::All)
}

fn text_condition(field: TextField, term: Option<&str>) -> Option<Predicate> {
	let term = term.map(str::trim).filter(|term| !term.is_empty())?;

	Some(Predicate::Contains { field, term: term.to_lowercase() })
}

fn list_condition(field: ListField, selections: &[String]) -> Option<Predicate> {
	let mut values: Vec<String> = Vec::new();

	for selection in selections {
		let value = selection.trim().to_lowercase();

		if !value.is_empty() && !values.contains(&value) {
			values.push(value);
		}
	}

	(!values.is_empty()).then_some(Predicate::AnyOf { field, values })
}

fn bucket_condition<B: Bucket>(keywords: &[String]) -> Option<Predicate> {
	let ranges = keywords
		.iter()
		.filter_map(|keyword| B::parse(keyword))
		.map(|bucket| {
			let (min, max) = bucket.bounds();

			Predicate::Range { field: B::FIELD, min, max }
		})
		.fold(Vec::new(), |mut ranges, range| {
			if !ranges.contains(&range) {
				ranges.push(range);
			}

			ranges
		});

	combine(ranges, Predicate::Or)
}

fn combine(mut nodes: Vec<Predicate>, join: fn(Vec<Predicate>) -> Predicate) -> Option<Predicate> {
	match nodes.len() {
		0 => None,
		1 => nodes.pop(),
		_ => Some(join(nodes)),
	}
}
