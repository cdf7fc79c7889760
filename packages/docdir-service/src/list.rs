use docdir_domain::{
	ProviderRecord,
	assemble::title_case,
	facet::{FilterQuery, build},
	paging::{PageWindow, ordering_for},
	reconcile::reconcile_record,
};

use crate::{DocdirService, Error, Result, StoreQuery};

/// Listing parameters as they arrive on the query string.
///
/// Multi-select parameters may repeat and may also carry comma-joined selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequest {
	pub specialization: Option<String>,
	pub location: Option<String>,
	pub page: Option<String>,
	pub limit: Option<String>,
	pub sort: Option<String>,
	pub consult_modes: Vec<String>,
	pub spoken_languages: Vec<String>,
	pub experience: Vec<String>,
	pub charges: Vec<String>,
}
impl ListRequest {
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut req = Self::default();

		for (key, value) in pairs {
			let value = value.into();

			match key.as_ref() {
				"specialization" => req.specialization = Some(value),
				"location" => req.location = Some(value),
				"page" => req.page = Some(value),
				"limit" => req.limit = Some(value),
				"sort" => req.sort = Some(value),
				"consultOption" | "consult_modes" => push_selections(&mut req.consult_modes, &value),
				"language" | "spoken_languages" =>
					push_selections(&mut req.spoken_languages, &value),
				"experience" => push_selections(&mut req.experience, &value),
				"charges" => push_selections(&mut req.charges, &value),
				_ => {},
			}
		}

		req
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
	#[serde(rename = "doctors")]
	pub providers: Vec<ProviderRecord>,
	#[serde(rename = "totalDoctors")]
	pub total_count: u64,
	pub current_page: u32,
	pub total_pages: u64,
}

impl DocdirService {
	pub async fn list_providers(&self, req: ListRequest) -> Result<ListResponse> {
		let query = self.filter_query(req)?;
		let ignored = query.unrecognized_buckets();

		if !ignored.is_empty() {
			tracing::debug!(buckets = ?ignored, "Ignoring unrecognized facet buckets.");
		}

		let window = PageWindow::new(query.page, query.page_size);
		let store_query = StoreQuery {
			predicate: build(&query),
			ordering: ordering_for(query.sort.as_deref()),
			offset: window.offset,
			limit: window.limit,
		};
		let page = self.store.query(&store_query).await.inspect_err(|err| {
			tracing::error!(error = %err, "Failed to query providers.");
		})?;
		let total_pages = window.total_pages(page.total_count);
		let providers =
			page.providers.into_iter().map(reconcile_record).map(display_casing).collect();

		tracing::info!(
			total = page.total_count,
			page = window.page,
			total_pages,
			"Providers listed."
		);

		Ok(ListResponse {
			providers,
			total_count: page.total_count,
			current_page: window.page,
			total_pages,
		})
	}

	fn filter_query(&self, req: ListRequest) -> Result<FilterQuery> {
		let listing = &self.cfg.listing;
		let page = match non_blank(req.page.as_deref()) {
			Some(text) => parse_positive("page", text)?,
			None => 1,
		};
		let page_size = match non_blank(req.limit.as_deref()) {
			Some(text) => parse_positive("limit", text)?.min(listing.max_page_size),
			None => listing.default_page_size,
		};

		Ok(FilterQuery {
			specialization: req.specialization,
			location: req.location,
			consult_modes: req.consult_modes,
			spoken_languages: req.spoken_languages,
			experience_buckets: req.experience,
			charge_buckets: req.charges,
			sort: non_blank(req.sort.as_deref()).map(str::to_string),
			page,
			page_size,
		})
	}
}

fn push_selections(target: &mut Vec<String>, value: &str) {
	let items = value.split(',').map(str::trim).filter(|item| !item.is_empty());

	target.extend(items.map(str::to_string));
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_positive(name: &str, text: &str) -> Result<u32> {
	match text.parse::<u32>() {
		Ok(value) if value > 0 => Ok(value),
		_ => Err(Error::InvalidRequest {
			message: format!("{name} must be a positive integer, got {text:?}."),
		}),
	}
}

fn display_casing(mut record: ProviderRecord) -> ProviderRecord {
	record.name = title_case(&record.name);
	record.specialization = title_case(&record.specialization);
	record.location = title_case(&record.location);

	record
}
