use std::cmp::Ordering;

use crate::{StoredProvider, facet::NumericField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
	PriceLow,
	PriceHigh,
	ExperienceLow,
	ExperienceHigh,
}
impl SortKey {
	pub fn parse(keyword: &str) -> Option<Self> {
		match keyword.trim() {
			"price-low" => Some(Self::PriceLow),
			"price-high" => Some(Self::PriceHigh),
			"experience-low" => Some(Self::ExperienceLow),
			"experience-high" => Some(Self::ExperienceHigh),
			_ => None,
		}
	}

	pub fn rule(&self) -> SortRule {
		match self {
			Self::PriceLow =>
				SortRule { field: NumericField::ChargeAmount, direction: Direction::Ascending },
			Self::PriceHigh =>
				SortRule { field: NumericField::ChargeAmount, direction: Direction::Descending },
			Self::ExperienceLow =>
				SortRule { field: NumericField::ExperienceYears, direction: Direction::Ascending },
			Self::ExperienceHigh =>
				SortRule { field: NumericField::ExperienceYears, direction: Direction::Descending },
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Ascending,
	Descending,
}
impl Direction {
	pub fn as_sql(&self) -> &'static str {
		match self {
			Self::Ascending => "ASC",
			Self::Descending => "DESC",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRule {
	pub field: NumericField,
	pub direction: Direction,
}
impl SortRule {
	pub fn compare(&self, lhs: &StoredProvider, rhs: &StoredProvider) -> Ordering {
		let ordering = self.field.lookup(lhs).cmp(&self.field.lookup(rhs));

		match self.direction {
			Direction::Ascending => ordering,
			Direction::Descending => ordering.reverse(),
		}
	}
}

/// `None` keeps the store's insertion order.
pub fn ordering_for(keyword: Option<&str>) -> Option<SortRule> {
	keyword.and_then(SortKey::parse).map(|key| key.rule())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	pub page: u32,
	pub offset: u64,
	pub limit: u32,
}
impl PageWindow {
	/// Page numbers start at 1. Zero page or page size values are raised to 1.
	pub fn new(page: u32, page_size: u32) -> Self {
		let page = page.max(1);
		let limit = page_size.max(1);

		Self { page, offset: u64::from(page - 1) * u64::from(limit), limit }
	}

	pub fn total_pages(&self, total_count: u64) -> u64 {
		total_count.div_ceil(u64::from(self.limit))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPage {
	pub ordering: Option<SortRule>,
	pub offset: u64,
	pub limit: u32,
	pub total_pages: u64,
	pub current_page: u32,
}

pub fn resolve(
	sort_keyword: Option<&str>,
	page: u32,
	page_size: u32,
	total_count: u64,
) -> ResolvedPage {
	let window = PageWindow::new(page, page_size);

	ResolvedPage {
		ordering: ordering_for(sort_keyword),
		offset: window.offset,
		limit: window.limit,
		total_pages: window.total_pages(total_count),
		current_page: window.page,
	}
}
