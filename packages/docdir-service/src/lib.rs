pub mod add_provider;
pub mod list;

mod error;

pub use add_provider::{AddProviderRequest, AddProviderResponse};
pub use error::{Error, Result};
pub use list::{ListRequest, ListResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use time::OffsetDateTime;
use uuid::Uuid;

use docdir_config::Config;
use docdir_domain::{
	NewProvider, ProviderRecord, StoredProvider, facet::Predicate, paging::SortRule,
};
use docdir_storage::{db::Db, queries};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One filtered, ordered page request against the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreQuery {
	pub predicate: Predicate,
	pub ordering: Option<SortRule>,
	pub offset: u64,
	pub limit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorePage {
	pub providers: Vec<StoredProvider>,
	pub total_count: u64,
}

/// Record store seam. Implementations evaluate the predicate themselves.
pub trait ProviderStore
where
	Self: Send + Sync,
{
	fn insert<'a>(&'a self, provider: &'a NewProvider) -> BoxFuture<'a, Result<ProviderRecord>>;

	/// Unsorted queries return providers in insertion order.
	fn query<'a>(&'a self, query: &'a StoreQuery) -> BoxFuture<'a, Result<StorePage>>;
}

pub struct PostgresStore {
	db: Db,
}
impl PostgresStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}

	async fn insert_inner(&self, provider: &NewProvider) -> Result<ProviderRecord> {
		let provider_id = Uuid::new_v4();

		queries::insert_provider(&self.db, provider_id, provider, OffsetDateTime::now_utc())
			.await?;

		Ok(provider.clone().into_record(provider_id))
	}

	async fn query_inner(&self, query: &StoreQuery) -> Result<StorePage> {
		let total_count = queries::count_providers(&self.db, &query.predicate).await?;
		let rows = queries::select_providers(
			&self.db,
			&query.predicate,
			query.ordering,
			query.offset,
			query.limit,
		)
		.await?;
		let providers = rows
			.into_iter()
			.map(|row| row.into_stored())
			.collect::<docdir_storage::Result<Vec<_>>>()?;

		Ok(StorePage { providers, total_count })
	}
}
impl ProviderStore for PostgresStore {
	fn insert<'a>(&'a self, provider: &'a NewProvider) -> BoxFuture<'a, Result<ProviderRecord>> {
		Box::pin(self.insert_inner(provider))
	}

	fn query<'a>(&'a self, query: &'a StoreQuery) -> BoxFuture<'a, Result<StorePage>> {
		Box::pin(self.query_inner(query))
	}
}

pub struct DocdirService {
	pub cfg: Config,
	pub store: Arc<dyn ProviderStore>,
}
impl DocdirService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, store: Arc::new(PostgresStore::new(db)) }
	}

	pub fn with_store(cfg: Config, store: Arc<dyn ProviderStore>) -> Self {
		Self { cfg, store }
	}
}
