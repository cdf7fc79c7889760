use std::sync::Arc;

use docdir_service::DocdirService;
use docdir_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<DocdirService>,
}
impl AppState {
	pub async fn new(config: docdir_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self::from_service(DocdirService::new(config, db)))
	}

	pub fn from_service(service: DocdirService) -> Self {
		Self { service: Arc::new(service) }
	}
}
