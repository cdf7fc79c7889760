use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub listing: Listing,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Listing {
	#[serde(default = "default_page_size")]
	pub default_page_size: u32,
	#[serde(default = "max_page_size")]
	pub max_page_size: u32,
}
impl Default for Listing {
	fn default() -> Self {
		Self { default_page_size: default_page_size(), max_page_size: max_page_size() }
	}
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Security {
	#[serde(default = "default_true")]
	pub bind_localhost_only: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: default_true() }
	}
}

fn default_page_size() -> u32 {
	10
}

fn max_page_size() -> u32 {
	100
}

fn default_true() -> bool {
	true
}
