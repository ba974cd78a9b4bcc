use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_STORAGE_DIR: &str = "storage";
const DEFAULT_USERS_PER_PAGE: usize = 10;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 900;
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_FILTER: &str = "course_portal=info";

#[derive(Debug, Clone)]
pub struct Config {
	pub storage_dir: PathBuf,
	pub users_per_page: usize,
	pub submit_delay_ms: u64,
	pub redirect_delay_ms: u64,
	pub log_filter: String,
}

/// The site's own timings, used by tests and when no environment is set.
impl Default for Config {
	fn default() -> Self {
		Self {
			storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
			users_per_page: DEFAULT_USERS_PER_PAGE,
			submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
			redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
			log_filter: DEFAULT_LOG_FILTER.to_string(),
		}
	}
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		// Load .env file if it exists
		let _ = dotenvy::dotenv();

		Ok(Self {
			storage_dir: env::var("COURSE_PORTAL_STORAGE_DIR")
				.map(PathBuf::from)
				.unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_DIR)),
			users_per_page: match env::var("USERS_PER_PAGE") {
				Ok(raw) => parse_page_size(&raw)?,
				Err(_) => DEFAULT_USERS_PER_PAGE,
			},
			submit_delay_ms: parse_millis("SUBMIT_DELAY_MS", DEFAULT_SUBMIT_DELAY_MS)?,
			redirect_delay_ms: parse_millis("REDIRECT_DELAY_MS", DEFAULT_REDIRECT_DELAY_MS)?,
			log_filter: env::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
		})
	}

	pub fn submit_delay(&self) -> Duration {
		Duration::from_millis(self.submit_delay_ms)
	}

	pub fn redirect_delay(&self) -> Duration {
		Duration::from_millis(self.redirect_delay_ms)
	}
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
	raw.parse::<usize>()
		.ok()
		.filter(|n| *n > 0)
		.ok_or_else(|| ConfigError::InvalidPageSize(raw.to_string()))
}

fn parse_millis(key: &'static str, default: u64) -> Result<u64, ConfigError> {
	match env::var(key) {
		Ok(raw) => raw
			.parse()
			.map_err(|_| ConfigError::InvalidDuration { key, value: raw }),
		Err(_) => Ok(default),
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid page size: {0}")]
	InvalidPageSize(String),

	#[error("Invalid duration for {key}: {value}")]
	InvalidDuration { key: &'static str, value: String },
}
