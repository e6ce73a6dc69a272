use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, ReviewsError};

pub const REVIEWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
	pub base_url: String,
	pub api_url: String,
	pub country: String,
	pub language: String,
	pub timeout: Duration,
	pub max_reviews: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			base_url: String::from("https://apps.apple.com"),
			api_url: String::from("https://amp-api.apps.apple.com"),
			country: String::from("ru"),
			language: String::from("ru"),
			timeout: Duration::from_secs(30),
			max_reviews: 5200,
		}
	}
}

impl Config {
	/// Reads `APPSTORE_*` variables, falling back to the storefront defaults.
	pub fn init() -> Result<Config> {
		let defaults = Config::default();

		let timeout_secs = parse_var("APPSTORE_TIMEOUT_SECS", defaults.timeout.as_secs())?;

		Ok(Config {
			base_url: string_var("APPSTORE_BASE_URL", defaults.base_url),
			api_url: string_var("APPSTORE_API_URL", defaults.api_url),
			country: string_var("APPSTORE_COUNTRY", defaults.country).to_lowercase(),
			language: string_var("APPSTORE_LANGUAGE", defaults.language).to_lowercase(),
			timeout: Duration::from_secs(timeout_secs),
			max_reviews: parse_var("APPSTORE_MAX_REVIEWS", defaults.max_reviews)?,
		})
	}

	/// Config pointing both origins at one server, used against mock servers.
	#[cfg(test)]
	pub fn for_server(uri: &str) -> Config {
		Config {
			base_url: uri.to_string(),
			api_url: uri.to_string(),
			..Config::default()
		}
	}
}

fn string_var(name: &str, default: String) -> String {
	match env::var(name) {
		Ok(value) if !value.trim().is_empty() => value.trim().trim_end_matches('/').to_string(),
		_ => default,
	}
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T> {
	match env::var(name) {
		Ok(value) if !value.trim().is_empty() => value
			.trim()
			.parse::<T>()
			.map_err(|_| ReviewsError::Config(format!("{} has invalid value {:?}", name, value))),
		_ => Ok(default),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_storefront() {
		let config = Config::default();
		assert_eq!(config.base_url, "https://apps.apple.com");
		assert_eq!(config.api_url, "https://amp-api.apps.apple.com");
		assert_eq!(config.max_reviews, 5200);
	}

	#[test]
	fn parse_var_rejects_garbage() {
		env::set_var("APPSTORE_TEST_NUMBER", "ten");
		let result = parse_var::<usize>("APPSTORE_TEST_NUMBER", 1);
		env::remove_var("APPSTORE_TEST_NUMBER");
		assert!(matches!(result, Err(ReviewsError::Config(_))));
	}

	#[test]
	fn unset_vars_use_default() {
		assert_eq!(parse_var::<u64>("APPSTORE_TEST_UNSET", 7).unwrap(), 7);
		assert_eq!(string_var("APPSTORE_TEST_UNSET", "ru".into()), "ru");
	}
}
