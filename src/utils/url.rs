use crate::config::Config;
use crate::error::{Result, ReviewsError};

/// Returns the trimmed id if it is a positive decimal number.
pub fn validate_app_id(app_id: &str) -> Result<String> {
	let app_id = app_id.trim();

	if app_id.is_empty() || !app_id.chars().all(|c| c.is_ascii_digit()) {
		return Err(ReviewsError::InvalidAppId(app_id.to_string()));
	}
	if app_id.chars().all(|c| c == '0') {
		return Err(ReviewsError::InvalidAppId(app_id.to_string()));
	}

	Ok(app_id.to_string())
}

pub fn validate_app_name(app_name: &str) -> Result<String> {
	let app_name = app_name.trim();
	if app_name.is_empty() {
		return Err(ReviewsError::InvalidAppName);
	}
	Ok(app_name.to_string())
}

/// `{base}/{country}/app/{name}/id{id}`, the page a browser would open.
pub fn app_page_url(config: &Config, app_name: &str, app_id: &str) -> String {
	format!(
		"{}/{}/app/{}/id{}",
		config.base_url,
		config.country,
		urlencoding::encode(app_name),
		app_id
	)
}

pub fn reviews_api_url(config: &Config, app_id: &str) -> String {
	format!(
		"{}/v1/catalog/{}/apps/{}/reviews",
		config.api_url, config.country, app_id
	)
}

pub fn app_api_url(config: &Config, app_id: &str) -> String {
	format!(
		"{}/v1/catalog/{}/apps/{}",
		config.api_url,
		config.country.to_uppercase(),
		app_id
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn app_id_must_be_numeric() {
		assert_eq!(validate_app_id(" 123456789 ").unwrap(), "123456789");
		assert!(matches!(validate_app_id("12ab"), Err(ReviewsError::InvalidAppId(_))));
		assert!(matches!(validate_app_id("-5"), Err(ReviewsError::InvalidAppId(_))));
		assert!(matches!(validate_app_id(""), Err(ReviewsError::InvalidAppId(_))));
		assert!(matches!(validate_app_id("000"), Err(ReviewsError::InvalidAppId(_))));
	}

	#[test]
	fn app_name_must_not_be_blank() {
		assert!(matches!(validate_app_name("   "), Err(ReviewsError::InvalidAppName)));
		assert_eq!(validate_app_name(" sber ").unwrap(), "sber");
	}

	#[test]
	fn page_url_encodes_name() {
		let config = Config::default();
		assert_eq!(
			app_page_url(&config, "my app/ü", "42"),
			"https://apps.apple.com/ru/app/my%20app%2F%C3%BC/id42"
		);
	}

	#[test]
	fn api_urls() {
		let config = Config::default();
		assert_eq!(
			reviews_api_url(&config, "42"),
			"https://amp-api.apps.apple.com/v1/catalog/ru/apps/42/reviews"
		);
		assert_eq!(
			app_api_url(&config, "42"),
			"https://amp-api.apps.apple.com/v1/catalog/RU/apps/42"
		);
	}
}
