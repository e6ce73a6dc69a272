use scraper::{Html, Selector};

use crate::error::{Result, ReviewsError};
use crate::models::{MediaToken, WebExperienceConfig};

const ENVIRONMENT_META: &str = r#"meta[name="web-experience-app/config/environment"]"#;

/// Pulls the media API token out of the storefront page markup.
pub fn extract_media_token(page: &str) -> Result<MediaToken> {
	let document = Html::parse_document(page);
	let selector = Selector::parse(ENVIRONMENT_META)
		.map_err(|e| ReviewsError::Parse(format!("bad selector: {:?}", e)))?;

	let content = document
		.select(&selector)
		.next()
		.and_then(|meta| meta.value().attr("content"))
		.ok_or_else(|| ReviewsError::Parse(String::from("environment meta tag not found")))?;

	let decoded = urlencoding::decode(content)
		.map_err(|e| ReviewsError::Parse(format!("environment meta is not utf-8: {}", e)))?;

	let environment: WebExperienceConfig = serde_json::from_str(&decoded)?;
	let token = environment.MEDIA_API.token.trim().to_string();

	if token.is_empty() {
		return Err(ReviewsError::Parse(String::from("empty media token")));
	}

	Ok(MediaToken(token))
}

#[cfg(test)]
pub(crate) fn storefront_page(token: &str) -> String {
	let environment = format!(r#"{{"MEDIA_API":{{"token":"{}"}},"other":1}}"#, token);
	format!(
		r#"<!DOCTYPE html><html><head>
<meta name="web-experience-app/config/environment" content="{}">
</head><body><h1>App</h1></body></html>"#,
		urlencoding::encode(&environment)
	)
}
