use serde::Deserialize;

/// Anonymous bearer token the storefront page hands to its own web client.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaToken(pub String);

impl MediaToken {
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.0)
	}
}

// Content of `<meta name="web-experience-app/config/environment">`.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct WebExperienceConfig {
	pub MEDIA_API: MediaApi,
}

#[derive(Debug, Deserialize)]
pub struct MediaApi {
	pub token: String,
}
