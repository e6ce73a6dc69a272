use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewsError {
	#[error("app id must be a positive number, got {0:?}")]
	InvalidAppId(String),

	#[error("app name must not be empty")]
	InvalidAppName,

	#[error("page number must start at 1, got {0}")]
	InvalidPage(u32),

	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("app id {app_id} not found in the App Store")]
	NotFound { app_id: String },

	#[error("unexpected HTTP status {status} from {url}")]
	Http { status: StatusCode, url: String },

	#[error("failed to parse storefront response: {0}")]
	Parse(String),

	#[error("invalid configuration: {0}")]
	Config(String),

	#[error("failed to write output: {0}")]
	Output(#[from] std::io::Error),
}

impl From<serde_json::Error> for ReviewsError {
	fn from(err: serde_json::Error) -> Self {
		ReviewsError::Parse(err.to_string())
	}
}

pub type Result<T> = std::result::Result<T, ReviewsError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn not_found_message_separates_id() {
		let err = ReviewsError::NotFound {
			app_id: String::from("123456789"),
		};
		assert_eq!(err.to_string(), "app id 123456789 not found in the App Store");
	}
}
