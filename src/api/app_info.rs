use serde::Serialize;

use crate::api::ADDITIONAL_PLATFORMS;
use crate::error::{Result, ReviewsError};
use crate::models::{AppInfo, AppInfoResponse};
use crate::services::StorefrontClient;
use crate::utils::app_api_url;

#[allow(non_snake_case)]
#[derive(Debug, Serialize)]
struct AppInfoQuery<'a> {
	platform: &'a str,
	additionalPlatforms: &'a str,
	l: String,
}

impl AppInfo {
	pub fn get_app_info(client: &mut StorefrontClient) -> Result<Self> {
		let config = client.config().clone();
		let url = app_api_url(&config, client.app_id());
		let query = AppInfoQuery {
			platform: "web",
			additionalPlatforms: ADDITIONAL_PLATFORMS,
			l: format!("{}-{}", &config.language, &config.language),
		};

		let response: AppInfoResponse = client.get_json(&url, &query)?;

		let app = response
			.data
			.into_iter()
			.next()
			.ok_or_else(|| ReviewsError::NotFound {
				app_id: client.app_id().to_string(),
			})?;

		Ok(AppInfo {
			app_id: app.id.unwrap_or_else(|| client.app_id().to_string()),
			name: app.attributes.name,
			rating_count: app.attributes.userRating.ratingCount,
			average_rating: app.attributes.userRating.value,
		})
	}
}
