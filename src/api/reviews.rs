use log::info;
use serde::Serialize;

use crate::config::REVIEWS_PER_PAGE;
use crate::error::Result;
use crate::models::{Review, ReviewsPage};
use crate::services::StorefrontClient;
use crate::utils::reviews_api_url;

pub const ADDITIONAL_PLATFORMS: &str = "appletv,ipad,iphone,mac";

#[allow(non_snake_case)]
#[derive(Debug, Serialize)]
struct ReviewsQuery<'a> {
	l: &'a str,
	additionalPlatforms: &'a str,
	platform: &'a str,
	offset: usize,
}

impl Review {
	/// Reviews starting at `offset`, plus the `next` link when the
	/// storefront has more.
	pub fn get_reviews_page(
		client: &mut StorefrontClient,
		offset: usize,
	) -> Result<(Option<String>, Vec<Self>)> {
		info!("Scanning reviews from page #{:03}", offset / REVIEWS_PER_PAGE);

		let config = client.config().clone();
		let url = reviews_api_url(&config, client.app_id());
		let query = ReviewsQuery {
			l: &config.language,
			additionalPlatforms: ADDITIONAL_PLATFORMS,
			platform: "web",
			offset,
		};

		let page: ReviewsPage = client.get_json(&url, &query)?;
		let next = page.next.clone();

		Ok((next, page.into_reviews()?))
	}
}
