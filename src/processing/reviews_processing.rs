use log::{info, warn};

use crate::config::{Config, REVIEWS_PER_PAGE};
use crate::error::{Result, ReviewsError};
use crate::models::{AppInfo, Review};
use crate::services::StorefrontClient;

/// Every review the storefront exposes for the app, in page order.
///
/// Follows the `next` link until the storefront stops returning one or
/// `config.max_reviews` is reached.
pub fn fetch_reviews(config: &Config, app_name: &str, app_id: &str) -> Result<Vec<Review>> {
	let mut client = StorefrontClient::new(config.clone(), app_name, app_id)?;
	info!("Fetching reviews for \"{}\" from {}", client.app_name(), client.page_url());

	let max_reviews = config.max_reviews;
	let mut reviews: Vec<Review> = Vec::new();
	let mut offset = 0;

	while reviews.len() < max_reviews {
		let (next, page) = Review::get_reviews_page(&mut client, offset)?;
		let received = page.len();
		reviews.extend(page);

		if next.is_none() || received == 0 {
			break;
		}
		offset += received;
	}

	if reviews.len() > max_reviews {
		warn!(
			"App \"{}\" has more than {} reviews, keeping the first {}",
			client.app_name(),
			max_reviews,
			max_reviews
		);
		reviews.truncate(max_reviews);
	}

	info!("Scanned reviews: {}", reviews.len());
	Ok(reviews)
}

/// One page of reviews, pages numbered from 1.
pub fn fetch_reviews_page(
	config: &Config,
	app_name: &str,
	app_id: &str,
	page: u32,
) -> Result<Vec<Review>> {
	if page == 0 {
		return Err(ReviewsError::InvalidPage(page));
	}
	let mut client = StorefrontClient::new(config.clone(), app_name, app_id)?;

	let offset = (page as usize - 1) * REVIEWS_PER_PAGE;
	let (_, reviews) = Review::get_reviews_page(&mut client, offset)?;

	info!("Page #{:03} successfully scanned", page);
	Ok(reviews)
}

pub fn fetch_app_info(config: &Config, app_name: &str, app_id: &str) -> Result<AppInfo> {
	let mut client = StorefrontClient::new(config.clone(), app_name, app_id)?;
	let app_info = AppInfo::get_app_info(&mut client)?;

	info!(
		"App \"{}\" has {} reviews",
		client.app_name(),
		app_info.rating_count
	);
	Ok(app_info)
}
