use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewsError};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Review {
	pub author: String,
	pub rating: u8,
	pub title: Option<String>,
	pub body: String,
	pub date: DateTime<Utc>,
	pub app_version: Option<String>,
	pub is_edited: bool,
	pub developer_response: Option<DeveloperResponse>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DeveloperResponse {
	pub id: i64,
	pub body: String,
	pub modified: DateTime<Utc>,
}

/// One page of `/v1/catalog/{country}/apps/{id}/reviews`.
#[derive(Debug, Deserialize)]
pub struct ReviewsPage {
	pub data: Vec<ReviewResource>,
	pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewResource {
	pub attributes: ReviewAttributes,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct ReviewAttributes {
	pub userName: String,
	pub rating: i64,
	pub title: Option<String>,
	pub review: String,
	pub date: String,
	#[serde(default)]
	pub isEdited: bool,
	pub appVersion: Option<String>,
	pub developerResponse: Option<DeveloperResponseAttributes>,
}

#[derive(Debug, Deserialize)]
pub struct DeveloperResponseAttributes {
	pub id: i64,
	pub body: String,
	pub modified: String,
}

impl TryFrom<ReviewAttributes> for Review {
	type Error = ReviewsError;

	fn try_from(attrs: ReviewAttributes) -> Result<Self> {
		let author = attrs.userName.trim().to_string();
		if author.is_empty() {
			return Err(ReviewsError::Parse(String::from("review without author")));
		}

		let rating = u8::try_from(attrs.rating)
			.ok()
			.filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
			.ok_or_else(|| {
				ReviewsError::Parse(format!("rating {} out of range for {}", attrs.rating, author))
			})?;

		let developer_response = match attrs.developerResponse {
			Some(response) => Some(DeveloperResponse {
				id: response.id,
				body: response.body,
				modified: parse_date(&response.modified)?,
			}),
			None => None,
		};

		Ok(Review {
			author,
			rating,
			title: attrs.title.filter(|t| !t.is_empty()),
			body: attrs.review,
			date: parse_date(&attrs.date)?,
			app_version: attrs.appVersion.filter(|v| !v.is_empty()),
			is_edited: attrs.isEdited,
			developer_response,
		})
	}
}

impl ReviewsPage {
	/// Converts every entry, failing on the first malformed one.
	pub fn into_reviews(self) -> Result<Vec<Review>> {
		self.data
			.into_iter()
			.map(|resource| Review::try_from(resource.attributes))
			.collect()
	}
}

pub fn parse_date(value: &str) -> Result<DateTime<Utc>> {
	DateTime::parse_from_rfc3339(value)
		.map(|date| date.with_timezone(&Utc))
		.map_err(|e| ReviewsError::Parse(format!("invalid date {:?}: {}", value, e)))
}
