use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AppInfo {
	pub app_id: String,
	pub name: Option<String>,
	pub rating_count: u64,
	pub average_rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AppInfoResponse {
	pub data: Vec<AppResource>,
}

#[derive(Debug, Deserialize)]
pub struct AppResource {
	pub id: Option<String>,
	pub attributes: AppAttributes,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct AppAttributes {
	pub name: Option<String>,
	pub userRating: UserRating,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct UserRating {
	pub ratingCount: u64,
	pub value: Option<f64>,
}
