use crate::error::Result;
use crate::models::MediaToken;
use crate::services::StorefrontClient;
use crate::utils::extract_media_token;

impl MediaToken {
	pub fn fetch(client: &StorefrontClient) -> Result<Self> {
		let page = client.get_page()?;
		extract_media_token(&page)
	}
}
