use log::{debug, info};
use reqwest::{
	blocking::{Client, Response},
	header::{self, HeaderMap, HeaderValue},
	StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::Config;
use crate::error::{Result, ReviewsError};
use crate::models::MediaToken;
use crate::utils::{app_page_url, validate_app_id, validate_app_name};

const USER_AGENT: &str = concat!("appstore-reviews/", env!("CARGO_PKG_VERSION"));

/// Blocking client bound to a single storefront app.
///
/// The media token is requested lazily on the first API call and reused
/// afterwards.
pub struct StorefrontClient {
	http: Client,
	config: Config,
	app_name: String,
	app_id: String,
	page_url: String,
	token: Option<MediaToken>,
}

impl StorefrontClient {
	/// Validates the app name and id; nothing is sent over the network yet.
	pub fn new(config: Config, app_name: &str, app_id: &str) -> Result<Self> {
		let app_id = validate_app_id(app_id)?;
		let app_name = validate_app_name(app_name)?;
		let page_url = app_page_url(&config, &app_name, &app_id);

		let http = Client::builder()
			.timeout(config.timeout)
			.user_agent(USER_AGENT)
			.build()?;

		Ok(Self {
			http,
			config,
			app_name,
			app_id,
			page_url,
			token: None,
		})
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn app_name(&self) -> &str {
		&self.app_name
	}

	pub fn app_id(&self) -> &str {
		&self.app_id
	}

	pub fn page_url(&self) -> &str {
		&self.page_url
	}

	/// GET the storefront page as plain HTML.
	pub fn get_page(&self) -> Result<String> {
		debug!("GET {}", &self.page_url);
		let response = self.http.get(&self.page_url).send()?;
		let response = self.check_status(response)?;
		Ok(response.text()?)
	}

	/// GET a catalog API resource with the media token attached.
	pub fn get_json<T, Q>(&mut self, url: &str, query: &Q) -> Result<T>
	where
		T: DeserializeOwned,
		Q: Serialize,
	{
		let token = self.token()?;
		let query = serde_urlencoded::to_string(query)
			.map_err(|e| ReviewsError::Parse(format!("bad query: {}", e)))?;
		let url = format!("{}?{}", url, query);

		debug!("GET {}", &url);
		let response = self
			.http
			.get(&url)
			.headers(self.api_headers(&token)?)
			.send()?;
		let body = self.check_status(response)?.text()?;

		Ok(serde_json::from_str(&body)?)
	}

	fn token(&mut self) -> Result<MediaToken> {
		if let Some(token) = &self.token {
			return Ok(token.clone());
		}

		info!("Authorization in App Store...");
		let token = MediaToken::fetch(self)?;
		info!("Successfully authorized in App Store");

		self.token = Some(token.clone());
		Ok(token)
	}

	fn api_headers(&self, token: &MediaToken) -> Result<HeaderMap<HeaderValue>> {
		let value = |v: &str| {
			v.parse::<HeaderValue>()
				.map_err(|e| ReviewsError::Parse(format!("invalid header value: {}", e)))
		};

		Ok(HeaderMap::from_iter(vec![
			(header::ACCEPT, value("application/json")?),
			(header::ORIGIN, value(&self.config.base_url)?),
			(header::REFERER, value(&self.page_url)?),
			(header::AUTHORIZATION, value(&token.bearer())?),
		]))
	}

	fn check_status(&self, response: Response) -> Result<Response> {
		let status = response.status();
		if status == StatusCode::NOT_FOUND {
			return Err(ReviewsError::NotFound {
				app_id: self.app_id.clone(),
			});
		}
		if !status.is_success() {
			return Err(ReviewsError::Http {
				status,
				url: response.url().to_string(),
			});
		}
		Ok(response)
	}
}
