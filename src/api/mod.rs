pub mod app_info;
pub mod media_token;
pub mod reviews;

pub use self::reviews::ADDITIONAL_PLATFORMS;
