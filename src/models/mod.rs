pub mod app_info;
pub mod media_token;
pub mod review;

pub use self::app_info::*;
pub use self::media_token::*;
pub use self::review::*;
