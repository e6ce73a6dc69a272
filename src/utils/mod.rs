pub mod html;
pub mod output;
pub mod url;

pub use self::html::*;
pub use self::output::*;
pub use self::url::*;
