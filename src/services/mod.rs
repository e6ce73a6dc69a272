pub mod storefront;

pub use self::storefront::*;
