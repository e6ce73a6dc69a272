pub mod reviews_processing;

pub use self::reviews_processing::*;
