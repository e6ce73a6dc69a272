mod api;
mod config;
mod error;
mod models;
mod processing;
mod services;
mod utils;

use clap::Parser;
use config::Config;
use dotenv::dotenv;
use processing::{fetch_app_info, fetch_reviews, fetch_reviews_page};
use std::error::Error;
use std::io;
use utils::{write_app_info, write_reviews, OutputFormat};

/// App Store app reviews parser
#[derive(Parser, Debug)]
#[command(name = "appstore-reviews", version)]
struct Cli {
	/// App Store app name, as it appears in the app page URL
	app_name: String,

	/// App Store app id (the digits after `id` in the app page URL)
	app_id: String,

	/// Fetch only this page of reviews (10 reviews per page, starting at 1)
	#[arg(short, long, value_name = "N")]
	page: Option<u32>,

	/// Output format
	#[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
	format: OutputFormat,

	/// Print the app's rating count instead of its reviews
	#[arg(long, default_value_t = false, conflicts_with = "page")]
	info: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
	dotenv().ok();

	if std::env::var_os("RUST_LOG").is_none() {
		std::env::set_var("RUST_LOG", "appstore_reviews=info");
	}
	env_logger::init();

	let cli = Cli::parse();
	let config = Config::init()?;

	let stdout = io::stdout();
	let mut out = stdout.lock();

	if cli.info {
		let app_info = fetch_app_info(&config, &cli.app_name, &cli.app_id)?;
		write_app_info(&mut out, &app_info, cli.format)?;
		return Ok(());
	}

	let reviews = match cli.page {
		Some(page) => fetch_reviews_page(&config, &cli.app_name, &cli.app_id, page)?,
		None => fetch_reviews(&config, &cli.app_name, &cli.app_id)?,
	};
	write_reviews(&mut out, &reviews, cli.format)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn two_positionals_and_flags() {
		let cli = Cli::parse_from(["appstore-reviews", "sber", "492224193", "--format", "csv", "-p", "2"]);
		assert_eq!(cli.app_name, "sber");
		assert_eq!(cli.app_id, "492224193");
		assert_eq!(cli.format, OutputFormat::Csv);
		assert_eq!(cli.page, Some(2));
		assert!(!cli.info);
	}

	#[test]
	fn info_conflicts_with_page() {
		let result = Cli::try_parse_from(["appstore-reviews", "sber", "492224193", "--info", "--page", "3"]);
		assert!(result.is_err());
		let cli = Cli::try_parse_from(["appstore-reviews", "sber", "492224193", "--info"]).unwrap();
		assert!(cli.info);
	}

	#[test]
	fn app_id_is_required() {
		assert!(Cli::try_parse_from(["appstore-reviews", "sber"]).is_err());
	}
}
