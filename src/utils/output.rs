use std::io::Write;

use clap::ValueEnum;

use crate::error::Result;
use crate::models::{AppInfo, Review};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
	#[default]
	Table,
	Csv,
	Json,
}

const CSV_HEADER: [&str; 7] = [
	"author",
	"title",
	"body",
	"is_edited",
	"date",
	"rating",
	"app_version",
];

pub fn write_reviews<W: Write>(out: &mut W, reviews: &[Review], format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Table => write_table(out, reviews)?,
		OutputFormat::Csv => write_csv(out, reviews)?,
		OutputFormat::Json => {
			serde_json::to_writer_pretty(&mut *out, reviews).map_err(std::io::Error::from)?;
			writeln!(out)?;
		}
	}
	out.flush()?;
	Ok(())
}

pub fn write_app_info<W: Write>(out: &mut W, info: &AppInfo, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Json => {
			serde_json::to_writer_pretty(&mut *out, info).map_err(std::io::Error::from)?;
			writeln!(out)?;
		}
		OutputFormat::Csv => {
			writeln!(out, "app_id,name,rating_count,average_rating")?;
			writeln!(
				out,
				"{},{},{},{}",
				info.app_id,
				csv_field(info.name.as_deref().unwrap_or("")),
				info.rating_count,
				info.average_rating.map(|v| v.to_string()).unwrap_or_default()
			)?;
		}
		OutputFormat::Table => {
			let name = info.name.as_deref().unwrap_or("(unknown)");
			write!(out, "{} (id{}): {} ratings", name, info.app_id, info.rating_count)?;
			if let Some(average) = info.average_rating {
				write!(out, ", average {:.2}", average)?;
			}
			writeln!(out)?;
		}
	}
	out.flush()?;
	Ok(())
}

fn write_table<W: Write>(out: &mut W, reviews: &[Review]) -> std::io::Result<()> {
	for (i, review) in reviews.iter().enumerate() {
		if i > 0 {
			writeln!(out)?;
		}
		let stars = "★".repeat(review.rating as usize);
		writeln!(
			out,
			"{} {} | {}{}",
			stars,
			review.author,
			review.date.format("%Y-%m-%d %H:%M"),
			if review.is_edited { " (edited)" } else { "" }
		)?;
		if let Some(version) = &review.app_version {
			writeln!(out, "version {}", version)?;
		}
		if let Some(title) = &review.title {
			writeln!(out, "{}", title)?;
		}
		writeln!(out, "{}", review.body)?;
		if let Some(response) = &review.developer_response {
			writeln!(out, "  developer ({}): {}", response.modified.format("%Y-%m-%d"), response.body)?;
		}
	}
	Ok(())
}

fn write_csv<W: Write>(out: &mut W, reviews: &[Review]) -> std::io::Result<()> {
	writeln!(out, "{}", CSV_HEADER.join(","))?;
	for review in reviews {
		let row = [
			csv_field(&review.author),
			csv_field(review.title.as_deref().unwrap_or("")),
			csv_field(&review.body),
			review.is_edited.to_string(),
			review.date.to_rfc3339(),
			review.rating.to_string(),
			csv_field(review.app_version.as_deref().unwrap_or("")),
		];
		writeln!(out, "{}", row.join(","))?;
	}
	Ok(())
}

fn csv_field(value: &str) -> String {
	if value.contains(&[',', '"', '\n', '\r'][..]) {
		format!("\"{}\"", value.replace('"', "\"\""))
	} else {
		value.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};

	fn review(author: &str, body: &str) -> Review {
		Review {
			author: author.to_string(),
			rating: 5,
			title: Some(String::from("Great")),
			body: body.to_string(),
			date: Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap(),
			app_version: None,
			is_edited: false,
			developer_response: None,
		}
	}

	fn render(reviews: &[Review], format: OutputFormat) -> String {
		let mut buf = Vec::new();
		write_reviews(&mut buf, reviews, format).unwrap();
		String::from_utf8(buf).unwrap()
	}

	#[test]
	fn csv_quotes_special_fields() {
		let text = render(&[review("ivan", "good, \"really\"\nyes")], OutputFormat::Csv);
		let mut lines = text.lines();
		assert_eq!(lines.next(), Some("author,title,body,is_edited,date,rating,app_version"));
		assert_eq!(
			text.split_once('\n').unwrap().1,
			"ivan,Great,\"good, \"\"really\"\"\nyes\",false,2023-01-02T03:04:05+00:00,5,\n"
		);
	}

	#[test]
	fn json_is_an_array() {
		let text = render(&[review("a", "x"), review("b", "y")], OutputFormat::Json);
		let value: serde_json::Value = serde_json::from_str(&text).unwrap();
		let items = value.as_array().unwrap();
		assert_eq!(items.len(), 2);
		assert_eq!(items[1]["author"], "b");
		assert_eq!(items[0]["rating"], 5);
	}

	#[test]
	fn table_lists_each_review() {
		let text = render(&[review("a", "first"), review("b", "second")], OutputFormat::Table);
		assert!(text.contains("★★★★★ a"));
		assert!(text.contains("second"));
	}

	#[test]
	fn empty_list_in_json() {
		assert_eq!(render(&[], OutputFormat::Json).trim(), "[]");
	}

	#[test]
	fn app_info_table() {
		let info = AppInfo {
			app_id: String::from("42"),
			name: Some(String::from("Demo")),
			rating_count: 120,
			average_rating: Some(4.5),
		};
		let mut buf = Vec::new();
		write_app_info(&mut buf, &info, OutputFormat::Table).unwrap();
		assert_eq!(String::from_utf8(buf).unwrap(), "Demo (id42): 120 ratings, average 4.50\n");
	}
}
