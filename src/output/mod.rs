//! Result writers.
//!
//! - [`write_json`] / [`to_json`] - the whole result as pretty JSON, requires `json-output`
//! - [`write_csv`] / [`to_csv`] - flattened `Metric;Value` table, requires `csv-output`
//! - [`write_report`] / [`to_report`] - plain-text report, always available
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> love_theorem::Result<()> {
//! use love_theorem::output::{to_report, write_csv, write_json};
//! use love_theorem::{analyze, parse};
//!
//! let text = std::fs::read_to_string("chat.txt")?;
//! let result = analyze(&parse(&text))?;
//!
//! write_json(&result, "result.json")?;
//! write_csv(&result, "result.csv")?;
//! println!("{}", to_report(&result));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod report;

#[cfg(feature = "csv-output")]
pub use csv_writer::{metric_rows, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use report::{to_report, write_report};
