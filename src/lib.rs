//! # Getting Started
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! countycharts = "*"
//! ```
//!
//! ```rust,no_run
//! use countycharts::derive::{derive_fields, Rule};
//! use countycharts::render::{render_chart, ChartKind, ChartSpecBuilder};
//! use countycharts::table::Table;
//!
//! let mut table = Table::new("sectors", &["sector", "jobs"]);
//! table.push(vec!["Healthcare".into(), 9700.into()]).unwrap();
//! table.push(vec!["Energy".into(), 2900.into()]).unwrap();
//! // Derive a percentage column and render a bar chart of the table
//! let table = derive_fields(&table, &[Rule::percent_of_total("jobs", "pct")]).unwrap();
//! let spec = ChartSpecBuilder::default()
//!     .title("Jobs by sector")
//!     .kind(ChartKind::Bar)
//!     .category("sector")
//!     .value("jobs")
//!     .build()
//!     .unwrap();
//! render_chart(&table, &spec, "sectors.png".as_ref()).unwrap();
//! ```

#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate log;

pub mod derive;
pub mod error;
mod format;
pub mod render;
pub mod reports;
pub mod table;

pub use crate::error::{Error, Result};
