//! tabparse - Format-agnostic loader for tabular data
//!
//! 区切り文字テキスト（CSV）、スプレッドシート（XLSなど）、固定長テキストを
//! 共通の行・列表現（`Vec<Vec<String>>`）に変換するクレートです。
//! 各フォーマットは`Parser`トレイトを実装したバックエンドとして提供され、
//! 識別子（`ParserId`）でレジストリから選択できます。
//!
//! # Quick Start
//!
//! ```rust
//! use tabparse::{parse, ParseOptions, ParserId};
//!
//! fn main() -> Result<(), tabparse::TabParseError> {
//!     let options = ParseOptions::new().with_widths(vec![3, 2, 5]);
//!     let table = parse(ParserId::FixedWidth, b"abcdexyz\nfoo", &options)?;
//!     assert_eq!(table, vec![vec!["abc", "de", "xyz"], vec!["foo", "", ""]]);
//!     Ok(())
//! }
//! ```
//!
//! # Loading Files
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tabparse::{load, ParseOptions, ParserId};
//!
//! fn main() -> Result<(), tabparse::TabParseError> {
//!     let options = ParseOptions::new().with_field_separator(";");
//!     let table = load(ParserId::Csv, Path::new("data.csv"), &options)?;
//!     println!("{} rows", table.len());
//!     Ok(())
//! }
//! ```
//!
//! # Discovering Backends
//!
//! 利用できるバックエンドは有効なCargo feature（`csv`、`xls`）に依存します。
//!
//! ```rust
//! use tabparse::available_parsers;
//!
//! for id in available_parsers() {
//!     println!("{}", id);
//! }
//! ```

mod api;
mod builder;
mod error;
mod parser;
mod registry;
mod types;

// 公開API
pub use api::ParserId;
pub use builder::ParseOptions;
pub use error::TabParseError;
#[cfg(feature = "csv")]
pub use parser::{CsvParser, FastCsvParser};
#[cfg(feature = "xls")]
pub use parser::ExcelParser;
pub use parser::{FixedWidthParser, Parser};
pub use registry::{available_parsers, load, parse, parser, ParserFactory, ParserRegistry};
pub use types::{Row, Table};
