//! OMNI2 hourly record parser
//!
//! Turns whitespace-delimited OMNI2 lines into [`OmniRecord`](crate::models::OmniRecord)
//! values with explicit missing data.
//!
//! ## Architecture
//!
//! - [`schema`] - Enumerated column schema with sentinels, validated once
//! - [`sentinel`] - Table-driven sentinel to `None` resolution
//! - [`record_parser`] - Line tokenizing, field decoding and timestamp derivation
//!
//! ## Usage
//!
//! ```rust
//! use omni_events::parser::RecordParser;
//!
//! # fn example(line: &str) -> omni_events::Result<()> {
//! let parser = RecordParser::new()?;
//! let record = parser.parse_line(line)?;
//! if let Some(timestamp) = record.timestamp {
//!     println!("{} speed={:?}", timestamp, record.speed);
//! }
//! # Ok(())
//! # }
//! ```

pub mod record_parser;
pub mod schema;
pub mod sentinel;

#[cfg(test)]
pub mod tests;

pub use record_parser::{RecordParser, timestamp_from_parts};
pub use schema::{FieldSpec, OmniSchema, STANDARD_FIELDS};
pub use sentinel::resolve_sentinel;
