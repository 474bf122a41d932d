//! Text format layer: reading database lines and writing C table source.
//!
//! - [`record`]: parses `UnicodeData.txt` lines into [`Record`](crate::Record)s
//! - [`header`]: license banner and the version comment block
//! - [`tables`]: sorted array literals for categories and case relations
//!
//! ```text
//! UnicodeData.txt ── record::parse_records() ──> Vec<Record>
//!                                                   │
//!                                        aggregate::aggregate()
//!                                                   │
//! C source <── header::write() + tables::write() ── Tables
//! ```

pub mod header;
pub mod record;
pub mod tables;
