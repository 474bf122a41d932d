//! # utf8-tables
//!
//! Generates the Unicode lookup tables used by a runtime UTF-8 library from
//! `UnicodeData.txt`: one sorted code point array per general category, plus
//! lower->upper, upper->lower and title case-mapping pair arrays. Every array
//! is sorted so the consumer can binary-search it.
pub mod ucd;

// Re-export the main types for convenience
pub use ucd::{
    TableGenerator,
    EmitConfig,
    UcdError,
    Result,
    aggregate::aggregate,
    format::record::{parse_record, parse_records},
    types::models::{
        CaseMap,
        CaseMappings,
        CategoryTable,
        CodePoint,
        Record,
        Tables,
    },
};
