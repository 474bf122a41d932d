//! Groups parsed records into category tables and case relations.

use log::{debug, warn};

use super::types::models::{CaseMap, CodePoint, Record, Tables};

/// Builds the category grouping and the three case relations from a full
/// record set.
///
/// Each mapping field files the record under the relation named for the
/// *source* side of the pair:
///
/// - an uppercase mapping means the record is the lowercase form, so it goes
///   into `lower_to_upper` as `(code_point, upper_mapping)`
/// - a lowercase mapping goes into `upper_to_lower` as `(code_point, lower_mapping)`
/// - a titlecase mapping goes into `title` as `(code_point, title_mapping)`
///
/// The runtime library looks pairs up in exactly this orientation.
/// Record order does not matter; the first record seen for a key wins.
pub fn aggregate<'a, I>(records: I) -> Tables
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut tables = Tables::default();
    let mut total = 0usize;

    for record in records {
        total += 1;
        tables.categories.insert(&record.category, record.code_point);

        let cp = record.code_point;
        let mappings = &mut tables.case_mappings;
        add_mapping(&mut mappings.lower_to_upper, "lower->upper", cp, record.upper_mapping);
        add_mapping(&mut mappings.upper_to_lower, "upper->lower", cp, record.lower_mapping);
        add_mapping(&mut mappings.title, "title", cp, record.title_mapping);
    }

    debug!(
        "Aggregated {} records: {} categories, {} lower->upper, {} upper->lower, {} title",
        total,
        tables.categories.len(),
        tables.case_mappings.lower_to_upper.len(),
        tables.case_mappings.upper_to_lower.len(),
        tables.case_mappings.title.len(),
    );
    tables
}

fn add_mapping(map: &mut CaseMap, relation: &str, from: CodePoint, to: Option<CodePoint>) {
    if let Some(to) = to
        && !map.insert(from, to)
    {
        warn!("Duplicate {} mapping for {:#06X} ignored", relation, from);
    }
}
