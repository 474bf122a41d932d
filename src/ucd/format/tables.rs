//! Renders aggregated tables as sorted C array literals.
//!
//! The runtime library binary-searches every table, so an unsorted array
//! does not crash anything, it silently returns wrong answers. Each
//! sequence is therefore sorted and de-duplicated here, right before it is
//! written, regardless of what the aggregator already guarantees.

use std::fmt::Write;
use log::debug;

use super::header::SECTION_RULE;
use crate::ucd::types::config::EmitConfig;
use crate::ucd::types::models::{CaseMap, CategoryTable, CaseMappings, CodePoint};

/// Name and key/value comment of each case relation, in emission order.
const LOWER_TO_UPPER: (&str, &str) = ("lowtoup", "idx 0 = lower cp, idx 1 = upper cp");
const UPPER_TO_LOWER: (&str, &str) = ("uptolow", "idx 0 = upper cp, idx 1 = lower cp");
const TITLE: (&str, &str) = ("title", "idx 0 = cp, idx 1 = title cp");

/// Writes one `<type> <prefix><label>[]` array per category, ascending by label.
pub fn write_categories(
    out: &mut String,
    categories: &CategoryTable,
    config: &EmitConfig,
) -> std::fmt::Result {
    for (label, points) in categories.iter() {
        let points = sorted_points(points);
        debug!("Emitting category {}: {} code points", label, points.len());

        let items: Vec<String> = points.iter().map(|&cp| format_code_point(cp)).collect();
        write_array(
            out,
            &config.code_point_type,
            label,
            &items,
            config.code_points_per_line,
            config,
        )?;
    }
    Ok(())
}

/// Writes the lower->upper, upper->lower and title relations, in that order.
pub fn write_case_mappings(
    out: &mut String,
    mappings: &CaseMappings,
    config: &EmitConfig,
) -> std::fmt::Result {
    for (map, (name, comment)) in [
        (&mappings.lower_to_upper, LOWER_TO_UPPER),
        (&mappings.upper_to_lower, UPPER_TO_LOWER),
        (&mappings.title, TITLE),
    ] {
        let pairs = sorted_pairs(map);
        debug!("Emitting case relation {}: {} pairs", name, pairs.len());

        writeln!(out, "/* {comment} */")?;
        let items: Vec<String> = pairs
            .iter()
            .map(|&(from, to)| {
                format!("{{ {}, {} }}", format_code_point(from), format_code_point(to))
            })
            .collect();
        write_array(out, &config.pair_type, name, &items, config.pairs_per_line, config)?;
    }
    Ok(())
}

/// Strictly ascending copy of `points`.
pub fn sorted_points(points: &[CodePoint]) -> Vec<CodePoint> {
    let mut sorted = points.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/// Pairs of `map` ordered by strictly ascending key.
pub fn sorted_pairs(map: &CaseMap) -> Vec<(CodePoint, CodePoint)> {
    let mut pairs: Vec<_> = map.iter().collect();
    pairs.sort_unstable_by_key(|&(from, _)| from);
    pairs.dedup_by_key(|&mut (from, _)| from);
    pairs
}

fn format_code_point(cp: CodePoint) -> String {
    format!("0x{cp:04X}")
}

/// Writes the array declaration, its `_len` constant and the trailing section rule.
fn write_array(
    out: &mut String,
    element_type: &str,
    name: &str,
    items: &[String],
    per_line: usize,
    config: &EmitConfig,
) -> std::fmt::Result {
    let prefix = &config.table_prefix;
    writeln!(out, "const {element_type} {prefix}{name}[] = {{")?;

    let mut lines = items.chunks(per_line.max(1)).peekable();
    while let Some(line) = lines.next() {
        let separator = if lines.peek().is_some() { "," } else { "" };
        writeln!(out, "\t{}{}", line.join(", "), separator)?;
    }

    writeln!(out, "}};")?;
    writeln!(out, "const {} {prefix}{name}_len = {};", config.length_type, items.len())?;
    writeln!(out)?;
    writeln!(out, "{SECTION_RULE}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_counts() {
        let mut categories = CategoryTable::new();
        for cp in [0x35, 0x30, 0x31, 0x32, 0x33, 0x34] {
            categories.insert("Nd", cp);
        }
        let config = EmitConfig {
            code_points_per_line: 4,
            ..EmitConfig::default()
        };

        let mut out = String::new();
        write_categories(&mut out, &categories, &config).unwrap();

        let expected = format!(
            "const M_uint32 M_utf8_table_Nd[] = {{\n\
             \t0x0030, 0x0031, 0x0032, 0x0033,\n\
             \t0x0034, 0x0035\n\
             }};\n\
             const size_t M_utf8_table_Nd_len = 6;\n\
             \n\
             {SECTION_RULE}\n\
             \n"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn duplicate_points_are_emitted_once() {
        assert_eq!(sorted_points(&[0x42, 0x41, 0x42]), vec![0x41, 0x42]);
    }

    #[test]
    fn empty_relation_still_declares_array() {
        let mut out = String::new();
        write_case_mappings(&mut out, &CaseMappings::default(), &EmitConfig::default()).unwrap();
        assert!(out.contains("const M_utf8_cp_map_t M_utf8_table_lowtoup[] = {\n};\n"));
        assert!(out.contains("const size_t M_utf8_table_title_len = 0;"));
    }
}
