//! Rendering options for the emitted C source.

/// Controls naming and layout of the generated tables.
///
/// The defaults reproduce the layout the runtime UTF-8 library expects.
/// Only the copyright year is left unset, so that repeated runs over the
/// same database stay byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    pub copyright_holder: String,
    /// Year printed in the license header. Omitted from the header when `None`.
    pub copyright_year: Option<u16>,
    /// Internal header pulled in with `#include`.
    pub include_header: String,
    /// Prefix of every array and length constant name.
    pub table_prefix: String,
    /// C element type of the category arrays.
    pub code_point_type: String,
    /// C element type of the case-mapping arrays.
    pub pair_type: String,
    /// C type of the `_len` constants.
    pub length_type: String,
    /// Line wrap for category arrays. Values below 1 are treated as 1.
    pub code_points_per_line: usize,
    /// Line wrap for case-mapping arrays. Values below 1 are treated as 1.
    pub pairs_per_line: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            copyright_holder: "Monetra Technologies, LLC.".to_string(),
            copyright_year: None,
            include_header: "m_utf8_int.h".to_string(),
            table_prefix: "M_utf8_table_".to_string(),
            code_point_type: "M_uint32".to_string(),
            pair_type: "M_utf8_cp_map_t".to_string(),
            length_type: "size_t".to_string(),
            code_points_per_line: 10,
            pairs_per_line: 5,
        }
    }
}
