//! License banner and the version comment that open every generated file.

use std::fmt::Write;

use crate::ucd::types::config::EmitConfig;

/// Comment line separating sections of the generated file.
pub const SECTION_RULE: &str =
    "/* - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - */";

const LICENSE_BODY: &[&str] = &[
    " * ",
    " * Permission is hereby granted, free of charge, to any person obtaining a copy",
    " * of this software and associated documentation files (the \"Software\"), to deal",
    " * in the Software without restriction, including without limitation the rights",
    " * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell",
    " * copies of the Software, and to permit persons to whom the Software is",
    " * furnished to do so, subject to the following conditions:",
    " * ",
    " * The above copyright notice and this permission notice shall be included in",
    " * all copies or substantial portions of the Software.",
    " * ",
    " * THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR",
    " * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,",
    " * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE",
    " * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER",
    " * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,",
    " * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN",
    " * THE SOFTWARE.",
    " */",
];

/// Writes the license banner, the `#include` line and the comment block
/// naming the database version.
pub fn write(out: &mut String, version: &str, config: &EmitConfig) -> std::fmt::Result {
    writeln!(out, "/* The MIT License (MIT)")?;
    writeln!(out, " * ")?;
    match config.copyright_year {
        Some(year) => writeln!(out, " * Copyright (c) {} {}", year, config.copyright_holder)?,
        None => writeln!(out, " * Copyright (c) {}", config.copyright_holder)?,
    }
    for line in LICENSE_BODY {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    writeln!(out, "#include \"{}\"", config.include_header)?;
    writeln!(out)?;

    writeln!(out, "{}", SECTION_RULE.trim_end_matches(" */"))?;
    writeln!(out, " * Mapping tables generated from Unicode {version} UnicodeData.txt.")?;
    writeln!(out, " * ")?;
    writeln!(out, " * All element in tables _must_ be in sorted order low to high. Access of")?;
    writeln!(
        out,
        " * the tables uses a binary search which will only work if the tables are sorted."
    )?;
    writeln!(out, "*/")?;
    writeln!(out)?;
    writeln!(out, "{SECTION_RULE}")?;
    writeln!(out)
}
