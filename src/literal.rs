//! Conversion of an HTML page into a C string-literal declaration.
//!
//! Each source line becomes one physical line of the declaration, joined by
//! an escaped `\n` plus a C line continuation, so the embedded page stays
//! readable in the generated source file.

/// Declaration prefix, matching the assignment shape in the target file.
const DECL_PREFIX: &str = "  const char *html = \"";

/// Joins two embedded lines: an escaped newline followed by a line
/// continuation backslash and a real newline.
const LINE_JOIN: &str = "\\n\\\n";

/// Closes the declaration after the last embedded line.
const DECL_CLOSE: &str = "\";";

/// A declaration built from a source file, with the counts the summary
/// report needs.
#[derive(Debug)]
pub struct Literal {
    /// The full `const char *html = "...";` declaration text.
    pub declaration: String,
    /// Number of source lines embedded in the declaration.
    pub lines_embedded: usize,
    /// Number of `//` comment lines dropped from the source.
    pub comments_skipped: usize,
}

/// Check whether a source line is a `//` comment to be dropped entirely.
fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// Strip a trailing `\n` or `\r\n` line terminator.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Build the declaration embedding `source`.
///
/// Every embedded line has `"` converted to `'` so it can sit inside a
/// double-quoted C literal. Returns `None` when the source has no
/// embeddable lines (empty, or every line is a comment); the caller
/// decides how to fail.
#[must_use]
pub fn build(source: &str) -> Option<Literal> {
    let (kept, skipped): (Vec<&str>, Vec<&str>) = source
        .split_inclusive('\n')
        .partition(|line| !is_comment(line));

    let last = kept.len().checked_sub(1)?;

    let mut declaration = String::from(DECL_PREFIX);
    for (i, raw) in kept.iter().enumerate() {
        let line = strip_line_ending(raw).replace('"', "'");
        declaration.push_str(&line);
        declaration.push_str(if i == last { DECL_CLOSE } else { LINE_JOIN });
    }

    Some(Literal {
        declaration,
        lines_embedded: kept.len(),
        comments_skipped: skipped.len(),
    })
}
