//! The anchor pattern locating the embedded literal in the target file.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Static regex for the `const char *html = "...";` assignment (compiled once).
///
/// `[^"]*` crosses newlines, so a previously spliced multi-line literal is
/// matched and replaced whole. The literal body never contains `"` (the
/// builder converts them to `'`), which is what keeps this match exact.
static ANCHOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#" *const char \*html = "[^"]*";"#).expect("anchor pattern is valid")
});

/// Replace the first anchor occurrence in `target` with `declaration`.
///
/// The replacement is inserted verbatim (`NoExpand`), since an embedded page
/// may contain `$`. Returns the updated text and whether a replacement happened;
/// when the anchor is absent the text comes back unchanged.
#[must_use]
pub fn splice(target: &str, declaration: &str) -> (String, bool) {
    let replaced = ANCHOR_REGEX.is_match(target);
    let updated = ANCHOR_REGEX.replace(target, NoExpand(declaration));
    (updated.into_owned(), replaced)
}
