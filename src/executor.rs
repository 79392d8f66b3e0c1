//! The embed pipeline: read the page, build the literal, splice it into the
//! target, overwrite the target.

use crate::error::EmbedError;
use crate::report::EmbedReport;
use crate::{anchor, literal};
use std::fs;
use std::path::Path;

/// Read `path` to a string, tagging failures with the path.
fn read_file(path: &Path) -> Result<String, EmbedError> {
    fs::read_to_string(path).map_err(|err| EmbedError::Io {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Run the full embed pipeline for one source/target pair.
///
/// The target is rewritten even when the anchor pattern is absent (the
/// content is then unchanged); the report records the missed anchor.
///
/// # Errors
///
/// Returns `Err` if either file cannot be read, the target cannot be
/// written, or the source has no embeddable lines.
pub fn embed_file(source: &Path, target: &Path) -> Result<EmbedReport, EmbedError> {
    let source_text = read_file(source)?;

    let built = literal::build(&source_text).ok_or_else(|| EmbedError::EmptySource {
        path: source.to_path_buf(),
    })?;

    let target_text = read_file(target)?;
    let (updated, anchor_replaced) = anchor::splice(&target_text, &built.declaration);

    fs::write(target, &updated).map_err(|err| EmbedError::Io {
        path: target.to_path_buf(),
        source: err,
    })?;

    Ok(EmbedReport {
        source: source.display().to_string(),
        target: target.display().to_string(),
        lines_embedded: built.lines_embedded,
        comments_skipped: built.comments_skipped,
        literal_bytes: built.declaration.len(),
        anchor_replaced,
    })
}
