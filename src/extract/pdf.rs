use pdf_extract::{Document, PlainTextOutput};
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::{trace, warn};

use crate::error::ExtractError;

/// Concatenates the text of every page, separated by a space. A page that
/// cannot be extracted contributes an empty string.
pub(super) fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|e| ExtractError::read_error(path, e))?;

    // lopdf panics on some malformed inputs instead of returning an error.
    let mut doc = panic::catch_unwind(|| Document::load_mem(&bytes))
        .map_err(|_| ExtractError::pdf_error(path, "parser panicked"))?
        .map_err(|e| ExtractError::pdf_error(path, e.to_string()))?;

    if doc.is_encrypted() {
        doc.decrypt("")
            .map_err(|e| ExtractError::pdf_error(path, e.to_string()))?;
    }

    let pages: Vec<String> = doc
        .get_pages()
        .into_keys()
        .map(|page| {
            page_text(&doc, page).unwrap_or_else(|reason| {
                warn!(path = %path.display(), page, %reason, "page text extraction failed");
                String::new()
            })
        })
        .collect();

    trace!(path = %path.display(), pages = pages.len(), "pdf pages extracted");
    Ok(pages.join(" "))
}

fn page_text(doc: &Document, page: u32) -> Result<String, String> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut text = String::new();
        {
            let mut output = PlainTextOutput::new(&mut text);
            pdf_extract::output_doc_page(doc, &mut output, page)?;
        }
        Ok::<_, pdf_extract::OutputError>(text)
    }));

    match outcome {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(_) => Err("parser panicked".to_string()),
    }
}
