use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use std::fs;
use std::path::Path;

use crate::error::ExtractError;

/// Concatenates paragraph texts, separated by a space.
pub(super) fn extract(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path).map_err(|e| ExtractError::read_error(path, e))?;

    let docx =
        docx_rs::read_docx(&bytes).map_err(|e| ExtractError::docx_error(path, format!("{e:?}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join(" "))
}

fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
