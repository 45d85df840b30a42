use lopdf::Document;

use crate::errors::AppResult;

/// Extracts the text content of a PDF held in memory, page by page in
/// page order, concatenated into one grounding string.
///
/// Failures surface as `DocumentError` so the caller can fail the
/// request instead of treating the error text as document content.
pub fn extract_pdf_text(data: &[u8]) -> AppResult<String> {
    let document = Document::load_mem(data)?;

    let mut text = String::new();
    for page_number in document.get_pages().keys() {
        text.push_str(&document.extract_text(&[*page_number])?);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn garbage_bytes_fail_with_document_error() {
        let err = extract_pdf_text(b"definitely not a pdf").expect_err("should fail");

        assert!(matches!(err, AppError::DocumentError(_)));
    }

    #[test]
    fn empty_input_fails_with_document_error() {
        let err = extract_pdf_text(&[]).expect_err("should fail");

        assert!(matches!(err, AppError::DocumentError(_)));
    }
}
