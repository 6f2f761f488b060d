//! Resume/file text ingestion — multipart upload in, extracted text out.
//! PDF extraction via `pdf-extract`; plain text via UTF-8 decode. Image OCR
//! is a black-box concern handled outside this service.

pub mod handlers;

use bytes::Bytes;

use crate::errors::AppError;

/// Extracts plain text from an uploaded file based on its name.
pub fn extract_text(file_name: &str, data: &Bytes) -> Result<String, AppError> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Validation(format!("could not read PDF: {e}")))
    } else if lower.ends_with(".txt") || lower.ends_with(".md") {
        String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Validation("file is not valid UTF-8 text".to_string()))
    } else {
        Err(AppError::Validation(format!(
            "unsupported file type: {file_name} (expected .pdf, .txt or .md)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_txt_extraction() {
        let data = Bytes::from_static(b"5 years JavaScript developer");
        let text = extract_text("resume.txt", &data).unwrap();
        assert_eq!(text, "5 years JavaScript developer");
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let data = Bytes::from_static(b"binary");
        let err = extract_text("resume.docx", &data).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let data = Bytes::from_static(&[0xff, 0xfe, 0x00]);
        let err = extract_text("resume.txt", &data).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
