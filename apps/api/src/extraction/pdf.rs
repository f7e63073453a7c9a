use crate::extraction::ExtractionError;

/// Extracts text from an in-memory PDF, page by page in document order.
///
/// Pages without a text layer (scanned images) come back from `pdf-extract` as
/// empty strings and simply contribute nothing.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(concat_pages(pages))
}

fn concat_pages(pages: Vec<String>) -> String {
    pages.concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::fixtures::pdf_bytes;

    fn compact(text: &str) -> String {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_concat_pages_keeps_order() {
        let pages = vec!["first ".to_string(), String::new(), "third".to_string()];
        assert_eq!(concat_pages(pages), "first third");
    }

    #[test]
    fn test_single_page_text() {
        let text = extract_text(&pdf_bytes(&[Some("Python developer, 5 years")])).unwrap();
        assert!(compact(&text).contains("Pythondeveloper"), "got: {text:?}");
    }

    #[test]
    fn test_pages_in_reading_order() {
        let text = extract_text(&pdf_bytes(&[Some("Alpha"), Some("Omega")])).unwrap();
        let alpha = text.find("Alpha").expect("first page missing");
        let omega = text.find("Omega").expect("second page missing");
        assert!(alpha < omega);
    }

    #[test]
    fn test_page_without_text_does_not_fail() {
        let text = extract_text(&pdf_bytes(&[Some("Experience"), None])).unwrap();
        assert!(text.contains("Experience"));
    }

    #[test]
    fn test_length_non_decreasing_in_page_count() {
        let mut previous = 0;
        let pages = ["Rust", "Python", "Kubernetes"];
        for n in 1..=pages.len() {
            let content: Vec<Option<&str>> = pages[..n].iter().map(|p| Some(*p)).collect();
            let len = extract_text(&pdf_bytes(&content)).unwrap().len();
            assert!(len >= previous, "{n} pages: {len} < {previous}");
            previous = len;
        }
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}
