use crate::document::{Document, Fragment};
use crate::replace::SectionReplace;
use std::path::Path;

/// Page updated in place.
pub const DOCUMENT_PATH: &str = "index.html";

/// File holding the replacement section.
pub const FRAGMENT_PATH: &str = "our-story-new.html";

/// Swap the Our Story section of the document for the fragment's contents
/// and write the document back to its own path. The write happens even when
/// nothing matched, so the no-op case rewrites the file unchanged. Returns
/// the number of replacements made.
pub fn update_document(
    document_path: &Path,
    fragment_path: &Path,
) -> Result<usize, std::io::Error> {
    let mut document = Document::from_file(document_path.to_path_buf())?;
    let fragment = Fragment::from_file(fragment_path)?;

    let (content, replacements) =
        SectionReplace::replace_section(&document.content, &fragment.text)
            .map_err(|e| std::io::Error::other(e.to_string()))?;

    document.content = content;
    document.save()?;

    Ok(replacements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_update_rewrites_document_in_place() {
        let dir = TempDir::new().unwrap();
        let doc_path = dir.path().join("index.html");
        let frag_path = dir.path().join("our-story-new.html");
        fs::write(
            &doc_path,
            "<!-- ===== OUR STORY ===== -->old</section>\n\n<!-- ===== NUTRITION SECTION REMOVED ===== -->\n<footer></footer>",
        )
        .unwrap();
        fs::write(&frag_path, "\n<section id=\"our-story\">new</section>\n").unwrap();

        let replacements = update_document(&doc_path, &frag_path).unwrap();
        assert_eq!(replacements, 1);
        assert_eq!(
            fs::read_to_string(&doc_path).unwrap(),
            "<section id=\"our-story\">new</section>\n\n<!-- ===== NUTRITION SECTION REMOVED ===== -->\n<footer></footer>"
        );
    }

    #[test]
    fn test_update_without_marker_leaves_document_unchanged() {
        let dir = TempDir::new().unwrap();
        let doc_path = dir.path().join("index.html");
        let frag_path = dir.path().join("our-story-new.html");
        fs::write(&doc_path, "<html><body>plain page</body></html>").unwrap();
        fs::write(&frag_path, "<section>new</section>").unwrap();

        let replacements = update_document(&doc_path, &frag_path).unwrap();
        assert_eq!(replacements, 0);
        assert_eq!(
            fs::read_to_string(&doc_path).unwrap(),
            "<html><body>plain page</body></html>"
        );
    }

    #[test]
    fn test_update_with_missing_fragment_is_an_error() {
        let dir = TempDir::new().unwrap();
        let doc_path = dir.path().join("index.html");
        fs::write(&doc_path, "<!-- ===== OUR STORY ===== -->old</section>").unwrap();

        let result = update_document(&doc_path, &dir.path().join("absent.html"));
        assert!(result.is_err());
        // Fragment read failed before any write, so the page is untouched
        assert_eq!(
            fs::read_to_string(&doc_path).unwrap(),
            "<!-- ===== OUR STORY ===== -->old</section>"
        );
    }

    #[test]
    fn test_update_with_missing_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let frag_path = dir.path().join("our-story-new.html");
        fs::write(&frag_path, "<section>new</section>").unwrap();

        let result = update_document(&dir.path().join("absent.html"), &frag_path);
        assert!(result.is_err());
    }
}
