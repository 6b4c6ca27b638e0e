//! The Business 360 mobile screen layout document.
//!
//! The document is opaque text: zones, ASCII mock-ups, interaction flows,
//! breakpoints and accessibility notes. Nothing in the crate parses it.

const LAYOUT_DOCUMENT: &str = include_str!("../assets/mobile_layout.txt");

/// Returns the fixed layout document, exactly as it is written to disk.
pub fn build_layout_document() -> &'static str {
    LAYOUT_DOCUMENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_is_newline_delimited() {
        let doc = build_layout_document();
        assert!(doc.starts_with('\n'));
        assert!(doc.ends_with("Adequate spacing (8px minimum) between interactive elements\n"));
    }

    #[test]
    fn test_document_covers_every_zone() {
        let doc = build_layout_document();
        for zone in [
            "ZONE 1: NAVIGATION",
            "ZONE 2: HERO SECTION",
            "ZONE 3: INSIGHTS PANEL",
            "ZONE 4: UPGRADE CTA BANNER",
            "ZONE 5: FEATURE CARDS",
        ] {
            assert!(doc.contains(zone), "missing {}", zone);
        }
    }

    #[test]
    fn test_document_length() {
        assert_eq!(build_layout_document().len(), 31566);
    }
}
