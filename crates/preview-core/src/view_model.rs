use serde::{Deserialize, Serialize};

/// Fallback text shown when the service has nothing to render.
pub const NO_PREVIEW_TEXT: &str = "No preview available.";

/// A single rendered page of the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageImage {
    /// 1-based page number as shown to the user.
    pub number: u32,
    /// Directly displayable image reference, typically a data URI.
    pub src: String,
}

impl PageImage {
    /// Display label, e.g. `Page 3`.
    pub fn label(&self) -> String {
        format!("Page {}", self.number)
    }

    /// Alternative text for the page image.
    pub fn alt_text(&self) -> String {
        format!("Preview of Page {}", self.number)
    }
}

/// Everything the renderer needs to know, and nothing else.
///
/// Exactly one of these states is visible at any time; the renderer
/// replaces the whole preview region on every transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewViewModel {
    /// A refresh is in flight; the loading indicator is visible.
    Loading,
    /// Rendered pages, in response order.
    Pages(Vec<PageImage>),
    /// The service answered ok but had nothing to show.
    Empty,
    /// A refresh failed; the message is displayed verbatim.
    Error(String),
}

impl PreviewViewModel {
    /// Build the view model for an ok response body.
    ///
    /// An empty page list is a valid no-content signal, not an error.
    pub fn from_pages(sources: Vec<String>) -> Self {
        if sources.is_empty() {
            return PreviewViewModel::Empty;
        }
        let pages = sources
            .into_iter()
            .enumerate()
            .map(|(index, src)| PageImage {
                number: index as u32 + 1,
                src,
            })
            .collect();
        PreviewViewModel::Pages(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_from_pages_numbers_in_order() {
        let model = PreviewViewModel::from_pages(vec!["a.png".to_string(), "b.png".to_string()]);
        assert_eq!(
            model,
            PreviewViewModel::Pages(vec![
                PageImage {
                    number: 1,
                    src: "a.png".to_string(),
                },
                PageImage {
                    number: 2,
                    src: "b.png".to_string(),
                },
            ])
        );
    }

    #[test]
    fn test_from_pages_empty_is_no_content() {
        assert_eq!(PreviewViewModel::from_pages(vec![]), PreviewViewModel::Empty);
    }

    #[test]
    fn test_page_labels() {
        let page = PageImage {
            number: 2,
            src: "b.png".to_string(),
        };
        assert_eq!(page.label(), "Page 2");
        assert_eq!(page.alt_text(), "Preview of Page 2");
    }

    proptest! {
        #[test]
        fn prop_page_numbering_matches_input_order(sources in proptest::collection::vec(".*", 1..20)) {
            let expected = sources.clone();
            match PreviewViewModel::from_pages(sources) {
                PreviewViewModel::Pages(pages) => {
                    prop_assert_eq!(pages.len(), expected.len());
                    for (index, page) in pages.iter().enumerate() {
                        prop_assert_eq!(page.number as usize, index + 1);
                        prop_assert_eq!(&page.src, &expected[index]);
                    }
                }
                other => prop_assert!(false, "expected Pages, got {:?}", other),
            }
        }
    }
}
