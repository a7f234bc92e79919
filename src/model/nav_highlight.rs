//! Active navigation link resolution

/// Page identifier of the current location: the last path segment, or
/// `home` when that segment is empty
pub fn current_page(path: &str, home: &str) -> String {
    match last_segment(path) {
        "" => home.to_string(),
        page => page.to_string(),
    }
}

/// Page identifier a link points at: the last segment of its `href`, with
/// query and fragment removed
pub fn link_page(href: &str) -> &str {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    last_segment(&href[..end])
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Decides which navigation links are marked active on this page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavHighlight {
    current: String,
}

impl NavHighlight {
    pub fn new(location_path: &str, home_page: &str) -> Self {
        Self {
            current: current_page(location_path, home_page),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Links without an `href` never match
    pub fn is_active(&self, href: Option<&str>) -> bool {
        href.is_some_and(|href| link_page(href) == self.current)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("/", "index.html")]
    #[case("", "index.html")]
    #[case("/services.html", "services.html")]
    #[case("/site/about.html", "about.html")]
    #[case("/site/", "index.html")]
    fn test_current_page(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(current_page(path, "index.html"), expected);
    }

    #[rstest]
    #[case("services.html", "services.html")]
    #[case("/services.html", "services.html")]
    #[case("https://example.com/a/contact.html", "contact.html")]
    #[case("index.html#testimonials", "index.html")]
    #[case("services.html?ref=nav", "services.html")]
    #[case("#top", "")]
    fn test_link_page(#[case] href: &str, #[case] expected: &str) {
        assert_eq!(link_page(href), expected);
    }

    #[test]
    fn test_only_exact_match_is_active() {
        let nav = NavHighlight::new("/services.html", "index.html");
        assert!(nav.is_active(Some("services.html")));
        assert!(!nav.is_active(Some("index.html")));
        assert!(!nav.is_active(Some("services.htm")));
        assert!(!nav.is_active(None));
    }

    #[test]
    fn test_root_defaults_to_home() {
        let nav = NavHighlight::new("/", "index.html");
        assert_eq!(nav.current(), "index.html");
        assert!(nav.is_active(Some("index.html")));
    }
}
