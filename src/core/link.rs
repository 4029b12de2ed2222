//! Reference classification.

/// Syntactic classification of an asset reference found in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind<'a> {
    /// Reference with a URL scheme (http://, https://, ftp://, mailto:, etc.)
    External(&'a str),
    /// Templating placeholder (`<% … %>` style). Never a real file.
    Template(&'a str),
    /// The bare site root `/`. Never a real file.
    Root,
    /// Site-root-relative path. Value is the path without the leading `/`.
    SiteRoot(&'a str),
    /// Document-relative path (`img/logo.png`, `../shared/app.js`).
    Relative(&'a str),
}

impl<'a> RefKind<'a> {
    /// Parse a reference string into its syntactic kind.
    pub fn parse(reference: &'a str) -> Self {
        if reference.contains("<%") {
            Self::Template(reference)
        } else if is_external(reference) {
            Self::External(reference)
        } else if reference == "/" {
            Self::Root
        } else if let Some(rest) = reference.strip_prefix('/') {
            Self::SiteRoot(rest)
        } else {
            Self::Relative(reference)
        }
    }

    /// True when the reference must never be rewritten.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::External(_) | Self::Template(_) | Self::Root)
    }
}

/// Check if a reference has a URL scheme (https:, ftp:, mailto:, etc.)
///
/// A valid scheme must have at least one character before the colon and
/// contain only ASCII alphanumerics or `+`, `-`, `.`
#[inline]
pub fn is_external(reference: &str) -> bool {
    reference.find(':').is_some_and(|pos| {
        pos > 0
            && reference[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            RefKind::parse("http://domain.com/foo.js"),
            RefKind::External(_)
        ));
        assert!(matches!(
            RefKind::parse("https://cdn.example.com/app.css"),
            RefKind::External(_)
        ));
        assert!(matches!(
            RefKind::parse("ftp://host/file.png"),
            RefKind::External(_)
        ));
    }

    #[test]
    fn test_parse_template() {
        assert!(matches!(
            RefKind::parse("<%= asset_path %>"),
            RefKind::Template(_)
        ));
        assert!(matches!(
            RefKind::parse("/styles/<% name %>.css"),
            RefKind::Template(_)
        ));
    }

    #[test]
    fn test_parse_root() {
        assert!(matches!(RefKind::parse("/"), RefKind::Root));
    }

    #[test]
    fn test_parse_site_root() {
        assert!(matches!(
            RefKind::parse("/styles/main.css"),
            RefKind::SiteRoot("styles/main.css")
        ));
    }

    #[test]
    fn test_parse_relative() {
        assert!(matches!(
            RefKind::parse("img/logo.png"),
            RefKind::Relative("img/logo.png")
        ));
        assert!(matches!(
            RefKind::parse("../shared/app.js"),
            RefKind::Relative("../shared/app.js")
        ));
    }

    #[test]
    fn test_is_fixed() {
        assert!(RefKind::parse("http://domain.com/x.js").is_fixed());
        assert!(RefKind::parse("<% tag %>").is_fixed());
        assert!(RefKind::parse("/").is_fixed());
        assert!(!RefKind::parse("/styles/main.css").is_fixed());
        assert!(!RefKind::parse("app.js").is_fixed());
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("http://domain.com"));
        assert!(is_external("mailto:user@example.com"));
        assert!(!is_external("/about"));
        assert!(!is_external("./file.txt"));
        assert!(!is_external("styles/main.css"));
    }
}
