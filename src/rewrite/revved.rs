//! Revisioned-reference substitution across markup constructs.
//!
//! Seven construct classes are scanned in a fixed order. Each class runs
//! globally over the text produced by the previous class, so a construct
//! nested in an already-rewritten span is seen in its rewritten form and
//! is not processed twice (given an idempotent locator).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Rewriter;
use crate::rev::RevLocator;

/// One asset-bearing construct class.
struct RefClass {
    name: &'static str,
    regex: Regex,
}

/// Declared scanning order. Order is a contract: later classes operate on
/// already-rewritten text.
static CLASSES: LazyLock<Vec<RefClass>> = LazyLock::new(|| {
    [
        ("script", r#"<script[^>]+src=["']([^"']+)["']"#),
        ("link", r#"<link[^>]+href=["']([^"']+)["']"#),
        ("img", r#"<img[^>]+src=["']([^"']+)["']"#),
        ("data", r#"data-[A-Za-z0-9_-]+=["']([^"']+)["']"#),
        ("url", r#"url\(['"]?([^'")]+)['"]?\)"#),
        ("anchor", r#"<a[^>]+href=["']([^"']+)["']"#),
        ("input", r#"<input[^>]+src=["']([^"']+)["']"#),
    ]
    .into_iter()
    .map(|(name, pattern)| RefClass {
        name,
        regex: Regex::new(pattern).unwrap(),
    })
    .collect()
});

impl<L: RevLocator> Rewriter<L> {
    /// Rewrite every reference in `content` that the locator maps to a
    /// revisioned name. References the locator leaves unchanged are left
    /// untouched, everything around a match is preserved verbatim.
    pub fn replace_with_revved(&self, content: &str) -> String {
        let mut text = content.to_string();

        for class in CLASSES.iter() {
            text = class
                .regex
                .replace_all(&text, |caps: &Captures| {
                    let whole = &caps[0];
                    let reference = &caps[1];
                    let revved = self.locator.find(reference, self.dir());
                    if revved == reference {
                        return whole.to_string();
                    }
                    let rewritten = whole.replacen(reference, &revved, 1);
                    self.emit(&format!("{}: {whole} -> {rewritten}", class.name));
                    rewritten
                })
                .into_owned();
        }

        text
    }
}
