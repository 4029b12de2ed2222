//! Site-path arithmetic on plain strings.
//!
//! Every path the engine stores is a forward-slash string relative to the
//! site root, with no leading `/` or `./`. Working on strings instead of
//! `std::path` keeps results identical across platforms and lets authored
//! Windows separators be normalized away instead of leaking into output.

/// Normalize a path to site-relative form.
///
/// Backslashes become `/`, `.` and empty segments are dropped, and `..`
/// collapses against a preceding segment. Leading `..` segments that have
/// nothing to collapse against are preserved.
///
/// # Examples
/// ```ignore
/// assert_eq!(normalize("./foo//bar.css"), "foo/bar.css");
/// assert_eq!(normalize("scripts\\vendor\\require.js"), "scripts/vendor/require.js");
/// assert_eq!(normalize("a/b/../c"), "a/c");
/// ```
pub fn normalize(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let mut out: Vec<&str> = Vec::new();
    for seg in slashed.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                if out.is_empty() || matches!(out.last(), Some(&"..")) {
                    out.push("..");
                } else {
                    out.pop();
                }
            }
            _ => out.push(seg),
        }
    }
    out.join("/")
}

/// Join a path onto a directory and normalize the result.
///
/// An empty directory means the site root. A leading `/` on `rel` is
/// swallowed by normalization, so `join("build", "/app.js")` is
/// `build/app.js`.
pub fn join(dir: &str, rel: &str) -> String {
    if dir.is_empty() {
        normalize(rel)
    } else {
        normalize(&format!("{dir}/{rel}"))
    }
}

/// Compute `to` relative to the directory `from`.
///
/// Both arguments are site-relative paths. The result walks up with `..`
/// segments where needed.
pub fn relative(from: &str, to: &str) -> String {
    let from_n = normalize(from);
    let to_n = normalize(to);
    let from_parts: Vec<&str> = from_n.split('/').filter(|s| !s.is_empty()).collect();
    let to_parts: Vec<&str> = to_n.split('/').filter(|s| !s.is_empty()).collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::with_capacity(from_parts.len() - common + to_parts.len());
    for _ in common..from_parts.len() {
        parts.push("..");
    }
    parts.extend(&to_parts[common..]);
    parts.join("/")
}

/// Directory portion of a path (`""` when there is none).
#[inline]
pub fn dirname(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

/// Final segment of a path.
#[inline]
pub fn basename(path: &str) -> &str {
    path.rfind('/').map_or(path, |i| &path[i + 1..])
}

/// Replace the final segment of a path, keeping its directory prefix verbatim.
///
/// The prefix is not normalized so that relative references like
/// `../img/logo.png` keep their original shape after substitution.
pub fn with_basename(path: &str, name: &str) -> String {
    match path.rfind('/') {
        Some(i) => format!("{}/{}", &path[..i], name),
        None => name.to_string(),
    }
}
