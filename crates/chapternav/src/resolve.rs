//! Link rewriting and URL normalization.
//!
//! Entry links are authored relative to the site root. Before they can be
//! compared against the page URL they are prefixed with the page's
//! path-to-root and resolved to absolute form.

use std::borrow::Cow;

use crate::chapter::Entry;

/// True for links the rewriter must leave untouched: fragment links,
/// protocol-relative URLs, and anything carrying an explicit scheme
/// (`https:`, `mailto:`, …).
pub fn is_absolute(href: &str) -> bool {
    if href.starts_with('#') || href.starts_with("//") {
        return true;
    }
    match href.split_once(':') {
        Some((scheme, _)) => {
            let mut bytes = scheme.bytes();
            bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
                && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
        }
        None => false,
    }
}

/// Prefix a site-root-relative href with the page's path-to-root.
/// Absolute and fragment links pass through byte-for-byte.
pub fn rewrite_href<'a>(href: &'a str, path_to_root: &str) -> Cow<'a, str> {
    if path_to_root.is_empty() || is_absolute(href) {
        Cow::Borrowed(href)
    } else {
        Cow::Owned(format!("{path_to_root}{href}"))
    }
}

/// Rewrite every entry link for the current page depth.
///
/// Runs once per load, before activity comparison. The rewrite reads only
/// the authored `raw_href`, so running the stage again writes identical
/// values instead of double-prefixing.
pub fn resolve_links(entries: &mut [Entry], path_to_root: &str) {
    for entry in entries {
        entry.href = entry
            .raw_href
            .as_deref()
            .map(|href| rewrite_href(href, path_to_root).into_owned());
    }
}

/// A page URL ending in `/` names the directory index.
pub fn normalize_page_url(url: &str) -> Cow<'_, str> {
    if url.ends_with('/') {
        Cow::Owned(format!("{url}index.html"))
    } else {
        Cow::Borrowed(url)
    }
}

/// Resolve `href` against the URL of the page it appears on.
///
/// The scheme and authority are kept intact; the page's filename is dropped,
/// the href appended, and `.`/`..` segments collapsed. `..` never climbs
/// above the authority.
pub fn absolutize(page_url: &str, href: &str) -> String {
    if is_absolute(href) {
        return href.to_string();
    }

    let path_start = match page_url.find("://") {
        Some(scheme_end) => {
            let after_scheme = scheme_end + 3;
            match page_url[after_scheme..].find('/') {
                Some(slash) => after_scheme + slash,
                None => page_url.len(),
            }
        }
        None => 0,
    };
    let (origin, path) = page_url.split_at(path_start);
    let base = match path.rfind('/') {
        Some(last_slash) => &path[..last_slash + 1],
        None => "",
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(href.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }
    format!("{origin}/{}", segments.join("/"))
}
