// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Path predicates and canonicalization for document-relative assets.

use url::Url;

/// Extensions recognized as markdown documents.
const MARKDOWN_EXTENSIONS: [&str; 3] = ["md", "mkd", "markdown"];

/// Check whether a path carries a markdown extension.
///
/// The suffix after the last `.` is compared case-sensitively against
/// `md`, `mkd`, and `markdown`.
pub fn is_markdown_path(path: &str) -> bool {
    path.rsplit_once('.')
        .is_some_and(|(_, ext)| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Check whether a string parses as an absolute URL.
///
/// Scheme-relative references (`//host`), bare words, and dangling scheme
/// markers (`://host`) do not qualify.
pub fn is_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// Resolve `image_path` against the directory of `base` and return the
/// result without a leading `/`.
///
/// An absolute `image_path` is used as-is; a relative one replaces the last
/// `/`-separated segment of `base` (the file name, or the empty segment
/// after a trailing slash). `origin` anchors the WHATWG resolution that
/// collapses `.` and `..` segments across any number of levels; it never
/// appears in the output.
pub fn canonicalize(image_path: &str, base: &str, origin: &str) -> String {
    let joined = if image_path.starts_with('/') {
        image_path.to_string()
    } else {
        let mut segments: Vec<&str> = base.split('/').collect();
        segments.pop();
        segments.push(image_path);
        segments.join("/")
    };

    let resolved = Url::parse(origin)
        .and_then(|origin| origin.join(&joined))
        .map(|url| url.path().to_string())
        .unwrap_or(joined);

    match resolved.strip_prefix('/') {
        Some(relative) => relative.to_string(),
        None => resolved,
    }
}
