// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pure formatting and parsing helpers for code-forge front-ends.
//!
//! Responsibilities:
//! - Truncate repository/node identifiers and commit hashes for display.
//! - Substitute inline backtick spans with `<code>` markup.
//! - Classify markdown paths and absolute URLs.
//! - Canonicalize asset paths against a document base and origin.
//! - Render human-relative timestamps ("3 days ago", "yesterday", "now").
//!
//! Every function is a synchronous, side-effect-free transformation; the
//! parsers signal unrecognized input with `None` instead of an error.

pub mod identifier;
pub mod markup;
pub mod path;
pub mod timestamp;

/// Parsed identity record: canonical prefix plus encoded payload.
pub use identifier::Identity;
/// Truncate a commit hash to its 7-character short form.
pub use identifier::format_commit;
/// Format a node identifier as `did:key:<first6>…<last6>`.
pub use identifier::format_node_id;
/// Format a repository identifier as `rad:<first6>…<last6>`.
pub use identifier::format_repository_id;
/// Parse an optionally `did:key:`-prefixed node identifier.
pub use identifier::parse_node_id;
/// Parse an optionally `rad:`-prefixed repository identifier.
pub use identifier::parse_repository_id;
/// Truncate an identifier payload to `first6…last6`.
pub use identifier::truncate_id;
/// Replace paired backtick spans with `<code>` markup.
pub use markup::format_inline_title;
/// Resolve an asset path against a document base and origin.
pub use path::canonicalize;
/// Check whether a path carries a markdown extension.
pub use path::is_markdown_path;
/// Check whether a string parses as an absolute URL.
pub use path::is_url;
/// Bucket an elapsed duration into a human-relative phrase.
pub use timestamp::format_timestamp;
/// Format a timestamp relative to the current time.
pub use timestamp::format_timestamp_now;
/// Count whole days between two timestamps.
pub use timestamp::get_days_passed;
