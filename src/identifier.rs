// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Repository and node identifier formatting and parsing.
//!
//! Identifiers are multibase base58btc payloads, optionally carrying a
//! scheme prefix (`rad:` for repositories, `did:key:` for nodes). Parsers
//! signal unrecognized input with `None`; formatters fall back to the
//! unchanged input instead of failing.

use serde::{Deserialize, Serialize};

/// Canonical scheme prefix for node identifiers.
pub const DID_KEY_PREFIX: &str = "did:key:";
/// Canonical scheme prefix for repository identifiers.
pub const RAD_PREFIX: &str = "rad:";

/// Decoded length of an ed25519 multikey: 2-byte multicodec header + 32-byte key.
const ED25519_MULTIKEY_LEN: usize = 34;
/// Multicodec varint header marking an ed25519 public key.
const ED25519_CODEC: [u8; 2] = [0xED, 0x01];

/// Parsed identity: the canonical scheme prefix plus the opaque encoded payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub prefix: String,
    pub pubkey: String,
}

/// Truncate an identifier payload to its `first6…last6` display form.
///
/// Payloads shorter than 12 characters are returned unmodified.
pub fn truncate_id(payload: &str) -> String {
    let chars: Vec<char> = payload.chars().collect();
    if chars.len() < 12 {
        return payload.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}…{tail}")
}

/// Parse a repository identifier with an optional `rad:` prefix.
///
/// The payload must be a multibase base58btc string (`z` sigil followed by
/// a base58 body). The returned prefix is normalized to `rad:` whether or
/// not the input carried it.
pub fn parse_repository_id(input: &str) -> Option<Identity> {
    let payload = strip_optional_prefix(input, RAD_PREFIX);
    decode_multibase(payload)?;

    Some(Identity {
        prefix: RAD_PREFIX.to_string(),
        pubkey: payload.to_string(),
    })
}

/// Parse a node identifier with an optional `did:key:` prefix.
///
/// The payload must decode to a 34-byte ed25519 multikey (such keys render
/// as `z6Mk…`). Anything else (wrong sigil, malformed prefix, an already
/// truncated id) yields `None`, never an error.
pub fn parse_node_id(input: &str) -> Option<Identity> {
    let payload = strip_optional_prefix(input, DID_KEY_PREFIX);
    let decoded = decode_multibase(payload)?;
    if decoded.len() != ED25519_MULTIKEY_LEN || decoded[..2] != ED25519_CODEC {
        return None;
    }

    Some(Identity {
        prefix: DID_KEY_PREFIX.to_string(),
        pubkey: payload.to_string(),
    })
}

/// Format a repository identifier as `rad:<first6>…<last6>`.
///
/// Accepts the identifier with or without its `rad:` prefix; input that
/// does not parse as a repository identifier comes back unchanged.
pub fn format_repository_id(id: &str) -> String {
    match parse_repository_id(id) {
        Some(identity) => format!("{}{}", identity.prefix, truncate_id(&identity.pubkey)),
        None => id.to_string(),
    }
}

/// Format a node identifier as `did:key:<first6>…<last6>`.
///
/// Accepts the identifier with or without its `did:key:` prefix; input that
/// does not parse as a node identifier comes back unchanged.
pub fn format_node_id(id: &str) -> String {
    match parse_node_id(id) {
        Some(identity) => format!("{}{}", identity.prefix, truncate_id(&identity.pubkey)),
        None => id.to_string(),
    }
}

/// Truncate a commit hash to its 7-character short form.
///
/// Inputs of 7 or fewer characters are returned unchanged.
pub fn format_commit(commit: &str) -> String {
    commit.chars().take(7).collect()
}

/// Strip `prefix` when present and return the remainder.
fn strip_optional_prefix<'a>(input: &'a str, prefix: &str) -> &'a str {
    input.strip_prefix(prefix).unwrap_or(input)
}

/// Decode a multibase base58btc payload: a `z` sigil followed by a
/// non-empty base58 body.
fn decode_multibase(payload: &str) -> Option<Vec<u8>> {
    let body = payload.strip_prefix('z')?;
    if body.is_empty() {
        return None;
    }
    bs58::decode(body).into_vec().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        DID_KEY_PREFIX, Identity, format_commit, format_node_id, format_repository_id,
        parse_node_id, parse_repository_id, truncate_id,
    };

    const NODE_PUBKEY: &str = "z6MkmzRwg47UWQxczLLLFfkEwpBGitjzJ1vKPE8U9ymd6fz6";

    #[test]
    fn format_repository_id_truncates_prefixed_and_bare_input_alike() {
        assert_eq!(
            format_repository_id("rad:zKtT7DmF9H34KkvcKj9PHW19WzjT"),
            "rad:zKtT7D…19WzjT"
        );
        assert_eq!(
            format_repository_id("rad:z4V1sjrXqjvFdnCUbxPFqd5p4DtH5"),
            "rad:z4V1sj…p4DtH5"
        );
        assert_eq!(
            format_repository_id("z4V1sjrXqjvFdnCUbxPFqd5p4DtH5"),
            "rad:z4V1sj…p4DtH5"
        );
    }

    #[test]
    fn format_node_id_is_idempotent_under_re_prefixing() {
        let prefixed = format!("{DID_KEY_PREFIX}{NODE_PUBKEY}");

        assert_eq!(format_node_id(&prefixed), "did:key:z6Mkmz…md6fz6");
        assert_eq!(format_node_id(NODE_PUBKEY), format_node_id(&prefixed));
    }

    // Unparsable input must pass through the formatters unchanged.
    #[test]
    fn format_functions_leave_unrecognized_input_untouched() {
        assert_eq!(format_repository_id("not-an-id"), "not-an-id");
        assert_eq!(format_node_id("zlatan"), "zlatan");
        assert_eq!(
            format_node_id("rad:z4V1sjrXqjvFdnCUbxPFqd5p4DtH5"),
            "rad:z4V1sjrXqjvFdnCUbxPFqd5p4DtH5"
        );
    }

    #[test]
    fn format_commit_shortens_to_seven_characters() {
        assert_eq!(
            format_commit("a8a6a979a6261a2ec1ea85fc9a65a4a30aa22cc8"),
            "a8a6a97"
        );
        assert_eq!(format_commit("a8a6a97"), "a8a6a97");
    }

    #[test]
    fn truncate_id_returns_short_payloads_unmodified() {
        assert_eq!(truncate_id("z4V1sjrXqjv"), "z4V1sjrXqjv");
        assert_eq!(truncate_id("z4V1sjrXqjvF"), "z4V1sj…rXqjvF");
    }

    #[test]
    fn parse_node_id_accepts_both_forms_and_normalizes_the_prefix() {
        let expected = Identity {
            prefix: "did:key:".to_string(),
            pubkey: NODE_PUBKEY.to_string(),
        };

        assert_eq!(parse_node_id(NODE_PUBKEY), Some(expected.clone()));
        assert_eq!(
            parse_node_id(&format!("{DID_KEY_PREFIX}{NODE_PUBKEY}")),
            Some(expected)
        );
    }

    #[test]
    fn parse_node_id_rejects_malformed_input() {
        // A repository prefix on a key payload is not a node identifier.
        assert_eq!(parse_node_id(&format!("rad:{NODE_PUBKEY}")), None);
        // An already truncated id contains a non-base58 ellipsis.
        assert_eq!(parse_node_id("did:key:z6Mkmz…md6fz6"), None);
        // A plausible word is not a base58 key payload.
        assert_eq!(parse_node_id("zlatan"), None);
        assert_eq!(parse_node_id(""), None);
    }

    #[test]
    fn parse_repository_id_normalizes_the_prefix_and_requires_the_sigil() {
        let parsed = parse_repository_id("zKtT7DmF9H34KkvcKj9PHW19WzjT");

        assert_eq!(
            parsed,
            Some(Identity {
                prefix: "rad:".to_string(),
                pubkey: "zKtT7DmF9H34KkvcKj9PHW19WzjT".to_string(),
            })
        );
        assert_eq!(
            parse_repository_id("rad:zKtT7DmF9H34KkvcKj9PHW19WzjT"),
            parsed
        );
        assert_eq!(parse_repository_id("KtT7DmF9H34KkvcKj9PHW19WzjT"), None);
        assert_eq!(parse_repository_id("rad:"), None);
    }

    #[test]
    fn identity_serializes_with_prefix_and_pubkey_fields() {
        let identity = parse_node_id(NODE_PUBKEY).unwrap();
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(json["prefix"], "did:key:");
        assert_eq!(json["pubkey"], NODE_PUBKEY);
    }
}
