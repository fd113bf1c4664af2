//! Struct tag parsing
//!
//! A tag literal is unwrapped from its backticks (or unescaped from its
//! double quotes) and split into `key:"value"` pairs. When no quoted pair
//! is present, a bare `key:value` is accepted as the only pair.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::entity_building::domain::{Tag, TagPair};
use crate::features::parsing::domain::{RawTag, TagLiteralKind};
use crate::shared::models::{ModelError, Result};

// SAFETY: This regex pattern is compile-time constant and known to be valid
static TAG_PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s:"]+):"((?:[^"\\]|\\.)*)""#).expect("tag pair pattern is valid")
});

/// Tag text without its literal delimiters
pub fn strip_tag_delimiters(tag: &RawTag) -> String {
    let literal = tag.literal.as_str();
    match tag.kind {
        TagLiteralKind::Raw => literal
            .strip_prefix('`')
            .and_then(|s| s.strip_suffix('`'))
            .unwrap_or(literal)
            .to_string(),
        TagLiteralKind::Interpreted => {
            let inner = literal
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(literal);
            unescape(inner)
        }
    }
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// All `key:"value"` pairs of a stripped tag, in order
pub fn split_tag_pairs(text: &str) -> Vec<TagPair> {
    let pairs: Vec<TagPair> = TAG_PAIR_RE
        .captures_iter(text)
        .map(|caps| TagPair {
            key: caps[1].to_string(),
            value: caps[2].to_string(),
        })
        .collect();
    if !pairs.is_empty() {
        return pairs;
    }

    match text.trim().split_once(':') {
        Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => {
            vec![TagPair {
                key: key.trim().to_string(),
                value: value.trim().trim_matches('"').to_string(),
            }]
        }
        _ => Vec::new(),
    }
}

pub fn parse_tag(raw: &RawTag) -> Result<Tag> {
    let text = strip_tag_delimiters(raw);
    let pairs = split_tag_pairs(&text);
    let Some(first) = pairs.first().cloned() else {
        return Err(ModelError::malformed_tag(format!(
            "struct tag {} has no key:value pair",
            raw.literal
        )));
    };
    Ok(Tag {
        kind: raw.kind,
        literal: raw.literal.clone(),
        key: first.key,
        value: first.value,
        pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::ErrorKind;

    fn raw(literal: &str) -> RawTag {
        RawTag {
            literal: literal.to_string(),
            kind: TagLiteralKind::Raw,
        }
    }

    #[test]
    fn test_single_pair() {
        let tag = parse_tag(&raw(r#"`json:"y"`"#)).unwrap();
        assert_eq!(tag.key, "json");
        assert_eq!(tag.value, "y");
        assert_eq!(tag.pairs.len(), 1);
    }

    #[test]
    fn test_multiple_pairs_keep_first_as_primary() {
        let tag = parse_tag(&raw(r#"`json:"id,omitempty" db:"user_id"`"#)).unwrap();
        assert_eq!(tag.key, "json");
        assert_eq!(tag.value, "id,omitempty");
        assert_eq!(tag.get("db"), Some("user_id"));
    }

    #[test]
    fn test_interpreted_literal() {
        let tag = parse_tag(&RawTag {
            literal: r#""xml:\"name\"""#.to_string(),
            kind: TagLiteralKind::Interpreted,
        })
        .unwrap();
        assert_eq!(tag.kind, TagLiteralKind::Interpreted);
        assert_eq!(tag.key, "xml");
        assert_eq!(tag.value, "name");
    }

    #[test]
    fn test_bare_pair_fallback() {
        let pairs = split_tag_pairs("json:name");
        assert_eq!(
            pairs,
            vec![TagPair {
                key: "json".to_string(),
                value: "name".to_string()
            }]
        );
    }

    #[test]
    fn test_malformed_tag() {
        let err = parse_tag(&raw("`nothing`")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedTag);
        assert!(parse_tag(&raw("`:x`")).is_err());
    }
}
