//! Tagspec handling
//!
//! A tagspec is the colon-separated tag list used both in database lines
//! (`work:urgent`) and as a query argument. Matching is exact per segment:
//! `urg` does not match `urgent`.
//!
//! # Examples
//!
//! ```
//! use dirtag::tagspec::{tag_in_tagspec, tagspec_satisfies};
//!
//! assert!(tag_in_tagspec("work:urgent", "urgent"));
//! assert!(!tag_in_tagspec("work:urgent", "urg"));
//! assert!(tagspec_satisfies("work:urgent:home", "urgent:home"));
//! assert!(tagspec_satisfies("work", ""));
//! ```

/// Separator between tags inside a tagspec
pub const SEPARATOR: char = ':';

/// Iterate over the tags of a tagspec.
///
/// The empty tagspec has no segments at all. Otherwise one leading `:` is
/// skipped and the rest is split verbatim: `:work` is just `work`, while
/// `a::b` and `a:` keep their empty segments.
pub fn segments(tagspec: &str) -> impl Iterator<Item = &str> {
    let body = if tagspec.is_empty() {
        None
    } else {
        Some(tagspec.strip_prefix(SEPARATOR).unwrap_or(tagspec))
    };
    body.into_iter().flat_map(|s| s.split(SEPARATOR))
}

/// Split a tagspec into owned tags
#[must_use]
pub fn split(tagspec: &str) -> Vec<String> {
    segments(tagspec).map(str::to_string).collect()
}

/// Join tags back into a tagspec
#[must_use]
pub fn join<S: AsRef<str>>(tags: &[S]) -> String {
    let mut out = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(tag.as_ref());
    }
    out
}

/// Returns true iff one segment of `tagspec` is exactly `tag`
#[must_use]
pub fn tag_in_tagspec(tagspec: &str, tag: &str) -> bool {
    segments(tagspec).any(|segment| segment == tag)
}

/// Returns true iff every segment of `query` is present in `tagspec`.
///
/// This is a subset test: the query's tag set must be contained in the
/// record's tag set. An empty query is satisfied by anything.
#[must_use]
pub fn tagspec_satisfies(tagspec: &str, query: &str) -> bool {
    segments(query).all(|wanted| tag_in_tagspec(tagspec, wanted))
}
