use std::collections::HashMap;

use super::config::RuleConfigError;

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult<'t> {
    None,
    Prefix,
    Exact(&'t str),
    ExactAndPrefix(&'t str),
}

/// Longest pattern matching at the start of a scan position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleMatch<'t> {
    /// Matched input length in bytes.
    pub len: usize,
    pub replacement: &'t str,
}

#[derive(Default)]
struct Node {
    children: HashMap<char, Node>,
    replacement: Option<Box<str>>,
}

/// Immutable pattern → replacement table keyed by scalar value.
///
/// Scanning always takes the longest pattern that matches at the current
/// position, independent of insertion order.
pub struct RuleTable {
    root: Node,
    len: usize,
    max_pattern_chars: usize,
}

impl RuleTable {
    /// Build a table. Empty or repeated patterns are rejected.
    pub fn build<I, K, V>(entries: I) -> Result<Self, RuleConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = RuleTable {
            root: Node::default(),
            len: 0,
            max_pattern_chars: 0,
        };
        for (pattern, replacement) in entries {
            table.insert(pattern.as_ref(), replacement.into())?;
        }
        Ok(table)
    }

    fn insert(&mut self, pattern: &str, replacement: String) -> Result<(), RuleConfigError> {
        if pattern.is_empty() {
            return Err(RuleConfigError::EmptyKey("rules"));
        }
        let mut node = &mut self.root;
        let mut depth = 0;
        for c in pattern.chars() {
            node = node.children.entry(c).or_default();
            depth += 1;
        }
        if node.replacement.is_some() {
            return Err(RuleConfigError::DuplicatePattern(pattern.to_string()));
        }
        node.replacement = Some(replacement.into_boxed_str());
        self.len += 1;
        self.max_pattern_chars = self.max_pattern_chars.max(depth);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the longest pattern, in scalars.
    pub fn max_pattern_chars(&self) -> usize {
        self.max_pattern_chars
    }

    /// Exact-key probe: whether `pattern` is a rule, a proper prefix of one,
    /// or both.
    pub fn lookup(&self, pattern: &str) -> TrieLookupResult<'_> {
        let mut node = &self.root;
        for c in pattern.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return TrieLookupResult::None,
            }
        }
        let has_children = !node.children.is_empty();
        match (node.replacement.as_deref(), has_children) {
            (None, false) => TrieLookupResult::None,
            (None, true) => TrieLookupResult::Prefix,
            (Some(r), false) => TrieLookupResult::Exact(r),
            (Some(r), true) => TrieLookupResult::ExactAndPrefix(r),
        }
    }

    /// Longest rule whose pattern is a prefix of `input`.
    pub fn longest_match(&self, input: &str) -> Option<RuleMatch<'_>> {
        let mut node = &self.root;
        let mut best = None;
        for (offset, c) in input.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(r) = node.replacement.as_deref() {
                best = Some(RuleMatch {
                    len: offset + c.len_utf8(),
                    replacement: r,
                });
            }
        }
        best
    }

    /// Single left-to-right pass: emit the replacement of the longest match
    /// at each position, or copy one scalar when nothing matches.
    pub fn rewrite_into(&self, input: &str, out: &mut String) {
        let mut pos = 0;
        while pos < input.len() {
            let rest = &input[pos..];
            if let Some(m) = self.longest_match(rest) {
                out.push_str(m.replacement);
                pos += m.len;
            } else if let Some(c) = rest.chars().next() {
                out.push(c);
                pos += c.len_utf8();
            }
        }
    }

    pub fn rewrite(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.rewrite_into(input, &mut out);
        out
    }
}

impl std::fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleTable")
            .field("len", &self.len)
            .field("max_pattern_chars", &self.max_pattern_chars)
            .finish()
    }
}
