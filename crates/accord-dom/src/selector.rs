//! Element selectors
//!
//! A subset of CSS selectors: comma-separated lists of compound selectors
//! made of a tag (or `*`), `.class`, `#id` and `[attr]` / `[attr=value]`
//! parts, joined by descendant (` `) and child (`>`) combinators. Sibling
//! combinators are rejected.

use crate::{DomTree, ElementData, NodeId};
use std::fmt;
use std::str::FromStr;

/// Selector parse error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported combinator in selector `{0}`")]
    Combinator(String),

    #[error("combinator without a compound on both sides in selector `{0}`")]
    DanglingCombinator(String),

    #[error("unexpected character `{found}` in selector `{selector}`")]
    Unexpected { selector: String, found: char },

    #[error("unterminated attribute test in selector `{0}`")]
    UnterminatedAttribute(String),
}

/// Attribute presence or equality test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrTest {
    pub name: String,
    pub value: Option<String>,
}

/// One compound selector, e.g. `button.trigger[aria-controls]`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    /// Lowercase tag, `None` for `*` or no tag
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrTest>,
}

impl CompoundSelector {
    /// Check if an element matches every part
    pub fn matches(&self, elem: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if !elem.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if elem.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| elem.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|test| match (&test.value, elem.get_attr(&test.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(expected), Some(actual)) => expected == actual,
        })
    }

    fn parse(source: &str, whole: &str) -> Result<Self, SelectorError> {
        let unexpected = |found| SelectorError::Unexpected {
            selector: whole.to_string(),
            found,
        };

        let mut sel = CompoundSelector::default();
        let mut chars = source.char_indices().peekable();

        // Leading tag or universal
        let tag_end = source
            .find(|c: char| !is_ident_char(c))
            .unwrap_or(source.len());
        if tag_end > 0 {
            sel.tag = Some(source[..tag_end].to_ascii_lowercase());
            while chars.peek().is_some_and(|&(i, _)| i < tag_end) {
                chars.next();
            }
        } else if source.starts_with('*') {
            chars.next();
        }

        while let Some((i, c)) = chars.next() {
            match c {
                '.' | '#' => {
                    let rest = &source[i + 1..];
                    let len = rest.find(|c: char| !is_ident_char(c)).unwrap_or(rest.len());
                    if len == 0 {
                        return Err(unexpected(c));
                    }
                    let ident = rest[..len].to_string();
                    if c == '.' {
                        sel.classes.push(ident);
                    } else if sel.id.replace(ident).is_some() {
                        return Err(unexpected('#'));
                    }
                    while chars.peek().is_some_and(|&(j, _)| j <= i + len) {
                        chars.next();
                    }
                }
                '[' => {
                    let rest = &source[i + 1..];
                    let close = top_level(rest)
                        .find(|&(_, c)| c == ']')
                        .map(|(j, _)| j)
                        .ok_or_else(|| SelectorError::UnterminatedAttribute(whole.to_string()))?;
                    sel.attrs.push(parse_attr_test(&rest[..close], whole)?);
                    while chars.peek().is_some_and(|&(j, _)| j <= i + 1 + close) {
                        chars.next();
                    }
                }
                other => return Err(unexpected(other)),
            }
        }

        Ok(sel)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn parse_attr_test(body: &str, whole: &str) -> Result<AttrTest, SelectorError> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => {
            let value = value.trim();
            let unquoted = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            (name.trim(), Some(unquoted.to_string()))
        }
        None => (body.trim(), None),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(SelectorError::Unexpected {
            selector: whole.to_string(),
            found: name.chars().find(|&c| !is_ident_char(c)).unwrap_or('['),
        });
    }
    Ok(AttrTest {
        name: name.to_ascii_lowercase(),
        value,
    })
}

/// How a compound relates to the one on its left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
}

/// Compounds joined by combinators, e.g. `.faq > h3 button`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    /// Left to right; the last compound is the subject
    pub compounds: Vec<CompoundSelector>,
    /// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`
    pub combinators: Vec<Combinator>,
}

impl ComplexSelector {
    /// The compound the matched element itself must satisfy
    pub fn subject(&self) -> &CompoundSelector {
        &self.compounds[self.compounds.len() - 1]
    }

    /// Match right to left, walking up from `node`
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.matches_at(tree, node, self.compounds.len() - 1)
    }

    fn matches_at(&self, tree: &DomTree, node: NodeId, index: usize) -> bool {
        let Some(elem) = tree.get(node).and_then(|n| n.as_element()) else {
            return false;
        };
        if !self.compounds[index].matches(elem) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match self.combinators[index - 1] {
            Combinator::Child => tree
                .parent(node)
                .is_some_and(|parent| self.matches_at(tree, parent, index - 1)),
            Combinator::Descendant => {
                let mut ancestor = tree.parent(node);
                while let Some(current) = ancestor {
                    if self.matches_at(tree, current, index - 1) {
                        return true;
                    }
                    ancestor = tree.parent(current);
                }
                false
            }
        }
    }

    fn parse(source: &str, whole: &str) -> Result<Self, SelectorError> {
        let mut complex = ComplexSelector {
            compounds: Vec::new(),
            combinators: Vec::new(),
        };
        let mut pending = None;
        let mut start = 0;

        for (i, c) in top_level(source) {
            let combinator = match c {
                '>' => Combinator::Child,
                c if c.is_whitespace() => Combinator::Descendant,
                '+' | '~' => return Err(SelectorError::Combinator(whole.to_string())),
                _ => continue,
            };
            complex.push(&source[start..i], &mut pending, whole)?;
            start = i + c.len_utf8();
            pending = match (pending, combinator) {
                (Some(Combinator::Child), Combinator::Child) => {
                    return Err(SelectorError::DanglingCombinator(whole.to_string()));
                }
                (Some(Combinator::Child), _) | (_, Combinator::Child) => Some(Combinator::Child),
                _ => Some(Combinator::Descendant),
            };
        }
        complex.push(&source[start..], &mut pending, whole)?;

        if pending.is_some() || complex.compounds.is_empty() {
            return Err(SelectorError::DanglingCombinator(whole.to_string()));
        }
        Ok(complex)
    }

    fn push(
        &mut self,
        segment: &str,
        pending: &mut Option<Combinator>,
        whole: &str,
    ) -> Result<(), SelectorError> {
        if segment.is_empty() {
            return Ok(());
        }
        let compound = CompoundSelector::parse(segment, whole)?;
        match pending.take() {
            Some(combinator) if !self.compounds.is_empty() => self.combinators.push(combinator),
            Some(_) => return Err(SelectorError::DanglingCombinator(whole.to_string())),
            None => {}
        }
        self.compounds.push(compound);
        Ok(())
    }
}

/// Parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<ComplexSelector>,
}

impl Selector {
    /// Parse a selector list such as `button, .faq > .trigger`
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut alternatives = Vec::new();
        let mut start = 0;
        let commas = top_level(trimmed).filter(|&(_, c)| c == ',').map(|(i, _)| i);
        for end in commas.chain(std::iter::once(trimmed.len())) {
            let part = trimmed[start..end].trim();
            if part.is_empty() {
                return Err(SelectorError::Empty);
            }
            alternatives.push(ComplexSelector::parse(part, trimmed)?);
            start = end + 1;
        }

        Ok(Self {
            source: trimmed.to_string(),
            alternatives,
        })
    }

    /// Check if the element at `node` matches any alternative
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.alternatives.iter().any(|alt| alt.matches(tree, node))
    }

    /// Selector text as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn alternatives(&self) -> &[ComplexSelector] {
        &self.alternatives
    }
}

/// Characters outside `[...]` and quoted strings, with their byte offsets
fn top_level(s: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    let mut depth = 0u32;
    let mut quote = None;
    s.char_indices().filter(move |&(_, c)| {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') if depth > 0 => depth -= 1,
            (None, _) => return depth == 0,
        }
        false
    })
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
