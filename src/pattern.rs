//! Name patterns: `img_{color}_{size}.png` style templates.
//!
//! The pattern is split into literal runs and `{name}` placeholders once, up
//! front. Resolution then walks the token list, so a parameter called `size`
//! can never match inside `{size2}`.

use std::path::Path;

use crate::types::Combination;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PatternToken {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NamePattern {
    raw: String,
    tokens: Vec<PatternToken>,
}

impl NamePattern {
    pub(crate) fn parse(raw: &str) -> Self {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut rest = raw;

        while let Some(open) = rest.find('{') {
            let after_open = &rest[open + 1..];
            let Some(close) = after_open.find('}') else {
                break;
            };
            let name = &after_open[..close];
            // `{a{b}` treats the first brace as text and `{b}` as the placeholder.
            if let Some(inner) = name.rfind('{') {
                literal.push_str(&rest[..open + 1 + inner]);
                rest = &rest[open + 1 + inner..];
                continue;
            }
            literal.push_str(&rest[..open]);
            if !literal.is_empty() {
                tokens.push(PatternToken::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(PatternToken::Placeholder(name.to_string()));
            rest = &after_open[close + 1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            tokens.push(PatternToken::Literal(literal));
        }

        Self {
            raw: raw.to_string(),
            tokens,
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            PatternToken::Placeholder(name) => Some(name.as_str()),
            PatternToken::Literal(_) => None,
        })
    }

    /// Substitute every placeholder with the combination's value.
    ///
    /// Placeholders with no matching parameter are emitted unchanged.
    pub(crate) fn resolve(&self, combination: &Combination<'_>) -> String {
        let mut out = String::with_capacity(self.raw.len());
        for token in &self.tokens {
            match token {
                PatternToken::Literal(text) => out.push_str(text),
                PatternToken::Placeholder(name) => match combination.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }

    /// Extension of the pattern's file name including the dot, e.g. `.png`.
    /// Empty when the final component has none.
    pub(crate) fn extension(&self) -> String {
        Path::new(&self.raw)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}
