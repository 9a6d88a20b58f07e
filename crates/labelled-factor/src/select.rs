//! Column selectors and their resolution against a table.
//!
//! Selectors form a small closed language:
//!
//! | text              | selector                                  |
//! |-------------------|-------------------------------------------|
//! | `e42dep`          | [`Selector::Name`]                        |
//! | `c12hour:c161sex` | [`Selector::Range`], inclusive            |
//! | `contains(dep)`   | [`NamePredicate::Contains`]               |
//! | `starts_with(c)`  | [`NamePredicate::StartsWith`]             |
//! | `ends_with(sex)`  | [`NamePredicate::EndsWith`]               |
//!
//! Predicate arguments may be wrapped in double quotes.

use std::fmt;
use std::str::FromStr;

use labelled_model::Table;
use tracing::trace;

use crate::error::SelectorError;

/// Predicate over column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePredicate {
    Contains(String),
    StartsWith(String),
    EndsWith(String),
}

impl NamePredicate {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Contains(part) => name.contains(part.as_str()),
            Self::StartsWith(prefix) => name.starts_with(prefix.as_str()),
            Self::EndsWith(suffix) => name.ends_with(suffix.as_str()),
        }
    }
}

/// Identifies a subset of a table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Name(String),
    Range { from: String, to: String },
    Predicate(NamePredicate),
}

impl Selector {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn range(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Range {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn contains(part: impl Into<String>) -> Self {
        Self::Predicate(NamePredicate::Contains(part.into()))
    }

    pub fn starts_with(prefix: impl Into<String>) -> Self {
        Self::Predicate(NamePredicate::StartsWith(prefix.into()))
    }

    pub fn ends_with(suffix: impl Into<String>) -> Self {
        Self::Predicate(NamePredicate::EndsWith(suffix.into()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Range { from, to } => write!(f, "{from}:{to}"),
            Self::Predicate(NamePredicate::Contains(s)) => write!(f, "contains({s})"),
            Self::Predicate(NamePredicate::StartsWith(s)) => write!(f, "starts_with({s})"),
            Self::Predicate(NamePredicate::EndsWith(s)) => write!(f, "ends_with({s})"),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| SelectorError::Malformed {
            input: input.to_string(),
            reason,
        };
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(malformed("empty selector"));
        }

        if let Some(body) = trimmed.strip_suffix(')') {
            let (func, arg) = body
                .split_once('(')
                .ok_or_else(|| malformed("unbalanced parenthesis"))?;
            let arg = strip_quotes(arg);
            if arg.is_empty() {
                return Err(malformed("predicate needs an argument"));
            }
            let predicate = match func.trim() {
                "contains" => NamePredicate::Contains(arg),
                "starts_with" => NamePredicate::StartsWith(arg),
                "ends_with" => NamePredicate::EndsWith(arg),
                _ => return Err(malformed("unknown predicate")),
            };
            return Ok(Self::Predicate(predicate));
        }

        if let Some((from, to)) = trimmed.split_once(':') {
            let (from, to) = (from.trim(), to.trim());
            if from.is_empty() || to.is_empty() {
                return Err(malformed("range needs both endpoints"));
            }
            return Ok(Self::range(from, to));
        }

        Ok(Self::name(trimmed))
    }
}

/// Strips whitespace and one pair of wrapping double quotes.
fn strip_quotes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Resolves selectors to column names, de-duplicated in first-selected order.
///
/// An empty selector list selects every column. Unknown names and range
/// endpoints are errors; a predicate may match nothing.
pub fn resolve_selectors(
    table: &Table,
    selectors: &[Selector],
) -> Result<Vec<String>, SelectorError> {
    let names: Vec<&str> = table.column_names().collect();
    if selectors.is_empty() {
        return Ok(names.iter().map(|name| (*name).to_string()).collect());
    }

    let position = |name: &str| {
        names
            .iter()
            .position(|candidate| *candidate == name)
            .ok_or_else(|| SelectorError::UnknownColumn {
                name: name.to_string(),
            })
    };

    let mut resolved: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        if !resolved.iter().any(|existing| existing == name) {
            resolved.push(name.to_string());
        }
    };

    for selector in selectors {
        match selector {
            Selector::Name(name) => {
                let idx = position(name)?;
                push(names[idx]);
            }
            Selector::Range { from, to } => {
                let start = position(from)?;
                let end = position(to)?;
                if start <= end {
                    names[start..=end].iter().for_each(|name| push(name));
                } else {
                    names[end..=start].iter().rev().for_each(|name| push(name));
                }
            }
            Selector::Predicate(predicate) => {
                names
                    .iter()
                    .filter(|name| predicate.matches(name))
                    .for_each(|name| push(name));
            }
        }
    }

    trace!(selected = ?resolved, "resolved column selectors");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_removes_wrapping_quotes() {
        assert_eq!(strip_quotes("\"dep\""), "dep");
        assert_eq!(strip_quotes("  dep  "), "dep");
        assert_eq!(strip_quotes("\"partial"), "\"partial");
    }

    #[test]
    fn display_matches_parse() {
        for text in ["e42dep", "a:b", "contains(dep)", "starts_with(e)", "ends_with(sex)"] {
            let selector: Selector = text.parse().expect("valid selector");
            assert_eq!(selector.to_string(), text);
        }
    }
}
