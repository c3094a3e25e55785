//! Route pattern compilation.
//!
//! # Responsibilities
//! - Turn path-style patterns (`/pages/:id/`, `/files/*path`) into anchored regexes
//! - Accept pre-built regexes untouched
//! - Reject pattern values of any other kind
//!
//! # Design Decisions
//! - `:name` captures one segment (`[^/]*`), `*name` captures anything, non-greedy
//! - Every other character is matched literally
//! - Compiled matchers are anchored at both ends; pre-built ones are not altered

use regex::Regex;

use crate::routing::error::RouterError;

const NAMED_PARAM: &str = "([^/]*)";
const SPLAT_PARAM: &str = "(.*?)";

/// Anything that can be registered as a route pattern.
pub trait IntoPattern {
    fn into_matcher(self) -> Result<Regex, RouterError>;
}

impl IntoPattern for Regex {
    fn into_matcher(self) -> Result<Regex, RouterError> {
        Ok(self)
    }
}

impl IntoPattern for &Regex {
    fn into_matcher(self) -> Result<Regex, RouterError> {
        Ok(self.clone())
    }
}

impl IntoPattern for &str {
    fn into_matcher(self) -> Result<Regex, RouterError> {
        compile_pattern(self)
    }
}

impl IntoPattern for String {
    fn into_matcher(self) -> Result<Regex, RouterError> {
        compile_pattern(&self)
    }
}

impl IntoPattern for &String {
    fn into_matcher(self) -> Result<Regex, RouterError> {
        compile_pattern(self)
    }
}

/// Route tables loaded from TOML: a string is a path pattern and a
/// `{ regex = "..." }` table is a pre-built matcher.
impl IntoPattern for &toml::Value {
    fn into_matcher(self) -> Result<Regex, RouterError> {
        match self {
            toml::Value::String(pattern) => compile_pattern(pattern),
            toml::Value::Table(table) => match table.get("regex") {
                Some(toml::Value::String(source)) => Ok(Regex::new(source)?),
                _ => Err(RouterError::InvalidPatternKind { kind: "table" }),
            },
            other => Err(RouterError::InvalidPatternKind {
                kind: other.type_str(),
            }),
        }
    }
}

/// Same shape as the TOML form, for route tables received as JSON.
impl IntoPattern for &serde_json::Value {
    fn into_matcher(self) -> Result<Regex, RouterError> {
        use serde_json::Value;

        match self {
            Value::String(pattern) => compile_pattern(pattern),
            Value::Object(object) => match object.get("regex") {
                Some(Value::String(source)) => Ok(Regex::new(source)?),
                _ => Err(RouterError::InvalidPatternKind { kind: "object" }),
            },
            Value::Null => Err(RouterError::InvalidPatternKind { kind: "null" }),
            Value::Bool(_) => Err(RouterError::InvalidPatternKind { kind: "boolean" }),
            Value::Number(_) => Err(RouterError::InvalidPatternKind { kind: "number" }),
            Value::Array(_) => Err(RouterError::InvalidPatternKind { kind: "array" }),
        }
    }
}

/// Compile a path-style pattern into an anchored regex.
pub fn compile_pattern(pattern: &str) -> Result<Regex, RouterError> {
    Ok(Regex::new(&pattern_source(pattern))?)
}

/// Build the regex source for a path-style pattern.
fn pattern_source(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() + 2);
    let mut literal = String::new();
    let mut chars = pattern.char_indices();

    source.push('^');
    while let Some((i, c)) = chars.next() {
        if c == ':' || c == '*' {
            let name_len = pattern[i + 1..]
                .bytes()
                .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
                .count();
            if name_len > 0 {
                source.push_str(&regex::escape(&literal));
                literal.clear();
                source.push_str(if c == ':' { NAMED_PARAM } else { SPLAT_PARAM });
                // parameter names are ASCII, one char per byte
                for _ in 0..name_len {
                    chars.next();
                }
                continue;
            }
        }
        literal.push(c);
    }
    source.push_str(&regex::escape(&literal));
    source.push('$');
    source
}
