//! Declared-type descriptors and their textual projections
//!
//! A reflected type is a nullability flag plus one or more named
//! alternatives (builtin or class names). It renders two ways: a compact
//! annotation usable in a signature position and a doc-tag form for
//! `@var`/`@return` lines. An absent type is `Option<PhpType>::None` at the
//! use site and degrades to an untyped annotation and the `mixed` doc tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a parameter, return position, or property.
///
/// `alternatives` holds at least one name; a single entry is a plain type,
/// more than one is a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhpType {
    /// Whether null is an accepted value in addition to the alternatives
    #[serde(default)]
    pub nullable: bool,

    /// Ordered type alternatives (builtin names or class names)
    pub alternatives: Vec<String>,
}

impl PhpType {
    /// Create a single-name type
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            nullable: false,
            alternatives: vec![name.into()],
        }
    }

    /// Create a union type from ordered alternatives
    pub fn union<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nullable: false,
            alternatives: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark the type as nullable
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Whether this type is a union of two or more alternatives
    pub fn is_union(&self) -> bool {
        self.alternatives.len() > 1
    }

    /// Signature-position annotation.
    ///
    /// A single name renders as-is, `?`-prefixed when nullable. The stub
    /// syntax does not take union annotations, so a union degrades to the
    /// empty (untyped) annotation; the full union survives in
    /// [`PhpType::doc_type`].
    pub fn annotation(&self) -> String {
        match self.alternatives.as_slice() {
            [single] if self.nullable => format!("?{}", single),
            [single] => single.clone(),
            _ => String::new(),
        }
    }

    /// Doc-tag form: alternatives joined with `|`, `|null` appended when
    /// nullable.
    pub fn doc_type(&self) -> String {
        let joined = self.alternatives.join("|");
        if self.nullable {
            format!("{}|null", joined)
        } else {
            joined
        }
    }
}

impl fmt::Display for PhpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.doc_type())
    }
}

/// Doc-tag form of a possibly absent type; absent renders as `mixed`.
pub fn doc_type_of(ty: Option<&PhpType>) -> String {
    match ty {
        Some(t) => t.doc_type(),
        None => "mixed".to_string(),
    }
}
