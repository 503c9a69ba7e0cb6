//! # Identityref — Cross-Module Identity References
//!
//! An [`IdentityRef`] names an identity together with the namespace and
//! prefix of the module that defines it. On the wire it is the triple
//! `"<identifier> <namespace> <prefix>"`, joined by single spaces; in
//! memory it is an [`IdentityStatement`].
//!
//! ## Equality
//!
//! An `IdentityRef` is comparable to another `IdentityRef`, to a bare
//! [`IdentityStatement`], and to a generic [`Statement`] tree of the
//! identity shape. Comparison with any other type does not compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValueError;
use crate::statement::{IdentityStatement, Statement};

const TYPE_NAME: &str = "identityref";

/// A YANG `identityref` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityRef(IdentityStatement);

impl IdentityRef {
    /// Parses the wire form `"<identifier> <namespace> <prefix>"`.
    ///
    /// The input is split on single spaces and must yield exactly three
    /// non-empty tokens. Leading, trailing and doubled spaces therefore
    /// fail.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] for any other token count or an empty
    /// token.
    pub fn parse(s: &str) -> Result<Self, ValueError> {
        let tokens: Vec<&str> = s.split(' ').collect();
        let [identifier, namespace, prefix] = tokens[..] else {
            tracing::debug!(input = s, tokens = tokens.len(), "identityref token count");
            return Err(ValueError::bad_value(
                TYPE_NAME,
                s,
                format!("expected 3 space-separated tokens, found {}", tokens.len()),
            ));
        };
        IdentityStatement::new(identifier, namespace, prefix)
            .map(Self)
            .map_err(|_| ValueError::bad_value(TYPE_NAME, s, "empty token"))
    }

    /// Constructs from the three discrete fields.
    ///
    /// Equivalent to parsing the space-joined fields, so a field
    /// containing a space is rejected rather than silently re-split.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] as for [`IdentityRef::parse`].
    pub fn new(identifier: &str, namespace: &str, prefix: &str) -> Result<Self, ValueError> {
        Self::parse(&format!("{identifier} {namespace} {prefix}"))
    }

    /// Wraps a structural value produced by a schema-aware caller.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] if the statement's fields would not
    /// survive the wire form.
    pub fn from_statement(statement: IdentityStatement) -> Result<Self, ValueError> {
        statement.validate()?;
        Ok(Self(statement))
    }

    /// Replaces the value from a wire string.
    ///
    /// # Errors
    ///
    /// As [`IdentityRef::parse`]; unchanged on failure.
    pub fn set_value_str(&mut self, s: &str) -> Result<(), ValueError> {
        *self = Self::parse(s)?;
        Ok(())
    }

    /// Replaces the value from a structural value.
    ///
    /// # Errors
    ///
    /// As [`IdentityRef::from_statement`]; unchanged on failure.
    pub fn set_statement(&mut self, statement: IdentityStatement) -> Result<(), ValueError> {
        *self = Self::from_statement(statement)?;
        Ok(())
    }

    /// The identity's identifier.
    pub fn identifier(&self) -> &str {
        self.0.identifier()
    }

    /// The defining module's namespace URI.
    pub fn namespace(&self) -> &str {
        self.0.module().namespace()
    }

    /// The defining module's prefix.
    pub fn prefix(&self) -> &str {
        self.0.module().prefix()
    }

    /// The structural value.
    pub fn statement(&self) -> &IdentityStatement {
        &self.0
    }

    /// Consumes the reference, yielding the structural value.
    pub fn into_statement(self) -> IdentityStatement {
        self.0
    }

    /// The canonical wire form, read back out of the structural value.
    pub fn canonical_string(&self) -> String {
        format!("{} {} {}", self.identifier(), self.namespace(), self.prefix())
    }
}

impl FromStr for IdentityRef {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<IdentityStatement> for IdentityRef {
    type Error = ValueError;

    fn try_from(statement: IdentityStatement) -> Result<Self, Self::Error> {
        Self::from_statement(statement)
    }
}

impl TryFrom<&Statement> for IdentityRef {
    type Error = ValueError;

    fn try_from(tree: &Statement) -> Result<Self, Self::Error> {
        IdentityStatement::try_from(tree).map(Self)
    }
}

impl fmt::Display for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.identifier(), self.namespace(), self.prefix())
    }
}

impl PartialEq<IdentityStatement> for IdentityRef {
    fn eq(&self, other: &IdentityStatement) -> bool {
        self.0 == *other
    }
}

impl PartialEq<IdentityRef> for IdentityStatement {
    fn eq(&self, other: &IdentityRef) -> bool {
        *self == other.0
    }
}

impl PartialEq<Statement> for IdentityRef {
    fn eq(&self, other: &Statement) -> bool {
        self.0.matches_tree(other)
    }
}

impl Serialize for IdentityRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_string())
    }
}

impl<'de> Deserialize<'de> for IdentityRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
