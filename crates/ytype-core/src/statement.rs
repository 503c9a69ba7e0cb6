//! # Statements — Structural Values
//!
//! [`Statement`] is the generic labeled tree handed to document-building
//! code: a keyword, an optional argument and ordered children. It is
//! read-only once built and holds no parent links.
//!
//! [`IdentityStatement`] is the fixed two-level shape an identity
//! reference materializes into:
//!
//! ```text
//! Identity <identifier>
//!   module <unknown>
//!     namespace <namespace-uri>
//!     prefix <prefix>
//! ```
//!
//! The referenced module's own name cannot be recovered from the wire
//! form, so it is carried as [`ModuleName::Unknown`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Keyword of the root node of an identity statement.
pub const IDENTITY_KEYWORD: &str = "Identity";
/// Keyword of the module node.
pub const MODULE_KEYWORD: &str = "module";
/// Keyword of the module's namespace child.
pub const NAMESPACE_KEYWORD: &str = "namespace";
/// Keyword of the module's prefix child.
pub const PREFIX_KEYWORD: &str = "prefix";
/// Argument rendered for a module whose name is not known.
pub const UNKNOWN_MODULE: &str = "<unknown>";

const TYPE_NAME: &str = "identityref";

/// A node of a generic labeled tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    keyword: String,
    argument: Option<String>,
    children: Vec<Statement>,
}

impl Statement {
    /// Creates a node.
    pub fn new(
        keyword: impl Into<String>,
        argument: Option<String>,
        children: Vec<Statement>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            argument,
            children,
        }
    }

    /// Creates a childless node with an argument.
    pub fn leaf(keyword: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::new(keyword, Some(argument.into()), Vec::new())
    }

    /// The node's keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The node's argument, if any.
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// The node's children, in order.
    pub fn children(&self) -> &[Statement] {
        &self.children
    }

    /// The first child with the given keyword.
    pub fn child(&self, keyword: &str) -> Option<&Statement> {
        self.children.iter().find(|c| c.keyword == keyword)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_node(node: &Statement, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:indent$}{}", "", node.keyword, indent = depth * 2)?;
            if let Some(arg) = &node.argument {
                write!(f, " {arg}")?;
            }
            writeln!(f)?;
            for child in &node.children {
                write_node(child, depth + 1, f)?;
            }
            Ok(())
        }
        write_node(self, 0, f)
    }
}

/// The name of the module defining an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleName {
    /// Not recoverable from the wire form.
    Unknown,
    /// Supplied by a schema-aware caller.
    Named(String),
}

impl ModuleName {
    /// The name as rendered in a tree argument.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => UNKNOWN_MODULE,
            Self::Named(name) => name,
        }
    }
}

/// The module node of an identity statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleStatement {
    name: ModuleName,
    namespace: String,
    prefix: String,
}

impl ModuleStatement {
    /// The module's name.
    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    /// The module's namespace URI.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The module's prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// The structural value of an identity reference.
///
/// Every field is a single non-empty token without spaces, so that the
/// space-joined wire form splits back into exactly the same fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityStatement {
    identifier: String,
    module: ModuleStatement,
}

impl IdentityStatement {
    /// Builds the statement with an unknown module name.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] if any field is empty or contains a space.
    pub fn new(
        identifier: impl Into<String>,
        namespace: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Result<Self, ValueError> {
        Self::with_module_name(identifier, ModuleName::Unknown, namespace, prefix)
    }

    /// Builds the statement with a known module name.
    ///
    /// # Errors
    ///
    /// [`ValueError::BadValue`] if any wire field is empty or contains a
    /// space.
    pub fn with_module_name(
        identifier: impl Into<String>,
        name: ModuleName,
        namespace: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Result<Self, ValueError> {
        let statement = Self {
            identifier: identifier.into(),
            module: ModuleStatement {
                name,
                namespace: namespace.into(),
                prefix: prefix.into(),
            },
        };
        statement.validate()?;
        Ok(statement)
    }

    /// The identity's identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The defining module.
    pub fn module(&self) -> &ModuleStatement {
        &self.module
    }

    /// Materializes the generic tree.
    pub fn to_tree(&self) -> Statement {
        let module = Statement::new(
            MODULE_KEYWORD,
            Some(self.module.name.as_str().to_string()),
            vec![
                Statement::leaf(NAMESPACE_KEYWORD, self.module.namespace.clone()),
                Statement::leaf(PREFIX_KEYWORD, self.module.prefix.clone()),
            ],
        );
        Statement::new(IDENTITY_KEYWORD, Some(self.identifier.clone()), vec![module])
    }

    /// Whether `tree` has exactly this statement's shape and content.
    pub fn matches_tree(&self, tree: &Statement) -> bool {
        Self::try_from(tree).map_or(false, |s| s == *self)
    }

    pub(crate) fn validate(&self) -> Result<(), ValueError> {
        for (field, value) in [
            ("identifier", self.identifier.as_str()),
            ("namespace", self.module.namespace.as_str()),
            ("prefix", self.module.prefix.as_str()),
        ] {
            if value.is_empty() {
                return Err(ValueError::bad_value(TYPE_NAME, value, format!("empty {field}")));
            }
            if value.contains(' ') {
                return Err(ValueError::bad_value(
                    TYPE_NAME,
                    value,
                    format!("{field} contains a space"),
                ));
            }
        }
        Ok(())
    }
}

impl TryFrom<&Statement> for IdentityStatement {
    type Error = ValueError;

    /// Accepts a tree only if it has exactly the identity shape.
    fn try_from(tree: &Statement) -> Result<Self, Self::Error> {
        let malformed = |reason: &str| ValueError::bad_value(TYPE_NAME, tree.to_string(), reason);

        if tree.keyword() != IDENTITY_KEYWORD {
            return Err(malformed("root is not an Identity statement"));
        }
        let identifier = tree.argument().ok_or_else(|| malformed("Identity has no argument"))?;
        let [module] = tree.children() else {
            return Err(malformed("Identity must have exactly one module child"));
        };
        if module.keyword() != MODULE_KEYWORD {
            return Err(malformed("Identity child is not a module statement"));
        }
        let [namespace, prefix] = module.children() else {
            return Err(malformed("module must have exactly namespace and prefix children"));
        };
        if namespace.keyword() != NAMESPACE_KEYWORD || prefix.keyword() != PREFIX_KEYWORD {
            return Err(malformed("module children must be namespace then prefix"));
        }
        if !namespace.children().is_empty() || !prefix.children().is_empty() {
            return Err(malformed("namespace and prefix must be leaves"));
        }
        let name = match module.argument() {
            None | Some(UNKNOWN_MODULE) => ModuleName::Unknown,
            Some(name) => ModuleName::Named(name.to_string()),
        };
        Self::with_module_name(
            identifier,
            name,
            namespace.argument().unwrap_or_default(),
            prefix.argument().unwrap_or_default(),
        )
    }
}
