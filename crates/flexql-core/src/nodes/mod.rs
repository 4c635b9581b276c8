//! Query node tree.
//!
//! Nodes live in a `QueryTree` arena and are addressed by `NodeId`. Interior
//! nodes own an ordered list of child ids; rewriting a node means allocating
//! new nodes and replacing a child-id list, never aliasing a subtree.
//!
//! The variant set is closed. Passes match on `NodeKind` exhaustively, so a
//! new variant has to be handled everywhere before the workspace compiles.

mod printer;
mod query_string;
mod tree;

#[cfg(test)]
mod query_string_tests;

use rowan::{TextRange, TextSize};

pub use printer::TreePrinter;
pub use tree::QueryTree;

/// Position of a node in the original query string.
///
/// Carried for diagnostics only; passes never interpret it.
pub type Span = TextRange;

/// Build a span from `begin`/`end` offsets.
///
/// # Panics
/// Panics if `begin > end`.
pub fn span(begin: u32, end: u32) -> Span {
    TextRange::new(TextSize::from(begin), TextSize::from(end))
}

/// Field name reserved for "no field given".
///
/// Nodes on this field render without a `field:` prefix.
pub const PLAINTEXT_FIELD: &str = "_plain";

/// A lightweight handle to a node in a `QueryTree`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Clause necessity attached by a `Modifier` node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Modifier {
    /// Explicitly unspecified: the clause follows the enclosing operator.
    #[default]
    None,
    /// `+clause`
    Required,
    /// `-clause` / `NOT clause`
    Prohibited,
}

impl Modifier {
    /// Prefix used in front of terms and phrases.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Required => "+",
            Self::Prohibited => "-",
        }
    }

    /// Prefix used in front of boolean sub-expressions.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Required => "+",
            Self::Prohibited => "NOT ",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Required => "required",
            Self::Prohibited => "prohibited",
        }
    }

    /// Whether the user stated the clause necessity (required or prohibited).
    pub fn is_explicit(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Operator tag of a boolean node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BooleanOp {
    /// Operator not written in the query; resolved from the configured default.
    #[default]
    Unspecified,
    /// Conjunctive node: `a AND b`.
    And,
    /// Disjunctive node: `a OR b`.
    Or,
}

impl BooleanOp {
    /// Separator placed between rendered children.
    pub fn separator(self) -> &'static str {
        match self {
            Self::Unspecified => " ",
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Field name and text of a term or phrase node.
///
/// Both are always present; an unspecified field is `PLAINTEXT_FIELD`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FieldNode {
    field: String,
    text: String,
}

impl FieldNode {
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Term on the default field.
    pub fn plaintext(text: impl Into<String>) -> Self {
        Self::new(PLAINTEXT_FIELD, text)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_default_field(&self) -> bool {
        self.field == PLAINTEXT_FIELD
    }
}

/// Node variants.
#[derive(Clone, PartialEq, Debug)]
pub enum NodeKind {
    /// Single term on a field.
    Field(FieldNode),
    /// Phrase on a field. Phrase-ness is the variant itself, not a flag.
    QuotedField(FieldNode),
    /// Wraps exactly one child with a clause necessity.
    Modifier(Modifier),
    /// Ordered boolean combination of any number of children.
    Boolean(BooleanOp),
    /// Explicit parentheses around exactly one child.
    Group,
    /// Relevance weight applied to exactly one child.
    Boost(f32),
}

/// How many children a variant admits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ChildArity {
    Leaf,
    Single,
    Many,
}

impl NodeKind {
    /// Display name of the variant.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Field(_) => "Field",
            Self::QuotedField(_) => "QuotedField",
            Self::Modifier(_) => "Modifier",
            Self::Boolean(BooleanOp::Unspecified) => "Boolean",
            Self::Boolean(BooleanOp::And) => "And",
            Self::Boolean(BooleanOp::Or) => "Or",
            Self::Group => "Group",
            Self::Boost(_) => "Boost",
        }
    }

    pub(crate) fn arity(&self) -> ChildArity {
        match self {
            Self::Field(_) | Self::QuotedField(_) => ChildArity::Leaf,
            Self::Modifier(_) | Self::Group | Self::Boost(_) => ChildArity::Single,
            Self::Boolean(_) => ChildArity::Many,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.arity() == ChildArity::Leaf
    }

    /// Field data of term and phrase nodes.
    pub fn as_field(&self) -> Option<&FieldNode> {
        match self {
            Self::Field(f) | Self::QuotedField(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_phrase(&self) -> bool {
        matches!(self, Self::QuotedField(_))
    }

    pub fn modifier(&self) -> Option<Modifier> {
        match self {
            Self::Modifier(m) => Some(*m),
            _ => None,
        }
    }

    pub fn boolean_op(&self) -> Option<BooleanOp> {
        match self {
            Self::Boolean(op) => Some(*op),
            _ => None,
        }
    }
}

/// One arena slot: variant, position and children.
///
/// Fields are private; only `QueryTree` changes a node, and only its child list.
#[derive(Clone, PartialEq, Debug)]
pub struct Node {
    kind: NodeKind,
    span: Span,
    children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn begin(&self) -> u32 {
        self.span.start().into()
    }

    pub fn end(&self) -> u32 {
        self.span.end().into()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }
}
