//! NodeKind enum - the closed set of node tags in the Flow type AST.
//!
//! Tags are the strings the Flow parser stamps on each node's `kind`
//! property. They are the only place the open set of input tags meets the
//! closed set of AST variants.

use std::fmt;

/// Which closed family a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Type,
    ObjectMember,
    Statement,
}

impl NodeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeCategory::Type => "type",
            NodeCategory::ObjectMember => "object member",
            NodeCategory::Statement => "statement",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of an AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum NodeKind {
    // ========================================================================
    // Types
    // ========================================================================
    PrimitiveType,
    LiteralType,
    OptionalType,
    ArrayType,
    ObjectType,
    DecoratedGenericType,
    UnionType,
    TypeReference,
    ParenType,

    // ========================================================================
    // Object members
    // ========================================================================
    Prop,
    Indexer,

    // ========================================================================
    // Statements
    // ========================================================================
    UseStrictStat,
    TypeAliasDecl,
}

impl NodeKind {
    pub const TYPES: [NodeKind; 9] = [
        NodeKind::PrimitiveType,
        NodeKind::LiteralType,
        NodeKind::OptionalType,
        NodeKind::ArrayType,
        NodeKind::ObjectType,
        NodeKind::DecoratedGenericType,
        NodeKind::UnionType,
        NodeKind::TypeReference,
        NodeKind::ParenType,
    ];

    pub const OBJECT_MEMBERS: [NodeKind; 2] = [NodeKind::Prop, NodeKind::Indexer];

    pub const STATEMENTS: [NodeKind; 2] = [NodeKind::UseStrictStat, NodeKind::TypeAliasDecl];

    /// The tag text used by the parser for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::PrimitiveType => "PrimitiveType",
            NodeKind::LiteralType => "LiteralType",
            NodeKind::OptionalType => "OptionalType",
            NodeKind::ArrayType => "ArrayType",
            NodeKind::ObjectType => "ObjectType",
            NodeKind::DecoratedGenericType => "DecoratedGenericType",
            NodeKind::UnionType => "UnionType",
            NodeKind::TypeReference => "TypeReference",
            NodeKind::ParenType => "ParenType",
            NodeKind::Prop => "Prop",
            NodeKind::Indexer => "Indexer",
            NodeKind::UseStrictStat => "UseStrictStat",
            NodeKind::TypeAliasDecl => "TypeAliasDecl",
        }
    }

    pub fn category(self) -> NodeCategory {
        match self {
            NodeKind::Prop | NodeKind::Indexer => NodeCategory::ObjectMember,
            NodeKind::UseStrictStat | NodeKind::TypeAliasDecl => NodeCategory::Statement,
            _ => NodeCategory::Type,
        }
    }

    /// Look up a tag within one category. A tag that names a kind from a
    /// different category is not a match: a `Prop` in type position is as
    /// unrecognized as a tag nobody has heard of.
    pub fn from_tag(category: NodeCategory, tag: &str) -> Option<NodeKind> {
        let candidates: &[NodeKind] = match category {
            NodeCategory::Type => &Self::TYPES,
            NodeCategory::ObjectMember => &Self::OBJECT_MEMBERS,
            NodeCategory::Statement => &Self::STATEMENTS,
        };
        candidates.iter().copied().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
