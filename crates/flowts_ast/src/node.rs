//! AST node definitions for Flow type declarations.
//!
//! Nodes are arena-allocated and immutable once built. Children are held by
//! `&'a` reference and sequences by arena slice, so a tree can be shared by
//! any number of printers.

use crate::kind::NodeKind;
use flowts_core::intern::InternedString;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Program
// ============================================================================

/// The top level of a Flow file: its statements in source order.
#[derive(Debug)]
pub struct Program<'a> {
    pub statements: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Entity Names
// ============================================================================

/// A possibly-qualified name used by a type reference.
#[derive(Debug, Clone, Copy)]
pub enum EntityName<'a> {
    Identifier(InternedString),
    QualifiedName(&'a QualifiedName<'a>),
}

/// `parent` followed by `name`. The segments are printed back to back; any
/// separator is already part of the segment text.
#[derive(Debug)]
pub struct QualifiedName<'a> {
    pub parent: EntityName<'a>,
    pub name: InternedString,
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    PrimitiveType(PrimitiveTypeNode),
    LiteralType(LiteralTypeNode<'a>),
    OptionalType(OptionalTypeNode<'a>),
    ArrayType(ArrayTypeNode<'a>),
    ObjectType(ObjectTypeNode<'a>),
    DecoratedGenericType(DecoratedGenericTypeNode<'a>),
    UnionType(UnionTypeNode<'a>),
    TypeReference(TypeReferenceNode<'a>),
    ParenType(ParenTypeNode<'a>),
}

#[derive(Debug)]
pub struct PrimitiveTypeNode {
    pub name: InternedString,
}

/// A literal type whose source text was rendered by the parser
/// (`'android'`, `42`, `true`).
#[derive(Debug)]
pub struct LiteralTypeNode<'a> {
    pub text: &'a str,
}

/// `?T`: the value may be absent.
#[derive(Debug)]
pub struct OptionalTypeNode<'a> {
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct ArrayTypeNode<'a> {
    pub element_type: &'a TypeNode<'a>,
    pub is_readonly: bool,
}

/// An object shape. `mixin_types` are spread into the shape before its own
/// members.
#[derive(Debug)]
pub struct ObjectTypeNode<'a> {
    pub mixin_types: NodeList<'a, TypeNode<'a>>,
    pub members: NodeList<'a, ObjectMember<'a>>,
}

/// `$ReadOnly<T>` and friends: a deep-immutability wrapper.
#[derive(Debug)]
pub struct DecoratedGenericTypeNode<'a> {
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct UnionTypeNode<'a> {
    pub element_types: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct TypeReferenceNode<'a> {
    pub name: EntityName<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ParenTypeNode<'a> {
    pub element_type: &'a TypeNode<'a>,
}

// ============================================================================
// Object Members
// ============================================================================

#[derive(Debug)]
pub enum ObjectMember<'a> {
    Prop(PropNode<'a>),
    Indexer(IndexerNode<'a>),
}

#[derive(Debug)]
pub struct PropNode<'a> {
    pub name: InternedString,
    pub is_optional: bool,
    pub is_readonly: bool,
    pub prop_type: &'a TypeNode<'a>,
}

/// `[key_name: key_type]: value_type`
#[derive(Debug)]
pub struct IndexerNode<'a> {
    pub key_name: InternedString,
    pub key_type: &'a TypeNode<'a>,
    pub value_type: &'a TypeNode<'a>,
    pub is_readonly: bool,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    UseStrictStatement,
    TypeAliasDeclaration(TypeAliasDeclaration<'a>),
}

#[derive(Debug)]
pub struct TypeAliasDeclaration<'a> {
    pub name: InternedString,
    pub has_export: bool,
    pub aliased_type: &'a TypeNode<'a>,
}

// ============================================================================
// Kind accessors
// ============================================================================

impl<'a> TypeNode<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            TypeNode::PrimitiveType(_) => NodeKind::PrimitiveType,
            TypeNode::LiteralType(_) => NodeKind::LiteralType,
            TypeNode::OptionalType(_) => NodeKind::OptionalType,
            TypeNode::ArrayType(_) => NodeKind::ArrayType,
            TypeNode::ObjectType(_) => NodeKind::ObjectType,
            TypeNode::DecoratedGenericType(_) => NodeKind::DecoratedGenericType,
            TypeNode::UnionType(_) => NodeKind::UnionType,
            TypeNode::TypeReference(_) => NodeKind::TypeReference,
            TypeNode::ParenType(_) => NodeKind::ParenType,
        }
    }

    /// The union node, when this type is a bare (unparenthesized) union.
    pub fn as_union(&self) -> Option<&UnionTypeNode<'a>> {
        match self {
            TypeNode::UnionType(n) => Some(n),
            _ => None,
        }
    }
}

impl<'a> ObjectMember<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            ObjectMember::Prop(_) => NodeKind::Prop,
            ObjectMember::Indexer(_) => NodeKind::Indexer,
        }
    }
}

impl<'a> Statement<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::UseStrictStatement => NodeKind::UseStrictStat,
            Statement::TypeAliasDeclaration(_) => NodeKind::TypeAliasDecl,
        }
    }
}
