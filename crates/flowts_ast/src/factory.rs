//! Node construction.
//!
//! `NodeFactory` is the one way nodes get into an arena: it interns names,
//! copies literal text and moves child nodes into arena storage. The loader
//! uses it for interchange input and tests use it to build trees by hand.

use crate::node::*;
use flowts_core::{AstArena, StringInterner};

pub struct NodeFactory<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
}

impl<'a> NodeFactory<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self { arena, interner }
    }

    fn alloc_type(&self, ty: TypeNode<'a>) -> &'a TypeNode<'a> {
        self.arena.alloc(ty)
    }

    // ========================================================================
    // Entity names
    // ========================================================================

    pub fn identifier(&self, name: &str) -> EntityName<'a> {
        EntityName::Identifier(self.interner.intern(name))
    }

    pub fn qualified_name(&self, parent: EntityName<'a>, name: &str) -> EntityName<'a> {
        EntityName::QualifiedName(self.arena.alloc(QualifiedName {
            parent,
            name: self.interner.intern(name),
        }))
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn primitive(&self, name: &str) -> TypeNode<'a> {
        TypeNode::PrimitiveType(PrimitiveTypeNode {
            name: self.interner.intern(name),
        })
    }

    pub fn literal(&self, text: &str) -> TypeNode<'a> {
        TypeNode::LiteralType(LiteralTypeNode {
            text: self.arena.alloc_str(text),
        })
    }

    pub fn optional(&self, element_type: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::OptionalType(OptionalTypeNode {
            element_type: self.alloc_type(element_type),
        })
    }

    pub fn array(&self, element_type: TypeNode<'a>, is_readonly: bool) -> TypeNode<'a> {
        TypeNode::ArrayType(ArrayTypeNode {
            element_type: self.alloc_type(element_type),
            is_readonly,
        })
    }

    pub fn object(&self, mixin_types: Vec<TypeNode<'a>>, members: Vec<ObjectMember<'a>>) -> TypeNode<'a> {
        TypeNode::ObjectType(ObjectTypeNode {
            mixin_types: self.arena.alloc_slice(mixin_types),
            members: self.arena.alloc_slice(members),
        })
    }

    pub fn decorated_generic(&self, element_type: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::DecoratedGenericType(DecoratedGenericTypeNode {
            element_type: self.alloc_type(element_type),
        })
    }

    pub fn union(&self, element_types: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        TypeNode::UnionType(UnionTypeNode {
            element_types: self.arena.alloc_slice(element_types),
        })
    }

    pub fn type_reference(&self, name: EntityName<'a>, type_arguments: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        TypeNode::TypeReference(TypeReferenceNode {
            name,
            type_arguments: self.arena.alloc_slice(type_arguments),
        })
    }

    /// Shorthand for a reference to a bare name with no type arguments.
    pub fn named(&self, name: &str) -> TypeNode<'a> {
        self.type_reference(self.identifier(name), Vec::new())
    }

    pub fn paren(&self, element_type: TypeNode<'a>) -> TypeNode<'a> {
        TypeNode::ParenType(ParenTypeNode {
            element_type: self.alloc_type(element_type),
        })
    }

    // ========================================================================
    // Object members
    // ========================================================================

    pub fn prop(&self, name: &str, is_optional: bool, is_readonly: bool, prop_type: TypeNode<'a>) -> ObjectMember<'a> {
        ObjectMember::Prop(PropNode {
            name: self.interner.intern(name),
            is_optional,
            is_readonly,
            prop_type: self.alloc_type(prop_type),
        })
    }

    pub fn indexer(
        &self,
        key_name: &str,
        key_type: TypeNode<'a>,
        value_type: TypeNode<'a>,
        is_readonly: bool,
    ) -> ObjectMember<'a> {
        ObjectMember::Indexer(IndexerNode {
            key_name: self.interner.intern(key_name),
            key_type: self.alloc_type(key_type),
            value_type: self.alloc_type(value_type),
            is_readonly,
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn use_strict(&self) -> Statement<'a> {
        Statement::UseStrictStatement
    }

    pub fn type_alias(&self, name: &str, has_export: bool, aliased_type: TypeNode<'a>) -> Statement<'a> {
        Statement::TypeAliasDeclaration(TypeAliasDeclaration {
            name: self.interner.intern(name),
            has_export,
            aliased_type: self.alloc_type(aliased_type),
        })
    }

    pub fn program(&self, statements: Vec<Statement<'a>>) -> Program<'a> {
        Program {
            statements: self.arena.alloc_slice(statements),
        }
    }
}
