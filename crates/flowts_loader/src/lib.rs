//! flowts_loader: decode the Flow parser's AST from JSON.
//!
//! The parser hands over its tree as plain objects tagged with a `kind`
//! string. The loader checks each tag against the closed set for its
//! position and builds arena nodes through `NodeFactory`. It is the only
//! place an unknown tag can appear; past this point every match over the
//! AST is exhaustive.
//!
//! Boolean flags default to `false` and `mixinTypes` / `typeArguments`
//! default to empty when absent. Every other field is required.

mod error;

pub use error::LoadError;

use flowts_ast::node::*;
use flowts_ast::{NodeCategory, NodeFactory, NodeKind};
use flowts_core::{AstArena, StringInterner};
use serde_json::{Map, Value};

type Result<T> = std::result::Result<T, LoadError>;

const ENTITY_NAME: &str = "EntityName";
const PROGRAM: &str = "Program";

pub struct Loader<'a> {
    factory: NodeFactory<'a>,
}

impl<'a> Loader<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        Self {
            factory: NodeFactory::new(arena, interner),
        }
    }

    /// Parse JSON text and load the program it describes.
    pub fn load_program_str(&self, text: &str) -> Result<Program<'a>> {
        let value: Value = serde_json::from_str(text)?;
        self.load_program_value(&value)
    }

    /// Accepts `{ "statements": [...] }` or a bare statement array.
    pub fn load_program_value(&self, value: &Value) -> Result<Program<'a>> {
        let statements = match value {
            Value::Array(items) => items,
            Value::Object(map) => match map.get("statements") {
                Some(Value::Array(items)) => items,
                Some(_) => {
                    return Err(LoadError::InvalidField {
                        kind: PROGRAM,
                        field: "statements",
                        expected: "an array",
                    })
                }
                None => return Err(LoadError::MissingField { kind: PROGRAM, field: "statements" }),
            },
            _ => {
                return Err(LoadError::InvalidField {
                    kind: PROGRAM,
                    field: "statements",
                    expected: "an array",
                })
            }
        };
        let statements = statements
            .iter()
            .map(|stmt| self.load_statement(stmt))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(statements = statements.len(), "loaded program");
        Ok(self.factory.program(statements))
    }

    pub fn load_statement(&self, value: &Value) -> Result<Statement<'a>> {
        let node = Node::read(value, NodeCategory::Statement)?;
        let f = &self.factory;
        Ok(match node.kind {
            NodeKind::UseStrictStat => f.use_strict(),
            NodeKind::TypeAliasDecl => {
                let aliased_type = self.load_type(node.required("aliasedType")?)?;
                f.type_alias(node.str_field("name")?, node.bool_field("hasExport")?, aliased_type)
            }
            _ => return Err(node.unrecognized()),
        })
    }

    pub fn load_type(&self, value: &Value) -> Result<TypeNode<'a>> {
        let node = Node::read(value, NodeCategory::Type)?;
        let f = &self.factory;
        Ok(match node.kind {
            NodeKind::PrimitiveType => f.primitive(node.str_field("name")?),
            NodeKind::LiteralType => f.literal(node.str_field("text")?),
            NodeKind::OptionalType => f.optional(self.load_type(node.required("elementType")?)?),
            NodeKind::ArrayType => {
                let element_type = self.load_type(node.required("elementType")?)?;
                f.array(element_type, node.bool_field("isReadonly")?)
            }
            NodeKind::ObjectType => {
                let mixin_types = self.load_types(node.list_field("mixinTypes", false)?)?;
                let members = node
                    .list_field("members", true)?
                    .iter()
                    .map(|member| self.load_member(member))
                    .collect::<Result<Vec<_>>>()?;
                f.object(mixin_types, members)
            }
            NodeKind::DecoratedGenericType => {
                f.decorated_generic(self.load_type(node.required("elementType")?)?)
            }
            NodeKind::UnionType => f.union(self.load_types(node.list_field("elementTypes", true)?)?),
            NodeKind::TypeReference => {
                let name = self.load_entity_name(node.required("name")?)?;
                let type_arguments = self.load_types(node.list_field("typeArguments", false)?)?;
                f.type_reference(name, type_arguments)
            }
            NodeKind::ParenType => f.paren(self.load_type(node.required("elementType")?)?),
            _ => return Err(node.unrecognized()),
        })
    }

    pub fn load_member(&self, value: &Value) -> Result<ObjectMember<'a>> {
        let node = Node::read(value, NodeCategory::ObjectMember)?;
        let f = &self.factory;
        Ok(match node.kind {
            NodeKind::Prop => {
                let prop_type = self.load_type(node.required("propType")?)?;
                f.prop(
                    node.str_field("name")?,
                    node.bool_field("isOptional")?,
                    node.bool_field("isReadonly")?,
                    prop_type,
                )
            }
            NodeKind::Indexer => {
                let key_type = self.load_type(node.required("keyType")?)?;
                let value_type = self.load_type(node.required("valueType")?)?;
                f.indexer(node.str_field("keyName")?, key_type, value_type, node.bool_field("isReadonly")?)
            }
            _ => return Err(node.unrecognized()),
        })
    }

    /// A bare string, or `{ "parent": <EntityName>, "name": string }`.
    pub fn load_entity_name(&self, value: &Value) -> Result<EntityName<'a>> {
        match value {
            Value::String(name) => Ok(self.factory.identifier(name)),
            Value::Object(map) => {
                let parent = map
                    .get("parent")
                    .ok_or(LoadError::MissingField { kind: ENTITY_NAME, field: "parent" })?;
                let parent = self.load_entity_name(parent)?;
                let name = match map.get("name") {
                    Some(Value::String(name)) => name,
                    Some(_) => {
                        return Err(LoadError::InvalidField {
                            kind: ENTITY_NAME,
                            field: "name",
                            expected: "a string",
                        })
                    }
                    None => return Err(LoadError::MissingField { kind: ENTITY_NAME, field: "name" }),
                };
                Ok(self.factory.qualified_name(parent, name))
            }
            _ => Err(LoadError::InvalidField {
                kind: ENTITY_NAME,
                field: "name",
                expected: "a string or a qualified name object",
            }),
        }
    }

    fn load_types(&self, values: &[Value]) -> Result<Vec<TypeNode<'a>>> {
        values.iter().map(|v| self.load_type(v)).collect()
    }
}

/// A JSON object whose `kind` has been checked against one category.
struct Node<'v> {
    kind: NodeKind,
    map: &'v Map<String, Value>,
}

impl<'v> Node<'v> {
    fn read(value: &'v Value, category: NodeCategory) -> Result<Self> {
        let map = value.as_object().ok_or(LoadError::NotANode { category })?;
        let tag = match map.get("kind") {
            Some(Value::String(tag)) => tag.as_str(),
            Some(other) => {
                return Err(LoadError::UnrecognizedNodeKind {
                    category,
                    tag: other.to_string(),
                })
            }
            None => return Err(LoadError::NotANode { category }),
        };
        let kind = NodeKind::from_tag(category, tag).ok_or_else(|| LoadError::UnrecognizedNodeKind {
            category,
            tag: tag.to_string(),
        })?;
        tracing::trace!(%kind, "loading node");
        Ok(Self { kind, map })
    }

    fn unrecognized(&self) -> LoadError {
        LoadError::UnrecognizedNodeKind {
            category: self.kind.category(),
            tag: self.kind.as_str().to_string(),
        }
    }

    fn required(&self, field: &'static str) -> Result<&'v Value> {
        self.map.get(field).ok_or(LoadError::MissingField {
            kind: self.kind.as_str(),
            field,
        })
    }

    fn str_field(&self, field: &'static str) -> Result<&'v str> {
        self.required(field)?.as_str().ok_or(LoadError::InvalidField {
            kind: self.kind.as_str(),
            field,
            expected: "a string",
        })
    }

    fn bool_field(&self, field: &'static str) -> Result<bool> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(LoadError::InvalidField {
                kind: self.kind.as_str(),
                field,
                expected: "a boolean",
            }),
        }
    }

    fn list_field(&self, field: &'static str, required: bool) -> Result<&'v [Value]> {
        match self.map.get(field) {
            Some(Value::Array(items)) => Ok(items.as_slice()),
            None if !required => Ok(&[]),
            None => Err(LoadError::MissingField {
                kind: self.kind.as_str(),
                field,
            }),
            Some(_) => Err(LoadError::InvalidField {
                kind: self.kind.as_str(),
                field,
                expected: "an array",
            }),
        }
    }
}
