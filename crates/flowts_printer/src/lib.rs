//! flowts_printer: Flow type AST to TypeScript text.
//!
//! Walks a `Program` and renders each type alias as a TypeScript type
//! declaration. Output uses CRLF line endings and two spaces per indent
//! level, and every statement is followed by one blank line.
//!
//! Unions render two ways depending on where they appear. The body of an
//! alias and the type of an object property stack their members vertically
//! with a leading `|`; everywhere else a union is written inline as `A | B`.

pub mod writer;

use flowts_ast::node::*;
use flowts_core::intern::StringInterner;
pub use flowts_options::PrintConfig;
use writer::TextWriter;

/// Print `program` with a fresh printer.
pub fn print_program(
    program: &Program<'_>,
    force_export: bool,
    config: PrintConfig,
    interner: &StringInterner,
) -> String {
    Printer::new(interner, config).print_program(program, force_export)
}

/// The printer converts AST nodes to text.
pub struct Printer<'i> {
    writer: TextWriter,
    config: PrintConfig,
    interner: &'i StringInterner,
}

impl<'i> Printer<'i> {
    pub fn new(interner: &'i StringInterner, config: PrintConfig) -> Self {
        Self {
            writer: TextWriter::new(),
            config,
            interner,
        }
    }

    pub fn writer(&self) -> &TextWriter {
        &self.writer
    }

    /// Take the text printed so far, leaving the printer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.writer).into_string()
    }

    /// Print every statement followed by a blank line and return the text.
    pub fn print_program(&mut self, program: &Program<'_>, force_export: bool) -> String {
        tracing::debug!(
            statements = program.statements.len(),
            force_export,
            use_react_null = self.config.use_react_null,
            "printing program"
        );
        self.writer = TextWriter::new();
        for stmt in program.statements.iter() {
            self.print_statement(stmt, force_export);
            self.writer.write_line();
            self.writer.write_line();
        }
        debug_assert_eq!(self.writer.indent_level(), 0);
        self.take_output()
    }

    // ========================================================================
    // Statement printing
    // ========================================================================

    pub fn print_statement(&mut self, stmt: &Statement<'_>, force_export: bool) {
        tracing::trace!(kind = %stmt.kind(), "printing statement");
        match stmt {
            Statement::UseStrictStatement => self.writer.write("'use strict';"),
            Statement::TypeAliasDeclaration(n) => self.print_type_alias(n, force_export),
        }
    }

    fn print_type_alias(&mut self, node: &TypeAliasDeclaration<'_>, force_export: bool) {
        if force_export || node.has_export {
            self.writer.write("export ");
        }
        self.writer.write("type ");
        self.writer.write(self.interner.resolve(node.name));
        self.writer.write(" =");
        match node.aliased_type {
            TypeNode::UnionType(union) => self.print_union_type_with_header(union),
            ty => {
                self.writer.write(" ");
                self.print_type(ty);
            }
        }
        self.writer.write(";");
    }

    // ========================================================================
    // Type node printing
    // ========================================================================

    pub fn print_type(&mut self, ty: &TypeNode<'_>) {
        match ty {
            TypeNode::PrimitiveType(n) => self.writer.write(self.interner.resolve(n.name)),
            TypeNode::LiteralType(n) => self.writer.write(n.text),
            TypeNode::OptionalType(n) => {
                if self.config.use_react_null {
                    self.writer.write("(ReactNull | ");
                } else {
                    self.writer.write("(undefined | ");
                }
                self.print_type(n.element_type);
                self.writer.write(")");
            }
            TypeNode::ArrayType(n) => {
                if n.is_readonly {
                    self.writer.write("ReadonlyArray<");
                    self.print_type(n.element_type);
                    self.writer.write(">");
                } else {
                    self.print_type(n.element_type);
                    self.writer.write("[]");
                }
            }
            TypeNode::ObjectType(n) => self.print_object_type(n),
            TypeNode::DecoratedGenericType(n) => {
                self.writer.write("Readonly<");
                self.print_type(n.element_type);
                self.writer.write(">");
            }
            TypeNode::UnionType(n) => self.print_union_type_inline(n),
            TypeNode::TypeReference(n) => {
                self.print_entity_name(&n.name);
                if !n.type_arguments.is_empty() {
                    self.writer.write("<");
                    for (i, arg) in n.type_arguments.iter().enumerate() {
                        if i > 0 { self.writer.write(", "); }
                        self.print_type(arg);
                    }
                    self.writer.write(">");
                }
            }
            TypeNode::ParenType(n) => {
                self.writer.write("(");
                self.print_type(n.element_type);
                self.writer.write(")");
            }
        }
    }

    fn print_object_type(&mut self, node: &ObjectTypeNode<'_>) {
        for mixin in node.mixin_types.iter() {
            self.print_type(mixin);
            self.writer.write(" & ");
        }
        self.writer.write("{");
        self.writer.write_line();
        self.writer.push_indent();
        for member in node.members.iter() {
            self.writer.write_indent();
            self.print_object_member(member);
            self.writer.write(";");
            self.writer.write_line();
        }
        self.writer.pop_indent();
        self.writer.write_indent();
        self.writer.write("}");
    }

    fn print_object_member(&mut self, member: &ObjectMember<'_>) {
        match member {
            ObjectMember::Prop(p) => {
                if p.is_readonly { self.writer.write("readonly "); }
                self.writer.write(self.interner.resolve(p.name));
                if p.is_optional { self.writer.write("?"); }
                match p.prop_type {
                    TypeNode::UnionType(union) => {
                        self.writer.write(":");
                        self.print_union_type_with_header(union);
                    }
                    ty => {
                        self.writer.write(": ");
                        self.print_type(ty);
                    }
                }
            }
            ObjectMember::Indexer(idx) => {
                if idx.is_readonly { self.writer.write("readonly "); }
                self.writer.write("[");
                self.writer.write(self.interner.resolve(idx.key_name));
                self.writer.write(": ");
                self.print_type(idx.key_type);
                self.writer.write("]: ");
                self.print_type(idx.value_type);
            }
        }
    }

    /// `A | B | C` on one line. Grouping parentheses come only from
    /// `ParenType` nodes in the tree.
    pub fn print_union_type_inline(&mut self, node: &UnionTypeNode<'_>) {
        for (i, ty) in node.element_types.iter().enumerate() {
            if i > 0 { self.writer.write(" | "); }
            self.print_type(ty);
        }
    }

    /// One member per line, each introduced by `| ` one level deeper than the
    /// current line. Members that span several lines (object types) are
    /// indented a further level.
    pub fn print_union_type_with_header(&mut self, node: &UnionTypeNode<'_>) {
        self.writer.push_indent();
        for ty in node.element_types.iter() {
            self.writer.write_line();
            self.writer.write_indent();
            self.writer.write("| ");
            self.writer.push_indent();
            self.print_type(ty);
            self.writer.pop_indent();
        }
        self.writer.pop_indent();
    }

    // ========================================================================
    // Helper printing functions
    // ========================================================================

    pub fn print_entity_name(&mut self, name: &EntityName<'_>) {
        match name {
            EntityName::Identifier(id) => self.writer.write(self.interner.resolve(*id)),
            EntityName::QualifiedName(q) => {
                self.print_entity_name(&q.parent);
                self.writer.write(self.interner.resolve(q.name));
            }
        }
    }
}
