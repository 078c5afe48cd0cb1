//! Loader integration tests.
//!
//! Decodes interchange documents and checks both the resulting tree (through
//! the printer) and the errors raised for malformed input.

use flowts_ast::{NodeCategory, NodeKind, Statement, TypeNode};
use flowts_core::{AstArena, StringInterner};
use flowts_loader::{LoadError, Loader};
use flowts_printer::{print_program, PrintConfig};
use serde_json::json;

/// Helper: load a document and print it.
fn print_json(text: &str, config: PrintConfig) -> Result<String, LoadError> {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let loader = Loader::new(&arena, &interner);
    let program = loader.load_program_str(text)?;
    Ok(print_program(&program, false, config, &interner))
}

/// Helper: load a document that is expected to fail.
fn load_err(value: serde_json::Value) -> LoadError {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let loader = Loader::new(&arena, &interner);
    match loader.load_program_value(&value) {
        Ok(_) => panic!("expected load to fail for {}", value),
        Err(e) => e,
    }
}

fn alias(aliased_type: serde_json::Value) -> serde_json::Value {
    json!({ "statements": [{ "kind": "TypeAliasDecl", "name": "T", "hasExport": false, "aliasedType": aliased_type }] })
}

// ============================================================================
// Programs
// ============================================================================

#[test]
fn test_load_empty_program() {
    assert_eq!(print_json(r#"{ "statements": [] }"#, PrintConfig::default()).unwrap(), "");
}

#[test]
fn test_load_bare_statement_array() {
    let text = r#"[{ "kind": "UseStrictStat" }]"#;
    assert_eq!(print_json(text, PrintConfig::default()).unwrap(), "'use strict';\r\n\r\n");
}

#[test]
fn test_load_statement_kinds() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let loader = Loader::new(&arena, &interner);
    let doc = json!([
        { "kind": "UseStrictStat" },
        { "kind": "TypeAliasDecl", "name": "A", "hasExport": true,
          "aliasedType": { "kind": "PrimitiveType", "name": "string" } }
    ]);
    let program = loader.load_program_value(&doc).unwrap();
    let kinds: Vec<NodeKind> = program.statements.iter().map(Statement::kind).collect();
    assert_eq!(kinds, vec![NodeKind::UseStrictStat, NodeKind::TypeAliasDecl]);
    match &program.statements[1] {
        Statement::TypeAliasDeclaration(decl) => {
            assert!(decl.has_export);
            assert_eq!(interner.resolve(decl.name), "A");
            assert_eq!(decl.aliased_type.kind(), NodeKind::PrimitiveType);
        }
        other => panic!("unexpected statement {:?}", other),
    }
}

#[test]
fn test_native_module_document() {
    let text = r#"{
      "statements": [
        { "kind": "UseStrictStat" },
        { "kind": "TypeAliasDecl", "name": "Constants", "hasExport": true,
          "aliasedType": { "kind": "ObjectType", "mixinTypes": [], "members": [
            { "kind": "Prop", "name": "isTesting", "isOptional": false, "isReadonly": false,
              "propType": { "kind": "PrimitiveType", "name": "boolean" } },
            { "kind": "Prop", "name": "reactNativeVersion", "isOptional": false, "isReadonly": false,
              "propType": { "kind": "ObjectType", "mixinTypes": [], "members": [
                { "kind": "Prop", "name": "patch", "isOptional": true, "isReadonly": false,
                  "propType": { "kind": "PrimitiveType", "name": "number" } },
                { "kind": "Prop", "name": "prerelease", "isOptional": false, "isReadonly": false,
                  "propType": { "kind": "OptionalType", "elementType": { "kind": "PrimitiveType", "name": "number" } } }
              ] } }
          ] } }
      ]
    }"#;
    let expected = concat!(
        "'use strict';\r\n",
        "\r\n",
        "export type Constants = {\r\n",
        "  isTesting: boolean;\r\n",
        "  reactNativeVersion: {\r\n",
        "    patch?: number;\r\n",
        "    prerelease: (undefined | number);\r\n",
        "  };\r\n",
        "};\r\n",
        "\r\n",
    );
    assert_eq!(print_json(text, PrintConfig::default()).unwrap(), expected);
}

#[test]
fn test_loading_twice_prints_identically() {
    let text = r#"[{ "kind": "TypeAliasDecl", "name": "Mode", "hasExport": false,
        "aliasedType": { "kind": "UnionType", "elementTypes": [
          { "kind": "LiteralType", "text": "'light'" },
          { "kind": "LiteralType", "text": "'dark'" }
        ] } }]"#;
    let config = PrintConfig { use_react_null: true };
    let first = print_json(text, config).unwrap();
    let second = print_json(text, config).unwrap();
    assert_eq!(first, "type Mode =\r\n  | 'light'\r\n  | 'dark';\r\n\r\n");
    assert_eq!(first, second);
}

// ============================================================================
// Types
// ============================================================================

#[test]
fn test_optional_fields_default() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let loader = Loader::new(&arena, &interner);
    let ty = loader
        .load_type(&json!({ "kind": "ArrayType", "elementType": { "kind": "PrimitiveType", "name": "string" } }))
        .unwrap();
    match ty {
        TypeNode::ArrayType(array) => assert!(!array.is_readonly),
        other => panic!("unexpected type {:?}", other),
    }

    let ty = loader
        .load_type(&json!({ "kind": "TypeReference", "name": "Spec" }))
        .unwrap();
    match ty {
        TypeNode::TypeReference(reference) => assert!(reference.type_arguments.is_empty()),
        other => panic!("unexpected type {:?}", other),
    }
}

#[test]
fn test_qualified_entity_name() {
    let doc = alias(json!({
        "kind": "TypeReference",
        "name": { "parent": { "parent": "React.", "name": "Element." }, "name": "Config" },
        "typeArguments": [{ "kind": "DecoratedGenericType", "elementType": { "kind": "TypeReference", "name": "Props" } }]
    }));
    assert_eq!(
        print_json(&doc.to_string(), PrintConfig::default()).unwrap(),
        "type T = React.Element.Config<Readonly<Props>>;\r\n\r\n"
    );
}

#[test]
fn test_indexer_and_paren() {
    let doc = alias(json!({
        "kind": "ObjectType",
        "members": [{
            "kind": "Indexer", "keyName": "key", "isReadonly": true,
            "keyType": { "kind": "PrimitiveType", "name": "string" },
            "valueType": { "kind": "ArrayType", "isReadonly": false, "elementType": {
                "kind": "ParenType", "elementType": { "kind": "UnionType", "elementTypes": [
                    { "kind": "PrimitiveType", "name": "number" },
                    { "kind": "PrimitiveType", "name": "string" }
                ] } } }
        }]
    }));
    assert_eq!(
        print_json(&doc.to_string(), PrintConfig::default()).unwrap(),
        "type T = {\r\n  readonly [key: string]: (number | string)[];\r\n};\r\n\r\n"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unrecognized_type_kind() {
    let err = load_err(alias(json!({ "kind": "FunctionType" })));
    match &err {
        LoadError::UnrecognizedNodeKind { category, tag } => {
            assert_eq!(*category, NodeCategory::Type);
            assert_eq!(tag, "FunctionType");
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.to_string(), "Unrecognized Flow type: FunctionType");
}

#[test]
fn test_unrecognized_nested_type_kind() {
    let err = load_err(alias(json!({
        "kind": "ArrayType",
        "elementType": { "kind": "OptionalType", "elementType": { "kind": "TupleType" } }
    })));
    assert_eq!(err.unrecognized_tag(), Some("TupleType"));
}

#[test]
fn test_unrecognized_member_kind() {
    let err = load_err(alias(json!({
        "kind": "ObjectType",
        "members": [{ "kind": "CallProperty" }]
    })));
    match err {
        LoadError::UnrecognizedNodeKind { category, tag } => {
            assert_eq!(category, NodeCategory::ObjectMember);
            assert_eq!(tag, "CallProperty");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unrecognized_statement_kind() {
    let err = load_err(json!([{ "kind": "InterfaceDecl", "name": "Spec" }]));
    assert_eq!(err.to_string(), "Unrecognized Flow statement: InterfaceDecl");
}

#[test]
fn test_type_kind_in_statement_position() {
    let err = load_err(json!([{ "kind": "PrimitiveType", "name": "number" }]));
    assert_eq!(err.unrecognized_tag(), Some("PrimitiveType"));
}

#[test]
fn test_missing_required_field() {
    let err = load_err(alias(json!({ "kind": "OptionalType" })));
    match err {
        LoadError::MissingField { kind, field } => {
            assert_eq!(kind, "OptionalType");
            assert_eq!(field, "elementType");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_members_are_required() {
    let err = load_err(alias(json!({ "kind": "ObjectType" })));
    assert!(matches!(err, LoadError::MissingField { kind: "ObjectType", field: "members" }));
}

#[test]
fn test_invalid_field_type() {
    let err = load_err(alias(json!({
        "kind": "ArrayType", "isReadonly": "yes",
        "elementType": { "kind": "PrimitiveType", "name": "string" }
    })));
    assert!(matches!(err, LoadError::InvalidField { kind: "ArrayType", field: "isReadonly", .. }));
}

#[test]
fn test_invalid_entity_name() {
    let err = load_err(alias(json!({ "kind": "TypeReference", "name": 3 })));
    assert!(matches!(err, LoadError::InvalidField { kind: "EntityName", .. }));
}

#[test]
fn test_program_without_statements() {
    let err = load_err(json!({ "body": [] }));
    assert!(matches!(err, LoadError::MissingField { kind: "Program", field: "statements" }));
}

#[test]
fn test_malformed_json() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let loader = Loader::new(&arena, &interner);
    let err = loader.load_program_str("{ \"statements\": [").err().unwrap();
    assert!(matches!(err, LoadError::Json(_)));
}
