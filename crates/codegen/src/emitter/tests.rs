//! Unit tests for the Go struct emitter

use crate::emitter::{emit_named_type, emit_struct};
use crate::error::{GenerateError, NamingError, SchemaError};
use crate::schema::{lower_root, SchemaNode};
use serde_json::json;

#[test]
fn test_emit_required_and_optional_scalars() {
    let schema = SchemaNode::object([
        ("name", SchemaNode::string().required()),
        ("age", SchemaNode::number()),
        ("admin", SchemaNode::boolean().required()),
        ("extra", SchemaNode::any()),
    ]);

    let out = emit_struct(&schema, "user", false).unwrap();
    assert_eq!(
        out,
        "type User struct {\n\
         \tName string `json:\"name,omitempty\"`\n\
         \tAge *float64 `json:\"age,omitempty\"`\n\
         \tAdmin bool `json:\"admin,omitempty\"`\n\
         \tExtra *interface{} `json:\"extra,omitempty\"`\n\
         }\n"
    );
}

#[test]
fn test_emit_arrays_have_no_tag() {
    let schema = SchemaNode::object([
        ("ids", SchemaNode::array(SchemaNode::string()).required()),
        ("scores", SchemaNode::array(SchemaNode::number())),
    ]);

    let out = emit_struct(&schema, "Batch", false).unwrap();
    assert!(out.contains("\tIds []string\n"));
    assert!(out.contains("\tScores []*float64\n"));
    assert!(!out.contains("json:\"ids"));
    assert!(!out.contains("json:\"scores"));
}

#[test]
fn test_emit_nested_object_inline() {
    let schema = SchemaNode::object([(
        "address",
        SchemaNode::object([
            ("city", SchemaNode::string().required()),
            ("zip", SchemaNode::string()),
        ])
        .required(),
    )]);

    let out = emit_struct(&schema, "Customer", false).unwrap();
    assert_eq!(
        out,
        "type Customer struct {\n\
         \tAddress struct {\n\
         \t\tCity string `json:\"city,omitempty\"`\n\
         \t\tZip *string `json:\"zip,omitempty\"`\n\
         \t} `json:\"address,omitempty\"`\n\
         }\n"
    );
}

#[test]
fn test_emit_array_of_objects() {
    let schema = SchemaNode::object([(
        "lines",
        SchemaNode::array(SchemaNode::object([("sku", SchemaNode::string().required())])),
    )]);

    let out = emit_struct(&schema, "Order", false).unwrap();
    assert!(out.contains("\tLines []*struct {\n"));
    assert!(out.contains("\t\tSku string `json:\"sku,omitempty\"`\n"));
    assert!(out.contains("\t}\n}\n"));
}

#[test]
fn test_emit_custom_type_reference() {
    let schema = SchemaNode::object([
        ("owner", SchemaNode::reference("user").required()),
        ("parent", SchemaNode::reference("Node")),
        ("children", SchemaNode::array(SchemaNode::reference("Node"))),
    ]);

    let out = emit_struct(&schema, "Node", false).unwrap();
    assert!(out.contains("\tOwner User `json:\"owner,omitempty\"`\n"));
    assert!(out.contains("\tParent *Node `json:\"parent,omitempty\"`\n"));
    assert!(out.contains("\tChildren []*Node\n"));
}

#[test]
fn test_emit_response_appends_errors() {
    let schema = SchemaNode::object([("name", SchemaNode::string().required())]);
    let out = emit_struct(&schema, "GetUserResponse", true).unwrap();
    assert!(out.ends_with("\tErrors []GraphQLError `json:\"errors\"`\n}\n"));
}

#[test]
fn test_emit_response_rejects_user_errors_field() {
    let schema = SchemaNode::object([("errors", SchemaNode::any())]);
    let err = emit_struct(&schema, "BrokenResponse", true).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Naming(NamingError::FieldCollision { .. })
    ));
}

#[test]
fn test_emit_enum_comment() {
    let schema = SchemaNode::object([(
        "status",
        SchemaNode::string_enum(["ACTIVE", "BANNED"]).required(),
    )]);
    let out = emit_struct(&schema, "Account", false).unwrap();
    assert!(out.contains("\tStatus string `json:\"status,omitempty\"` // one of: ACTIVE, BANNED\n"));
}

#[test]
fn test_emit_field_order_matches_schema() {
    let schema = lower_root(&json!({
        "type": "object",
        "properties": {
            "zulu": { "type": "string" },
            "alpha": { "type": "string" },
            "mike": { "type": "string" }
        }
    }))
    .unwrap();

    let out = emit_struct(&schema, "Ordered", false).unwrap();
    let zulu = out.find("Zulu").unwrap();
    let alpha = out.find("Alpha").unwrap();
    let mike = out.find("Mike").unwrap();
    assert!(zulu < alpha && alpha < mike);
}

#[test]
fn test_emit_is_deterministic() {
    let schema = SchemaNode::object([
        ("b", SchemaNode::object([("c", SchemaNode::number())])),
        ("a", SchemaNode::array(SchemaNode::boolean())),
    ]);
    let first = emit_struct(&schema, "Stable", false).unwrap();
    let second = emit_struct(&schema, "Stable", false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_emit_field_collision_is_fatal() {
    let schema = SchemaNode::object([
        ("userId", SchemaNode::string()),
        ("UserId", SchemaNode::string()),
    ]);
    let err = emit_struct(&schema, "Dup", false).unwrap_err();
    match err {
        GenerateError::Naming(NamingError::FieldCollision {
            type_name,
            identifier,
            first,
            second,
        }) => {
            assert_eq!(type_name, "Dup");
            assert_eq!(identifier, "UserId");
            assert_eq!(first, "userId");
            assert_eq!(second, "UserId");
        }
        other => panic!("Expected FieldCollision, got {other:?}"),
    }
}

#[test]
fn test_emit_same_name_in_different_scopes_is_fine() {
    let schema = SchemaNode::object([
        ("id", SchemaNode::string()),
        ("child", SchemaNode::object([("id", SchemaNode::string())])),
    ]);
    assert!(emit_struct(&schema, "Tree", false).is_ok());
}

#[test]
fn test_emit_non_object_root_is_shape_error() {
    let err = emit_struct(&SchemaNode::number(), "Nope", false).unwrap_err();
    assert!(matches!(err, GenerateError::Schema(SchemaError::Shape { .. })));
}

#[test]
fn test_emit_named_type_aliases() {
    assert_eq!(
        emit_named_type(&SchemaNode::string(), "userId").unwrap(),
        "type UserId string\n"
    );
    assert_eq!(
        emit_named_type(&SchemaNode::array(SchemaNode::reference("user")), "Users").unwrap(),
        "type Users []User\n"
    );

    let items = SchemaNode::array(SchemaNode::object([("x", SchemaNode::number())]));
    let out = emit_named_type(&items, "Points").unwrap();
    assert!(out.starts_with("type Points []struct {\n"));
}

#[test]
fn test_emit_named_type_object_is_struct() {
    let schema = SchemaNode::object([("name", SchemaNode::string().required())]);
    assert_eq!(
        emit_named_type(&schema, "Pet").unwrap(),
        emit_struct(&schema, "Pet", false).unwrap()
    );
}
