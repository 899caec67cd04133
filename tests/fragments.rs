//! End-to-end tests over the public API: extended-schema documents in,
//! serialized OpenAPI fragments out.

use indexmap::IndexMap;
use oas_bridge::{
    build_request_body, build_responses, AppError, ExtendedSchema, ModelReference,
    RecordingSink, ResponseDescriptor, SchemaTranslator, StackContext,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn translate_value(source: Value) -> (Result<Value, AppError>, RecordingSink) {
    let node: ExtendedSchema = serde_json::from_value(source).unwrap();
    let sink = RecordingSink::new();
    let result = SchemaTranslator::new(&sink)
        .translate(&node)
        .map(|fragment| serde_json::to_value(fragment).unwrap());
    (result, sink)
}

fn pet_context() -> StackContext {
    StackContext::new("PetApi")
        .register_model("tok-pet", "PetModel")
        .register_model("tok-error", "ErrorModel")
}

#[test]
fn ref_node_translates_to_bare_reference() {
    let (result, sink) = translate_value(json!({
        "ref": "#/components/schemas/Pet",
        "type": "object",
        "title": "ignored",
        "properties": {"name": {"type": "string"}}
    }));

    assert_eq!(
        result.unwrap(),
        json!({"$ref": "#/components/schemas/Pet"})
    );

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].context["ignoredFields"],
        json!(["type", "properties", "title"])
    );
}

#[test]
fn non_ref_node_never_emits_a_ref_key() {
    let (result, _) = translate_value(json!({
        "type": "object",
        "properties": {
            "tags": {"type": "array", "items": {"type": "string"}},
            "parent": {"ref": "#/components/schemas/Pet"}
        }
    }));

    let fragment = result.unwrap();
    assert!(fragment.get("$ref").is_none());
    // Child reference nodes still appear where the input put them.
    assert_eq!(
        fragment["properties"]["parent"],
        json!({"$ref": "#/components/schemas/Pet"})
    );
}

#[test]
fn supported_fields_round_trip_without_loss() {
    let source = json!({
        "type": "object",
        "title": "Pet",
        "description": "A pet record",
        "properties": {
            "name": {"type": "string", "minLength": 1, "maxLength": 64},
            "age": {
                "type": ["integer", "null"],
                "minimum": 0.0,
                "exclusiveMinimum": false
            },
            "kind": {"type": "string", "enum": ["cat", "dog"]}
        },
        "required": ["name"],
        "additionalProperties": false,
        "minProperties": 1,
        "maxProperties": 10,
        "default": {"name": "Rex"},
        "example": {"name": "Rex", "kind": "dog"}
    });

    let (result, sink) = translate_value(source.clone());
    assert_eq!(result.unwrap(), source);
    assert!(sink.is_empty());
}

#[test]
fn invalid_type_fails_without_partial_output() {
    let (result, _) = translate_value(json!({
        "type": "object",
        "properties": {"amount": {"type": "decimal"}}
    }));
    assert!(matches!(result, Err(AppError::InvalidSchemaType(tag)) if tag == "decimal"));
}

#[test]
fn tuple_items_are_dropped_with_diagnostic() {
    let (result, sink) = translate_value(json!({
        "type": "array",
        "items": [{"type": "string"}, {"type": "number"}]
    }));

    assert_eq!(result.unwrap(), json!({"type": "array"}));
    assert_eq!(sink.events().len(), 1);
    assert_eq!(sink.events()[0].component, "SchemaTranslator");
}

#[test]
fn request_body_references_resolved_models() {
    let sink = RecordingSink::new();
    let models = IndexMap::from([
        (
            "application/json".to_string(),
            ModelReference::by_token("tok-pet"),
        ),
        (
            "application/xml".to_string(),
            ModelReference::by_token("tok-error"),
        ),
    ]);

    let body = build_request_body(&pet_context(), &models, false, &sink);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"content": {
            "application/json": {
                "schema": {"$ref": "#/components/schemas/PetModel"}
            },
            "application/xml": {
                "schema": {"$ref": "#/components/schemas/ErrorModel"}
            }
        }})
    );
    assert!(sink.is_empty());
}

#[test]
fn unresolvable_model_degrades_only_its_own_entry() {
    let sink = RecordingSink::new();
    let models = IndexMap::from([
        (
            "application/json".to_string(),
            ModelReference::by_token("tok-pet"),
        ),
        (
            "text/plain".to_string(),
            ModelReference::by_token("tok-from-other-stack"),
        ),
    ]);

    let body = build_request_body(&pet_context(), &models, false, &sink);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"content": {
            "application/json": {
                "schema": {"$ref": "#/components/schemas/PetModel"}
            },
            "text/plain": {"schema": {}}
        }})
    );
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn responses_cover_defaults_content_and_duplicates() {
    let sink = RecordingSink::new();
    let descriptors = vec![
        ResponseDescriptor {
            status_code: "200".into(),
            description: Some("overwritten".into()),
            response_models: None,
        },
        ResponseDescriptor {
            status_code: "200".into(),
            description: None,
            response_models: Some(IndexMap::from([(
                "application/json".to_string(),
                ModelReference::by_token("tok-pet"),
            )])),
        },
        ResponseDescriptor {
            status_code: "404".into(),
            description: None,
            response_models: None,
        },
    ];

    let responses = build_responses(&pet_context(), &descriptors, false, &sink);

    // Last "200" descriptor wins; "404" gets the default description and,
    // lacking models, no content key at all.
    assert_eq!(
        serde_json::to_value(&responses).unwrap(),
        json!({
            "200": {
                "description": "200 response",
                "content": {"application/json": {
                    "schema": {"$ref": "#/components/schemas/PetModel"}
                }}
            },
            "404": {"description": "404 response"}
        })
    );
}

#[test]
fn physical_names_take_precedence_when_requested() {
    let sink = RecordingSink::new();
    let models = IndexMap::from([(
        "application/json".to_string(),
        ModelReference::with_physical_name("tok-pet", "pet-payload"),
    )]);

    let body = build_request_body(&pet_context(), &models, true, &sink);
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"content": {"application/json": {
            "schema": {"$ref": "#/components/schemas/pet-payload"}
        }}})
    );
}
