use axum::Json;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use crate::domain::{DEFAULT_COLLECTION, DEFAULT_PERSIST_PATH, TopK};

pub const API_TITLE: &str = "DocRAG LLM API";
pub const API_VERSION: &str = "0.1";

pub async fn openapi_handler() -> impl IntoResponse {
    Json(openapi_document())
}

/// OpenAPI description of the public endpoints.
pub fn openapi_document() -> Value {
    let json_body = |schema: Value| json!({ "content": { "application/json": { "schema": schema } } });

    json!({
        "openapi": "3.1.0",
        "info": { "title": API_TITLE, "version": API_VERSION },
        "paths": {
            "/api/health": {
                "get": {
                    "summary": "Health",
                    "responses": { "200": json_body(json!({ "$ref": "#/components/schemas/Health" })) }
                }
            },
            "/api/models": {
                "get": {
                    "summary": "List Models",
                    "responses": { "200": json_body(json!({ "$ref": "#/components/schemas/Models" })) }
                }
            },
            "/api/ingest": {
                "post": {
                    "summary": "Ingest",
                    "requestBody": json_body(json!({ "$ref": "#/components/schemas/IngestBody" })),
                    "responses": {
                        "200": json_body(json!({ "$ref": "#/components/schemas/IngestResult" })),
                        "422": json_body(json!({ "$ref": "#/components/schemas/Error" })),
                        "500": json_body(json!({ "$ref": "#/components/schemas/Error" }))
                    }
                }
            },
            "/api/ask": {
                "post": {
                    "summary": "Ask",
                    "requestBody": json_body(json!({ "$ref": "#/components/schemas/AskBody" })),
                    "responses": {
                        "200": json_body(json!({ "$ref": "#/components/schemas/AskResult" })),
                        "422": json_body(json!({ "$ref": "#/components/schemas/Error" })),
                        "500": json_body(json!({ "$ref": "#/components/schemas/Error" }))
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Health": {
                    "type": "object",
                    "properties": {
                        "ok": { "type": "boolean" },
                        "service": { "type": "string" }
                    }
                },
                "Models": {
                    "type": "object",
                    "properties": {
                        "ok": { "type": "boolean" },
                        "error": { "type": "string" },
                        "models": { "type": "array", "items": { "type": "string" } }
                    }
                },
                "IngestBody": {
                    "type": "object",
                    "required": ["uri_or_path"],
                    "properties": {
                        "uri_or_path": { "type": "string" },
                        "collection": { "type": "string", "default": DEFAULT_COLLECTION },
                        "persist": { "type": "string", "default": DEFAULT_PERSIST_PATH }
                    }
                },
                "IngestResult": {
                    "type": "object",
                    "properties": {
                        "ok": { "type": "boolean" },
                        "chunks": { "type": "integer" },
                        "collection": { "type": "string" },
                        "persist": { "type": "string" }
                    }
                },
                "AskBody": {
                    "type": "object",
                    "required": ["question"],
                    "properties": {
                        "question": { "type": "string" },
                        "collection": { "type": "string", "default": DEFAULT_COLLECTION },
                        "persist": { "type": "string", "default": DEFAULT_PERSIST_PATH },
                        "top_k": {
                            "type": "integer",
                            "minimum": TopK::MIN,
                            "maximum": TopK::MAX,
                            "default": TopK::DEFAULT
                        },
                        "require_citations": { "type": "boolean", "default": false }
                    }
                },
                "AskResult": {
                    "type": "object",
                    "properties": {
                        "ok": { "type": "boolean" },
                        "answer": {}
                    }
                },
                "Error": {
                    "type": "object",
                    "properties": { "error": { "type": "string" } }
                }
            }
        }
    })
}
