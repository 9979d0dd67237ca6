use serde_json::json;

/// Returns the JSON schema for recipe LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "productName": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "amount": { "type": "string" },
                        "benefit": { "type": "string" }
                    },
                    "required": ["name", "amount", "benefit"]
                }
            },
            "preparation": {
                "type": "array",
                "items": { "type": "string" }
            },
            "application": { "type": "string" },
            "frequency": { "type": "string" },
            "warnings": { "type": "string" }
        },
        "required": [
            "productName", "ingredients", "preparation",
            "application", "frequency", "warnings"
        ]
    })
}
