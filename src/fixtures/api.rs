use serde_json::{json, Value};

/// Greeting document served on the root route.
pub fn hello() -> Value {
    json!({"Hello": "redfish world."})
}

/// Sample HAL-style person document with a `_links.self` pointer.
pub fn person() -> Value {
    json!({
        "firstName": "Frodo",
        "lastName": "Baggins",
        "address": {
            "street": "Bag End",
            "state": "The Shire",
            "country": "Middle Earth"
        },
        "_links": {
            "self": {"href": "/api/myresource"}
        }
    })
}

pub fn fruits() -> Value {
    json!({"fruits": ["Apple", "Orange", "Banana", "Melon"]})
}
