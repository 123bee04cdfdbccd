//! Link settings document and its default-backfill rules.

use serde_json::{Map, Value, json};

/// Key under which the link settings document is stored.
pub const LINKS_KEY: &str = "links";

/// Button names every links document is guaranteed to contain.
pub const BUTTON_KEYS: [&str; 8] = [
    "operator",
    "chats",
    "reviews",
    "bot",
    "channel",
    "exchanger",
    "jobs",
    "support",
];

const DEFAULT_BUTTON_URL: &str = "https://t.me/";

/// A settings document as persisted, with the time of its last write.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSettings {
    pub value: Value,
    /// Milliseconds since the Unix epoch.
    pub updated_at: i64,
}

/// Builds the default links document.
pub fn default_links() -> Value {
    let buttons: Map<String, Value> = BUTTON_KEYS
        .iter()
        .map(|key| (key.to_string(), Value::from(DEFAULT_BUTTON_URL)))
        .collect();

    json!({
        "fortune": "fortune.html",
        "job": "#",
        "buttons": buttons,
    })
}

/// Merges a client payload onto `defaults`, producing the document to store.
///
/// The payload is laid over the defaults at the top level, so keys the defaults do not
/// know about are kept. Then every default field is enforced:
///
/// - a string default (`fortune`, `job`) replaces any non-string value;
/// - an object default (`buttons`) replaces a non-object value outright, otherwise each
///   of its keys is backfilled whenever the payload's value is missing or not a string.
///
/// A non-object payload contributes nothing and the result equals `defaults`.
pub fn merge_links(payload: Value, defaults: &Value) -> Value {
    let Some(default_fields) = defaults.as_object() else {
        return payload;
    };

    let mut merged = default_fields.clone();
    if let Value::Object(fields) = payload {
        merged.extend(fields);
    }

    for (key, default) in default_fields {
        match default {
            Value::Object(default_entries) => match merged.get_mut(key) {
                Some(Value::Object(entries)) => {
                    for (entry_key, entry_default) in default_entries {
                        if !entries.get(entry_key).is_some_and(Value::is_string) {
                            entries.insert(entry_key.clone(), entry_default.clone());
                        }
                    }
                }
                _ => {
                    merged.insert(key.clone(), default.clone());
                }
            },
            _ => {
                if !merged.get(key).is_some_and(Value::is_string) {
                    merged.insert(key.clone(), default.clone());
                }
            }
        }
    }

    Value::Object(merged)
}
