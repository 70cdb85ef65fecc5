//! Flash briefing feed model and per-item transform.

use anyhow::Result;
use chrono::Utc;
use minijinja::Environment;
use serde::Deserialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::template::ItemValue;

// Wire keys of the flash briefing feed format. Consuming clients depend on
// these exact strings.
pub const ATTR_TITLE_TEXT: &str = "titleText";
pub const ATTR_MAIN_TEXT: &str = "mainText";
pub const ATTR_UID: &str = "uid";
pub const ATTR_STREAM_URL: &str = "streamUrl";
pub const ATTR_REDIRECTION_URL: &str = "redirectionURL";
pub const ATTR_UPDATE_DATE: &str = "updateDate";

/// updateDate format, fixed for client compatibility.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.0Z";

/// One configured entry within a briefing.
///
/// Every field is optional; title, text, audio and display_url may each be a
/// literal or a template expression.
#[derive(Debug, Clone, Deserialize)]
pub struct BriefingItem {
    pub title: Option<ItemValue>,
    pub text: Option<ItemValue>,
    pub uid: Option<Value>,
    pub audio: Option<ItemValue>,
    pub display_url: Option<ItemValue>,
}

/// Build the output record for a single briefing item.
///
/// Absent fields are omitted from the record entirely. `uid` and `updateDate`
/// are always present; `updateDate` is freshly stamped on every call, so the
/// feed is never bit-for-bit cacheable.
pub fn process_item(item: &BriefingItem, env: &Environment) -> Result<Map<String, Value>> {
    let mut output = Map::new();

    add_attribute(&item.title, ATTR_TITLE_TEXT, &mut output, env)?;
    add_attribute(&item.text, ATTR_MAIN_TEXT, &mut output, env)?;

    output.insert(ATTR_UID.to_string(), Value::String(item_uid(item)));

    add_attribute(&item.audio, ATTR_STREAM_URL, &mut output, env)?;
    add_attribute(&item.display_url, ATTR_REDIRECTION_URL, &mut output, env)?;

    output.insert(
        ATTR_UPDATE_DATE.to_string(),
        Value::String(Utc::now().format(DATE_FORMAT).to_string()),
    );

    Ok(output)
}

fn add_attribute(
    field: &Option<ItemValue>,
    output_key: &str,
    output: &mut Map<String, Value>,
    env: &Environment,
) -> Result<()> {
    if let Some(value) = field {
        output.insert(output_key.to_string(), value.resolve(env)?);
    }
    Ok(())
}

/// Explicit UID stringified as-is; otherwise a fresh v4 UUID per request, so
/// items without a configured UID have no persistent identity.
fn item_uid(item: &BriefingItem) -> String {
    match &item.uid {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item_from_json(value: Value) -> BriefingItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_process_item_maps_all_fields() {
        let item = item_from_json(json!({
            "title": "Morning news",
            "text": "All quiet",
            "uid": "abc-1",
            "audio": "https://example.com/a.mp3",
            "display_url": "https://example.com"
        }));
        let env = Environment::new();

        let output = process_item(&item, &env).unwrap();
        assert_eq!(output[ATTR_TITLE_TEXT], json!("Morning news"));
        assert_eq!(output[ATTR_MAIN_TEXT], json!("All quiet"));
        assert_eq!(output[ATTR_UID], json!("abc-1"));
        assert_eq!(output[ATTR_STREAM_URL], json!("https://example.com/a.mp3"));
        assert_eq!(output[ATTR_REDIRECTION_URL], json!("https://example.com"));
        assert!(output.contains_key(ATTR_UPDATE_DATE));
    }

    #[test]
    fn test_process_item_omits_absent_fields() {
        let item = item_from_json(json!({ "text": "Body only" }));
        let env = Environment::new();

        let output = process_item(&item, &env).unwrap();
        assert!(!output.contains_key(ATTR_TITLE_TEXT));
        assert!(!output.contains_key(ATTR_STREAM_URL));
        assert!(!output.contains_key(ATTR_REDIRECTION_URL));
        assert_eq!(output[ATTR_MAIN_TEXT], json!("Body only"));
        assert!(output.contains_key(ATTR_UID));
        assert!(output.contains_key(ATTR_UPDATE_DATE));
    }

    #[test]
    fn test_generated_uid_differs_per_call() {
        let item = item_from_json(json!({ "title": "No uid" }));
        let env = Environment::new();

        let first = process_item(&item, &env).unwrap();
        let second = process_item(&item, &env).unwrap();
        assert_ne!(first[ATTR_UID], second[ATTR_UID]);
    }

    #[test]
    fn test_explicit_uid_is_stable() {
        let item = item_from_json(json!({ "uid": "stable-1" }));
        let env = Environment::new();

        let first = process_item(&item, &env).unwrap();
        let second = process_item(&item, &env).unwrap();
        assert_eq!(first[ATTR_UID], json!("stable-1"));
        assert_eq!(second[ATTR_UID], json!("stable-1"));
    }

    #[test]
    fn test_non_string_uid_is_stringified() {
        let item = item_from_json(json!({ "uid": 17 }));
        let env = Environment::new();

        let output = process_item(&item, &env).unwrap();
        assert_eq!(output[ATTR_UID], json!("17"));
    }

    #[test]
    fn test_update_date_uses_fixed_format() {
        let item = item_from_json(json!({}));
        let env = Environment::new();

        let output = process_item(&item, &env).unwrap();
        let stamp = output[ATTR_UPDATE_DATE].as_str().unwrap();
        assert!(stamp.ends_with(".0Z"));
        // The prefix is a plain UTC date-time.
        chrono::NaiveDateTime::parse_from_str(
            stamp.trim_end_matches(".0Z"),
            "%Y-%m-%dT%H:%M:%S",
        )
        .unwrap();
    }

    #[test]
    fn test_templated_title_renders() {
        let item = item_from_json(json!({ "title": "{{ 'Hello' }}" }));
        let env = Environment::new();

        let output = process_item(&item, &env).unwrap();
        assert_eq!(output[ATTR_TITLE_TEXT], json!("Hello"));
    }
}
