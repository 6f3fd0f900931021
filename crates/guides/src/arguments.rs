use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Free-text arguments of a single invocation.
///
/// Values are never validated. A missing key reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: BTreeMap<String, String>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Converts a JSON argument object as delivered by a protocol client.
    ///
    /// Strings pass through verbatim, `null` is dropped, anything else keeps its compact JSON text.
    pub fn from_json(object: &Map<String, Value>) -> Self {
        let values = object
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), text))
            })
            .collect();
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_key_reads_empty() {
        let args = Arguments::new().with("query_hint", "limit:10");
        assert_eq!(args.get("query_hint"), "limit:10");
        assert_eq!(args.get("meeting_id"), "");
    }

    #[test]
    fn json_strings_pass_through_and_null_is_absent() {
        let value = json!({
            "meeting_id": "  abc  ",
            "meeting_date": null,
            "count": 3,
            "flag": true,
        });
        let args = Arguments::from_json(value.as_object().expect("object"));
        assert_eq!(args.get("meeting_id"), "  abc  ");
        assert_eq!(args.get("meeting_date"), "");
        assert_eq!(args.get("count"), "3");
        assert_eq!(args.get("flag"), "true");
    }

    #[test]
    fn nested_values_keep_json_text() {
        let value = json!({ "action_items": ["a", "b"] });
        let args = Arguments::from_json(value.as_object().expect("object"));
        assert_eq!(args.get("action_items"), r#"["a","b"]"#);
    }
}
