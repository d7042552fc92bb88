//! Output Formatting

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::commands::OutputFormat;

/// Successful invocation, as printed in JSON mode
#[derive(Debug, Serialize)]
struct InvokeOutput<'a> {
    status: i32,
    function: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Value>,
}

/// Render a read payload or the success marker of a write.
pub fn render_invoke(function: &str, payload: Option<&[u8]>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => match payload {
            None => "OK".to_string(),
            Some(bytes) => match serde_json::from_slice::<Value>(bytes) {
                Ok(value) => to_pretty(&value),
                Err(_) => String::from_utf8_lossy(bytes).into_owned(),
            },
        },
        OutputFormat::Json => to_pretty(&InvokeOutput {
            status: et_chaincode::dispatch::OK,
            function,
            payload: payload.map(payload_value),
        }),
    }
}

/// Render keys grouped by kind. Keys outside every record namespace are
/// listed under `Other`.
pub fn render_keys(groups: &BTreeMap<String, Vec<String>>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_pretty(groups),
        OutputFormat::Plain => {
            let mut out = String::new();
            for (kind, keys) in groups {
                out.push_str(&format!("{} ({})\n", kind, keys.len()));
                for key in keys {
                    out.push_str(&format!("  {}\n", key));
                }
            }
            out.trim_end().to_string()
        }
    }
}

/// Stored JSON is embedded as-is; other bytes become a string.
fn payload_value(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

fn to_pretty<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("Error formatting JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_write() {
        assert_eq!(render_invoke("Write", None, OutputFormat::Plain), "OK");
    }

    #[test]
    fn test_plain_json_payload() {
        let out = render_invoke("ReadOrder", Some(br#"{"id":4}"#), OutputFormat::Plain);
        assert_eq!(out, "{\n  \"id\": 4\n}");
    }

    #[test]
    fn test_plain_raw_payload() {
        let out = render_invoke("ReadOrder", Some(b"TestValue"), OutputFormat::Plain);
        assert_eq!(out, "TestValue");
    }

    #[test]
    fn test_json_output() {
        let out = render_invoke("ReadOrder", Some(br#"{"id":4}"#), OutputFormat::Json);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status"], 200);
        assert_eq!(value["function"], "ReadOrder");
        assert_eq!(value["payload"]["id"], 4);
    }

    #[test]
    fn test_render_keys_plain() {
        let mut groups = BTreeMap::new();
        groups.insert(
            "Order".to_string(),
            vec!["Order_1".to_string(), "Order_2".to_string()],
        );
        assert_eq!(
            render_keys(&groups, OutputFormat::Plain),
            "Order (2)\n  Order_1\n  Order_2"
        );
    }
}
