use serde_json::{Map, Value};

/// Parse a submission body based on its Content-Type header.
///
/// Bodies that cannot be parsed yield an empty object, so the caller reports
/// every required field as missing instead of a parse error.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Value {
    let ct = content_type.unwrap_or("application/json");

    let parsed = if ct.contains("application/x-www-form-urlencoded") {
        Some(parse_form_urlencoded(body))
    } else {
        serde_json::from_slice::<Value>(body).ok()
    };

    match parsed {
        Some(value @ Value::Object(_)) => value,
        _ => Value::Object(Map::new()),
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Value {
    let map: Map<String, Value> = form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
        .collect();
    Value::Object(map)
}
