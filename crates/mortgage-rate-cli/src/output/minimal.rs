use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: the report's answer is the estimated real rate for the
/// suggested payment; other commands expose their answer through the same
/// priority fields at the top level.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // The full report nests the answer under the suggested breakdown.
    let answer_obj = result_obj
        .as_object()
        .and_then(|m| m.get("suggested"))
        .unwrap_or(result_obj);

    let priority_keys = [
        "estimated_rate_percent",
        "estimated_full_rate_percent",
        "monthly_payment",
        "total_payment",
    ];

    if let Value::Object(map) = answer_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(answer_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
