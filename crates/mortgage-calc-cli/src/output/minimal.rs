use serde_json::Value;

use super::render;

/// Fields that answer each subcommand, in priority order.
const ANSWER_FIELDS: [&str; 4] = [
    "payment_amount",
    "mortgage_amount",
    "insurance_premium",
    "minimum_down_payment",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result = value.get("result").unwrap_or(value);

    let Value::Object(map) = result else {
        return render(result);
    };

    ANSWER_FIELDS
        .iter()
        .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
        .map(render)
        .or_else(|| {
            map.iter()
                .next()
                .map(|(key, val)| format!("{}: {}", key, render(val)))
        })
        .unwrap_or_default()
}
