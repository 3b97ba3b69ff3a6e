use serde_json::Value;

/// Rounds half away from zero at the given decimal precision.
/// `f64::round` already ties away from zero, so scale-round-unscale is enough.
pub fn round_to(n: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (n * factor).round() / factor
}

/// Rounds to 2 decimal places, the precision every aggregate is reported at.
pub fn round2(n: f64) -> f64 {
    round_to(n, 2)
}

/// Coerces a JSON value to a number. Numbers pass through, numeric strings
/// parse, everything else (null, booleans, structures) is 0.0.
pub fn coerce_num(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}
