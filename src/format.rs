/// Count with thousands separators, e.g. `1,234,567`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Brazilian real with two decimals, `-` when there is nothing to average.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("R$ {v:.2}"),
        None => "-".to_string(),
    }
}
