// Small display/logging helpers shared by the panels.

/// Floor a balance for display and group thousands ("12,345").
pub fn format_points(v: f64) -> String {
    let n = v.max(0.0).floor() as u64;
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Console logging; a no-op off-wasm so native tests stay quiet.
pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_points_floors_and_groups() {
        assert_eq!(format_points(0.0), "0");
        assert_eq!(format_points(999.9), "999");
        assert_eq!(format_points(1000.0), "1,000");
        assert_eq!(format_points(1234567.2), "1,234,567");
        assert_eq!(format_points(-3.0), "0");
    }
}
