/// 1 when `raw` is exactly `expected`, 0 for anything else (missing included).
pub fn flag(raw: &str, expected: &str) -> u8 {
    u8::from(raw == expected)
}

/// Drop every `.` and turn every `-` into `_`: `"blue-collar"` → `"blue_collar"`.
pub fn clean_job(raw: &str) -> String {
    raw.replace('.', "").replace('-', "_")
}

/// Turn every `.` into `_`; `"unknown"` and missing values become `None`.
pub fn clean_education(raw: &str) -> Option<String> {
    let cleaned = raw.replace('.', "_");
    match cleaned.as_str() {
        "" | "unknown" => None,
        _ => Some(cleaned),
    }
}
