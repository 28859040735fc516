//! Type sniffing for raw CSV cells

/// A cell value classified for JSON output
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue<'a> {
    /// Numeric literal, emitted exactly as written
    Number(&'a str),
    Boolean(bool),
    /// Anything else, emitted between quotes as-is
    Text(&'a str),
}

impl<'a> PropertyValue<'a> {
    /// Classify a raw cell.
    ///
    /// The number check runs before the boolean check, so `1` and `0` are
    /// numbers. Values that only parse as an infinite or NaN `f32` (`1e40`,
    /// `inf`, `NaN`) stay text since JSON has no literal for them.
    pub fn classify(raw: &'a str) -> Self {
        if raw.parse::<f32>().map_or(false, f32::is_finite) {
            PropertyValue::Number(raw)
        } else if raw.eq_ignore_ascii_case("true") {
            PropertyValue::Boolean(true)
        } else if raw.eq_ignore_ascii_case("false") {
            PropertyValue::Boolean(false)
        } else {
            PropertyValue::Text(raw)
        }
    }

    /// Append the JSON rendering of this value to `out`.
    ///
    /// Text is wrapped in quotes without escaping, matching what earlier
    /// releases wrote.
    pub fn write_json(&self, out: &mut String) {
        match self {
            PropertyValue::Number(n) => out.push_str(n),
            PropertyValue::Boolean(true) => out.push_str("true"),
            PropertyValue::Boolean(false) => out.push_str("false"),
            PropertyValue::Text(s) => {
                out.push('"');
                out.push_str(s);
                out.push('"');
            }
        }
    }
}
