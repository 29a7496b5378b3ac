//! Slider label rendering.

/// How a slider's value is shown in its paired label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelFormat {
    /// The value string, unchanged.
    Raw,
    /// `1 << value`, with 32-bit integer shift semantics.
    PowerOfTwo,
    /// `1/(1 << value)` as an HTML fraction.
    ReciprocalPowerOfTwo,
}

impl LabelFormat {
    pub fn render(self, value: &str) -> String {
        match self {
            LabelFormat::Raw => value.to_owned(),
            LabelFormat::PowerOfTwo => shift_left_one(value).to_string(),
            LabelFormat::ReciprocalPowerOfTwo => format!("1&frasl;{}", shift_left_one(value)),
        }
    }
}

/// `1 << value` where `value` is a form-control string: blank is 0, garbage is 0,
/// fractions truncate toward zero and the shift count wraps at 32.
pub fn shift_left_one(value: &str) -> i32 {
    1i32.wrapping_shl(to_int32(value) as u32 & 31)
}

fn to_int32(value: &str) -> i32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0;
    }
    let n: f64 = match trimmed.parse() {
        Ok(n) => n,
        Err(_) => return 0,
    };
    if !n.is_finite() {
        return 0;
    }
    // modular wrap into i32, as number-to-int32 conversion does
    let m = n.trunc().rem_euclid(4_294_967_296.0);
    if m >= 2_147_483_648.0 {
        (m - 4_294_967_296.0) as i32
    } else {
        m as i32
    }
}
