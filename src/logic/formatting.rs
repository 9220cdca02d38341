//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

/// Group digits in thousands with commas
///
/// # Examples
/// ```
/// use fitbee::logic::formatting::format_thousands;
///
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(999), "999");
/// assert_eq!(format_thousands(5243), "5,243");
/// assert_eq!(format_thousands(1234567), "1,234,567");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Drop a trailing `.0` so `8.0` reads as `8` but `6.5` stays
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Footer line shown under the dashboard
pub fn footer_text(year: i32, app_name: &str, app_version: &str) -> String {
    format!("© {} {} v{}. All rights reserved.", year, app_name, app_version)
}
