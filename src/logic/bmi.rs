//! Body mass index

/// BMI from weight in kilograms and height in centimetres
///
/// Returns `None` when either input isn't a positive number.
///
/// # Examples
/// ```
/// use fitbee::logic::bmi::calculate_bmi;
///
/// let bmi = calculate_bmi(76.0, 175.0).unwrap();
/// assert!((bmi - 24.8).abs() < 0.05);
/// assert_eq!(calculate_bmi(76.0, 0.0), None);
/// ```
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg > 0.0 && height_cm > 0.0) || !weight_kg.is_finite() || !height_cm.is_finite() {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}
