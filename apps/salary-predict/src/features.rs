//! Recoding of API records into the model's input row

use crate::error::PredictError;
use serde_json::Value;
use std::fmt;

/// Model input columns, in order
pub const FEATURE_NAMES: [&str; 4] = ["Age", "Gender", "Education Level", "Years of Experience"];

/// One model input row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub age: f64,
    pub gender: f64,
    pub education_level: f64,
    pub years_of_experience: f64,
}

impl FeatureVector {
    /// Values in [`FEATURE_NAMES`] order
    pub fn as_array(&self) -> [f64; 4] {
        [self.age, self.gender, self.education_level, self.years_of_experience]
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = FEATURE_NAMES
            .iter()
            .zip(self.as_array())
            .map(|(name, value)| name.len().max(value.to_string().len()))
            .collect();

        let header: Vec<String> = FEATURE_NAMES
            .iter()
            .zip(widths.iter().copied())
            .map(|(name, width)| format!("{name:>width$}"))
            .collect();
        let row: Vec<String> = self
            .as_array()
            .iter()
            .zip(widths.iter().copied())
            .map(|(value, width)| format!("{value:>width$}"))
            .collect();

        writeln!(f, "   {}", header.join("  "))?;
        write!(f, "0  {}", row.join("  "))
    }
}

/// "Male" → 0, "Female" → 1, anything else → 0
pub fn gender_code(value: &Value) -> f64 {
    match value.as_str() {
        Some("Male") => 0.0,
        Some("Female") => 1.0,
        _ => {
            tracing::warn!(field = "Gender", value = %value, "Unrecognized category, defaulting to 0");
            0.0
        }
    }
}

/// "High School" → 0, "Bachelor" → 1, "Master" → 2, "PhD" → 3, anything else → 0
pub fn education_code(value: &Value) -> f64 {
    match value.as_str() {
        Some("High School") => 0.0,
        Some("Bachelor") => 1.0,
        Some("Master") => 2.0,
        Some("PhD") => 3.0,
        _ => {
            tracing::warn!(
                field = "Education_Level",
                value = %value,
                "Unrecognized category, defaulting to 0"
            );
            0.0
        }
    }
}

/// Build the model input row from a fetched record.
///
/// The payload is not checked against the record schema. Every key used must
/// be present; categorical values that are null or unrecognized are coded 0.
pub fn prepare(payload: &Value) -> Result<FeatureVector, PredictError> {
    Ok(FeatureVector {
        age: numeric(payload, "Age")?,
        gender: gender_code(key(payload, "Gender")?),
        education_level: education_code(key(payload, "Education_Level")?),
        years_of_experience: numeric(payload, "Years_of_Experience")?,
    })
}

fn key<'a>(payload: &'a Value, name: &str) -> Result<&'a Value, PredictError> {
    payload
        .get(name)
        .ok_or_else(|| PredictError::MissingField(name.to_string()))
}

fn numeric(payload: &Value, name: &str) -> Result<f64, PredictError> {
    let value = key(payload, name)?;
    value.as_f64().ok_or_else(|| PredictError::InvalidField {
        field: name.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::{fmt, layer::SubscriberExt};

    struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `workload` with a plain-text subscriber and return the emitted lines
    fn capture_logs(workload: impl FnOnce()) -> Vec<String> {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&buffer);

        let layer = fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(move || CapturedWriter(Arc::clone(&captured)));
        let subscriber = tracing_subscriber::Registry::default().with(layer);

        tracing::subscriber::with_default(subscriber, workload);

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output.lines().map(String::from).collect()
    }

    fn payload() -> Value {
        json!({
            "Age": 30,
            "Gender": "Female",
            "Education_Level": "Master",
            "Job_Title": "Analyst",
            "Years_of_Experience": 5,
            "Salary": 70000,
            "id": "65a1f0c2b3d4e5f60718293a"
        })
    }

    #[test]
    fn test_prepare_orders_and_codes_features() {
        let features = prepare(&payload()).unwrap();
        assert_eq!(features.as_array(), [30.0, 1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_gender_codes() {
        assert_eq!(gender_code(&json!("Male")), 0.0);
        assert_eq!(gender_code(&json!("Female")), 1.0);
        assert_eq!(gender_code(&json!("Unknown")), 0.0);
        assert_eq!(gender_code(&json!("female")), 0.0);
        assert_eq!(gender_code(&Value::Null), 0.0);
    }

    #[test]
    fn test_education_codes() {
        assert_eq!(education_code(&json!("High School")), 0.0);
        assert_eq!(education_code(&json!("Bachelor")), 1.0);
        assert_eq!(education_code(&json!("Master")), 2.0);
        assert_eq!(education_code(&json!("PhD")), 3.0);
        assert_eq!(education_code(&json!("Doctorate")), 0.0);
        assert_eq!(education_code(&json!(3)), 0.0);
    }

    #[test]
    fn test_unrecognized_values_default_to_zero() {
        let mut input = payload();
        input["Gender"] = json!("Unknown");
        input["Education_Level"] = json!("Doctorate");

        let features = prepare(&input).unwrap();
        assert_eq!(features.as_array(), [30.0, 0.0, 0.0, 5.0]);
    }

    #[test]
    fn test_defaulted_categories_are_logged() {
        let mut input = payload();
        input["Gender"] = json!("Unknown");
        input["Education_Level"] = json!("Doctorate");

        let lines = capture_logs(|| {
            prepare(&input).unwrap();
        });

        assert_eq!(lines.len(), 2, "{lines:?}");
        assert!(lines.iter().all(|line| line.contains("WARN")));
        assert!(lines[0].contains("Gender") && lines[0].contains("Unknown"));
        assert!(lines[1].contains("Education_Level") && lines[1].contains("Doctorate"));
    }

    #[test]
    fn test_recognized_categories_are_not_logged() {
        let lines = capture_logs(|| {
            prepare(&payload()).unwrap();
        });

        assert!(lines.is_empty(), "{lines:?}");
    }

    #[test]
    fn test_null_categorical_defaults_to_zero() {
        let mut input = payload();
        input["Gender"] = Value::Null;

        assert_eq!(prepare(&input).unwrap().gender, 0.0);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        for name in ["Age", "Gender", "Education_Level", "Years_of_Experience"] {
            let mut input = payload();
            input.as_object_mut().unwrap().remove(name);

            match prepare(&input) {
                Err(PredictError::MissingField(field)) => assert_eq!(field, name),
                other => panic!("Expected MissingField for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_non_numeric_age_is_rejected() {
        let mut input = payload();
        input["Age"] = json!("thirty");

        assert!(matches!(
            prepare(&input),
            Err(PredictError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_display_renders_named_row() {
        let rendered = prepare(&payload()).unwrap().to_string();
        let mut lines = rendered.lines();
        let header = lines.next().unwrap();
        let row = lines.next().unwrap();

        assert!(header.contains("Education Level"));
        assert!(header.contains("Years of Experience"));
        assert!(row.starts_with("0  "));
        assert_eq!(header.len(), row.len());
    }
}
