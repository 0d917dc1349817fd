use crate::core::university::University;
use crate::core::Format;
use crate::utils::error::Result;

/// Pretty-printed JSON with one array per collection. Non-ASCII text is
/// written as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn encode(&self, data: &University) -> Result<Vec<u8>> {
        // serde_json writes non-finite floats as null, which would not load back.
        data.validate()?;
        let mut bytes = serde_json::to_vec_pretty(data)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> Result<University> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Grade, Student};

    #[test]
    fn test_encode_layout() {
        let mut data = University::new();
        data.students
            .create(Student::new(1, "Илья", "ilya@mail.ru", 3, "ИИТ"))
            .unwrap();
        data.grades.push(Grade::new(1, 1, 1, 54.0));

        let text = String::from_utf8(JsonFormat.encode(&data).unwrap()).unwrap();

        assert!(text.contains("\"name\": \"Илья\""));
        assert!(text.contains("\n  \"students\": [\n"));
        assert!(text.contains("\"grade\": 54.0"));
        let keys: Vec<usize> = ["students", "professors", "courses", "departments", "grades"]
            .iter()
            .map(|key| text.find(&format!("\"{}\"", key)).unwrap())
            .collect();
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_encode_rejects_non_finite_grade() {
        let mut data = University::new();
        data.grades.push(Grade::new(1, 1, 1, f64::NAN));

        let err = JsonFormat.encode(&data).unwrap_err();
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_decode_defaults_missing_collections() {
        let data = JsonFormat
            .decode(br#"{"courses": [{"id": 1, "name": "Math", "code": "M1", "credits": 4}]}"#)
            .unwrap();

        assert_eq!(data.courses.len(), 1);
        assert!(data.students.is_empty());
        assert!(data.grades.is_empty());
    }

    #[test]
    fn test_decode_accepts_integer_grade() {
        let data = JsonFormat
            .decode(br#"{"grades": [{"id": 1, "student_id": 1, "course_id": 1, "grade": 54}]}"#)
            .unwrap();
        assert_eq!(data.grades.get(0).unwrap().grade, 54.0);
    }
}
