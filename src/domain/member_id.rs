use super::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MemberId(i32);

impl MemberId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let parsed = id.trim().parse::<i32>().map_err(|_| {
            ValidationError::new("Invalid member ID".to_string())
        })?;
        if parsed < 1 {
            return Err(ValidationError::new("Invalid member ID".to_string()));
        }
        Ok(Self(parsed))
    }

    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value_of(&self) -> i32 {
        self.0
    }
}

impl AsRef<i32> for MemberId {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

#[test]
fn test_valid_ids() {
    for valid_id in ["1", "42", " 7 "] {
        let parsed = MemberId::parse(valid_id).expect(valid_id);
        assert_eq!(
            parsed.value_of().to_string(),
            valid_id.trim(),
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_invalid_ids() {
    for invalid_id in ["", "abc", "0", "-3", "1.5", "99999999999"] {
        let result = MemberId::parse(invalid_id);
        let error = result.expect_err(invalid_id);
        assert_eq!(error.as_ref(), "Invalid member ID");
    }
}

#[test]
fn test_serialises_as_bare_number() {
    let id = MemberId::new(12);
    assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(12));
}
