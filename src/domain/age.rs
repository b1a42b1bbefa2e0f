use super::ValidationError;
use serde::{Deserialize, Serialize};

pub const AGE_MIN: i32 = 18;
pub const AGE_MAX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Age(i32);

impl Age {
    pub fn parse(age: &str) -> Result<Self, ValidationError> {
        let parsed = age.trim().parse::<i32>().map_err(|_| {
            ValidationError::new("Age must be a whole number".to_string())
        })?;
        Self::try_from(parsed)
    }

    pub fn value_of(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Age {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if !(AGE_MIN..=AGE_MAX).contains(&value) {
            return Err(ValidationError::new(format!(
                "Age must be between {AGE_MIN} and {AGE_MAX}"
            )));
        }
        Ok(Self(value))
    }
}

impl From<Age> for i32 {
    fn from(age: Age) -> Self {
        age.0
    }
}
