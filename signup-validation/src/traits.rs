// Validation traits

use crate::{FieldValues, ValidationErrors};

/// Types that can check themselves against the signup rules.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for FieldValues {
    fn validate(&self) -> Result<(), ValidationErrors> {
        crate::validate_all(self).into_result()
    }
}
