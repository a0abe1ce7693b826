// Aggregate result of validating the whole form

use crate::{FieldName, ValidationErrors, ValidationResult};

/// Per-field results plus the submission verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormValidationOutcome {
    results: [ValidationResult; 6],
    first_invalid: Option<FieldName>,
}

impl FormValidationOutcome {
    /// Results indexed by [`FieldName::index`].
    pub fn from_results(results: [ValidationResult; 6]) -> Self {
        let first_invalid = FieldName::ALL
            .into_iter()
            .find(|field| !results[field.index()].is_valid());
        Self {
            results,
            first_invalid,
        }
    }

    /// True when every field passed; submission may proceed.
    pub fn all_valid(&self) -> bool {
        self.first_invalid.is_none()
    }

    /// Earliest invalid field in form order, where focus should go.
    pub fn first_invalid(&self) -> Option<FieldName> {
        self.first_invalid
    }

    pub fn result(&self, field: FieldName) -> ValidationResult {
        self.results[field.index()]
    }

    /// All fields with their results, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, ValidationResult)> + '_ {
        FieldName::ALL
            .into_iter()
            .map(move |field| (field, self.result(field)))
    }

    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(field, _)| field)
            .collect()
    }

    /// Collected errors, empty when the form is valid.
    pub fn errors(&self) -> ValidationErrors {
        self.iter()
            .filter_map(|(field, result)| result.to_error(field))
            .collect::<Vec<_>>()
            .into()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.all_valid() {
            Ok(())
        } else {
            Err(self.errors())
        }
    }
}
