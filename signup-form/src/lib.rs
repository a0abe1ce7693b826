//! Headless signup form controller.
//!
//! Holds the state a browser form would keep in its DOM (per-field error
//! text, invalid markers, the status line, the password checklist and the
//! show/hide toggles) and updates it by calling into `signup-validation`.
//! Hosts render from [`FormSnapshot`].
//!
//! ```
//! use signup_config::FormSettings;
//! use signup_form::{FormController, SubmitOutcome};
//! use signup_validation::FieldName;
//!
//! let mut form = FormController::new(FormSettings::default());
//! form.input(FieldName::Name, "Al");
//! form.input(FieldName::Password, "abc");
//! assert!(!form.checklist().min_length);
//!
//! assert_eq!(
//!     form.submit(),
//!     SubmitOutcome::Rejected { focus: FieldName::Age }
//! );
//! ```

mod controller;
mod view;

pub use controller::{FormController, FormHandle, SubmitOutcome};
pub use view::{FieldSnapshot, FieldView, FormSnapshot, Status, StatusKind, Visibility};
