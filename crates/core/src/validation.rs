//! Bridge between `validator` derives and [`CoreError`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived validation rules on `input`.
///
/// Failures are flattened into a single `field: message` list so the HTTP
/// layer can report them verbatim.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: failed '{}' check", e.code),
            })
        })
        .collect();
    // HashMap iteration order is unstable.
    parts.sort();
    parts.join("; ")
}
