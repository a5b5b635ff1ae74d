//! Validation, normalization, formatting and operator detection for
//! Bangladesh mobile phone numbers.
//!
//! Every operation runs the same pipeline: raw input is normalized into an
//! 11-digit local number (`01XXXXXXXXX`), checked, and expanded into its
//! representations. Bad phone data is never an error here; it comes back as
//! a [`ValidationFailure`] with a [`ReasonCode`], or as `None`/`false` from
//! the helpers. [`ConfigError`] is reserved for mistakes in the arguments.
//!
//! ```
//! use bdphonenumber::{ValidationOptions, validate};
//!
//! let number = validate("+880 1712-345678", &ValidationOptions::default()).unwrap();
//! assert_eq!(number.local(), "01712345678");
//! assert_eq!(number.operator(), Some("Grameenphone"));
//! ```

mod interfaces;
mod phonenumberutil;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Boilerplate trait impls live behind macros here.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::PhoneNumberInput;
pub use phonenumberutil::{
    PHONE_NUMBER_UTIL,
    enums::{OperatorKey, PhoneNumberFormat, ReasonCode, TransformBase},
    errors::{ConfigError, ValidationFailure},
    options::{TransformOptions, ValidationOptions},
    phone_number::{BdPhoneNumber, ParseSummary, ValidationResult},
    phonenumberutil::{PhoneNumberUtil, Result},
};

/// See [`PhoneNumberUtil::validate`].
pub fn validate(input: impl PhoneNumberInput, options: &ValidationOptions) -> ValidationResult {
    PHONE_NUMBER_UTIL.validate(input, options)
}

/// See [`PhoneNumberUtil::is_valid`].
pub fn is_valid(input: impl PhoneNumberInput, options: &ValidationOptions) -> bool {
    PHONE_NUMBER_UTIL.is_valid(input, options)
}

/// See [`PhoneNumberUtil::format`].
pub fn format(
    input: impl PhoneNumberInput,
    format: PhoneNumberFormat,
    options: &ValidationOptions,
) -> Option<String> {
    PHONE_NUMBER_UTIL.format(input, format, options)
}

/// See [`PhoneNumberUtil::normalize`].
pub fn normalize(input: impl PhoneNumberInput, options: &ValidationOptions) -> Option<String> {
    PHONE_NUMBER_UTIL.normalize(input, options)
}

/// See [`PhoneNumberUtil::parse`].
pub fn parse(input: impl PhoneNumberInput, options: &ValidationOptions) -> ParseSummary {
    PHONE_NUMBER_UTIL.parse(input, options)
}

/// See [`PhoneNumberUtil::get_operator`].
pub fn get_operator(input: impl PhoneNumberInput, options: &ValidationOptions) -> Option<&'static str> {
    PHONE_NUMBER_UTIL.get_operator(input, options)
}

/// See [`PhoneNumberUtil::is_operator`].
pub fn is_operator(
    input: impl PhoneNumberInput,
    operator_name: &str,
    options: &ValidationOptions,
) -> Result<bool> {
    PHONE_NUMBER_UTIL.is_operator(input, operator_name, options)
}

/// See [`PhoneNumberUtil::customize`].
pub fn customize(input: impl PhoneNumberInput, options: &TransformOptions) -> Result<Option<String>> {
    PHONE_NUMBER_UTIL.customize(input, options)
}

/// See [`PhoneNumberUtil::refactor`].
pub fn refactor(input: impl PhoneNumberInput, options: &TransformOptions) -> Result<Option<String>> {
    PHONE_NUMBER_UTIL.refactor(input, options)
}
