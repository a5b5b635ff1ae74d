// Copyright (C) 2025 The bdphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::{trace, warn};

use super::{
    enums::{OperatorKey, PhoneNumberFormat, ReasonCode},
    errors::{ConfigError, ValidationFailure},
    helper_constants::{
        COUNTRY_CODE, IDD_COUNTRY_CODE, INVALID_LENGTH_MESSAGE, INVALID_OPERATOR_CODE_MESSAGE,
        INVALID_PLUS_POSITION_MESSAGE, INVALID_START_MESSAGE, LETTER_NOT_ALLOWED_MESSAGE,
        LOCAL_NUMBER_LENGTH, MISSING_DIGITS_MESSAGE, NATIONAL_PREFIX, OPERATOR_MISMATCH_MESSAGE_PREFIX,
        PLUS_CHAR, REQUIRED_MESSAGE, UNSUPPORTED_COUNTRY_CODE_MESSAGE, UNSUPPORTED_OPERATOR_MESSAGE,
    },
    helper_functions::{decorate, extract_digits, normalize_operator_name},
    helper_types::{CountryCodeSource, LocalCandidate},
    operator_registry::operator_for_alias,
    options::{TransformOptions, ValidationOptions},
    phone_number::{BdPhoneNumber, ParseSummary, ValidationResult},
    phone_number_regexps::PhoneNumberRegExps,
};
use crate::{
    interfaces::PhoneNumberInput,
    regex_util::RegexFullMatch,
    string_util::{count_char, trim_input},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Entry point for every operation. Holds only compiled patterns, so one
/// shared instance ([`PHONE_NUMBER_UTIL`](super::PHONE_NUMBER_UTIL)) serves
/// all threads.
pub struct PhoneNumberUtil {
    reg_exps: PhoneNumberRegExps,
}

impl PhoneNumberUtil {
    pub(crate) fn new() -> Self {
        Self {
            reg_exps: PhoneNumberRegExps::new(),
        }
    }

    /// Resolves an operator name or alias to its key. `None` for names the
    /// alias table doesn't know.
    pub fn resolve_operator(&self, operator_name: &str) -> Option<OperatorKey> {
        operator_for_alias(&normalize_operator_name(&self.reg_exps, operator_name))
    }

    /// Turns raw input into a structurally valid local number. Rules run in
    /// a fixed order and the first one that fails decides the reason.
    fn to_local_candidate<'a>(
        &self,
        raw_input: Option<&'a str>,
        allow_missing_leading_zero: bool,
    ) -> std::result::Result<LocalCandidate<'a>, ValidationFailure> {
        let original = raw_input.unwrap_or_default();
        let reject = |reason: &str, reason_code: ReasonCode| {
            trace!("Rejected phone number {:?}: {}", original, reason_code);
            ValidationFailure::new(original, reason, reason_code)
        };

        let trimmed = trim_input(original);
        if raw_input.is_none() || trimmed.is_empty() {
            return Err(reject(REQUIRED_MESSAGE, ReasonCode::Required));
        }

        if self.reg_exps.ascii_letter_pattern.is_match(trimmed) {
            return Err(reject(LETTER_NOT_ALLOWED_MESSAGE, ReasonCode::LetterNotAllowed));
        }

        let starts_with_plus = trimmed.starts_with(PLUS_CHAR);
        let plus_count = count_char(trimmed, PLUS_CHAR);
        if plus_count > 1 || (plus_count == 1 && !starts_with_plus) {
            return Err(reject(INVALID_PLUS_POSITION_MESSAGE, ReasonCode::InvalidPlusPosition));
        }

        let digits = extract_digits(&self.reg_exps, trimmed).into_owned();
        if digits.is_empty() {
            return Err(reject(MISSING_DIGITS_MESSAGE, ReasonCode::MissingDigits));
        }

        // Explicit country code forms win over the missing-zero heuristic:
        // "8801712345678" must not be read as anything but +880.
        let (local, country_code_source) = if starts_with_plus {
            match digits.strip_prefix(COUNTRY_CODE) {
                Some(rest) => (
                    fast_cat::concat_str!(NATIONAL_PREFIX, rest),
                    CountryCodeSource::FromNumberWithPlusSign,
                ),
                None => {
                    return Err(reject(
                        UNSUPPORTED_COUNTRY_CODE_MESSAGE,
                        ReasonCode::UnsupportedCountryCode,
                    ));
                }
            }
        } else if let Some(rest) = digits.strip_prefix(IDD_COUNTRY_CODE) {
            (
                fast_cat::concat_str!(NATIONAL_PREFIX, rest),
                CountryCodeSource::FromNumberWithIdd,
            )
        } else if let Some(rest) = digits.strip_prefix(COUNTRY_CODE) {
            (
                fast_cat::concat_str!(NATIONAL_PREFIX, rest),
                CountryCodeSource::FromNumberWithoutPlusSign,
            )
        } else if digits.starts_with(NATIONAL_PREFIX) {
            (digits, CountryCodeSource::FromNationalPrefix)
        } else if allow_missing_leading_zero
            && self.reg_exps.missing_leading_zero_pattern.full_match(&digits)
        {
            (
                fast_cat::concat_str!(NATIONAL_PREFIX, digits.as_str()),
                CountryCodeSource::FromMissingLeadingZero,
            )
        } else {
            (digits, CountryCodeSource::Unrecognized)
        };
        trace!("Local candidate {} from {:?}", local, country_code_source);

        if local.len() != LOCAL_NUMBER_LENGTH {
            return Err(reject(INVALID_LENGTH_MESSAGE, ReasonCode::InvalidLength));
        }
        if !self.reg_exps.local_start_pattern.full_match(&local) {
            return Err(reject(INVALID_START_MESSAGE, ReasonCode::InvalidStart));
        }
        if !self.reg_exps.mobile_local_pattern.full_match(&local) {
            return Err(reject(INVALID_OPERATOR_CODE_MESSAGE, ReasonCode::InvalidOperatorCode));
        }

        Ok(LocalCandidate::new(trimmed, local, country_code_source))
    }

    /// Validates `input` and derives every representation of it.
    ///
    /// Never panics on bad data: failures come back as [`ValidationFailure`]
    /// with a [`ReasonCode`]. An `expected_operator` that doesn't resolve
    /// fails with `UNSUPPORTED_OPERATOR` before the number is even looked at.
    pub fn validate(
        &self,
        input: impl PhoneNumberInput,
        options: &ValidationOptions,
    ) -> ValidationResult {
        let raw_input = input.to_raw_input();
        let raw_input = raw_input.as_deref();

        let expected_operator = match options.expected_operator.as_deref() {
            Some(operator_name) => match self.resolve_operator(operator_name) {
                Some(key) => Some(key),
                None => {
                    trace!("Expected operator {:?} is not supported", operator_name);
                    return Err(ValidationFailure::new(
                        raw_input.unwrap_or_default(),
                        UNSUPPORTED_OPERATOR_MESSAGE,
                        ReasonCode::UnsupportedOperator,
                    ));
                }
            },
            None => None,
        };

        let candidate = self.to_local_candidate(raw_input, options.allow_missing_leading_zero)?;
        let phone_number = BdPhoneNumber::from_candidate(candidate);

        if let Some(expected) = expected_operator {
            if !expected.matches(phone_number.operator_key()) {
                trace!(
                    "Operator mismatch for {}: expected {}, detected {:?}",
                    phone_number.local(),
                    expected.as_str(),
                    phone_number.operator_key()
                );
                return Err(ValidationFailure::new(
                    phone_number.input(),
                    fast_cat::concat_str!(OPERATOR_MISMATCH_MESSAGE_PREFIX, expected.label(), "."),
                    ReasonCode::OperatorMismatch,
                ));
            }
        }

        Ok(phone_number)
    }

    pub fn is_valid(&self, input: impl PhoneNumberInput, options: &ValidationOptions) -> bool {
        self.validate(input, options).is_ok()
    }

    /// Renders a valid number in `format`; `None` if the number is invalid.
    ///
    /// Format names coming from text go through `str::parse`, which is where
    /// an unsupported name is reported.
    pub fn format(
        &self,
        input: impl PhoneNumberInput,
        format: PhoneNumberFormat,
        options: &ValidationOptions,
    ) -> Option<String> {
        self.validate(input, options)
            .ok()
            .map(|phone_number| phone_number.get(format).to_owned())
    }

    /// Same as [`format`](Self::format) with `options.format`, which defaults
    /// to E.164.
    pub fn normalize(&self, input: impl PhoneNumberInput, options: &ValidationOptions) -> Option<String> {
        let format = options.format.unwrap_or(PhoneNumberFormat::E164);
        self.format(input, format, options)
    }

    /// Summarizes `input` in a fixed shape. Never fails; invalid input gets
    /// its ASCII digits as `cleaned` and the failure reason.
    pub fn parse(&self, input: impl PhoneNumberInput, options: &ValidationOptions) -> ParseSummary {
        let raw_input = input.to_raw_input();
        let validated = self.validate(raw_input.as_deref(), options);
        let raw_input = raw_input.as_deref().unwrap_or_default();

        match validated {
            Ok(phone_number) => ParseSummary::from_valid(raw_input.to_owned(), &phone_number),
            Err(failure) => ParseSummary::from_failure(
                raw_input.to_owned(),
                extract_digits(&self.reg_exps, raw_input).into_owned(),
                failure,
            ),
        }
    }

    /// Display name of the number's operator; `None` if the number is
    /// invalid.
    pub fn get_operator(
        &self,
        input: impl PhoneNumberInput,
        options: &ValidationOptions,
    ) -> Option<&'static str> {
        self.validate(input, options)
            .ok()
            .and_then(|phone_number| phone_number.operator())
    }

    /// Whether `input` is a valid number of `operator_name`.
    ///
    /// Unlike `expected_operator` in [`validate`](Self::validate), an
    /// unknown `operator_name` is the caller's mistake and is returned as
    /// [`ConfigError::UnsupportedOperator`]. Any `expected_operator` in
    /// `options` is ignored.
    pub fn is_operator(
        &self,
        input: impl PhoneNumberInput,
        operator_name: &str,
        options: &ValidationOptions,
    ) -> Result<bool> {
        let expected = self.resolve_operator(operator_name).ok_or_else(|| {
            warn!("Unsupported operator name provided: {:?}", operator_name);
            ConfigError::UnsupportedOperator { value: operator_name.to_owned() }
        })?;

        let options = ValidationOptions {
            expected_operator: None,
            allow_missing_leading_zero: options.allow_missing_leading_zero,
            format: options.format,
        };
        Ok(match self.validate(input, &options) {
            Ok(phone_number) => expected.matches(phone_number.operator_key()),
            Err(_) => false,
        })
    }

    /// Builds a custom string from a valid number: select the base, drop
    /// `remove_from_start`/`remove_from_end` characters, then decorate with
    /// prefix and suffix.
    ///
    /// Invalid numbers give `Ok(None)`, checked before the options are.
    /// Removing as many characters as the base holds is a
    /// [`ConfigError::RemovesAllDigits`].
    pub fn customize(
        &self,
        input: impl PhoneNumberInput,
        options: &TransformOptions,
    ) -> Result<Option<String>> {
        let phone_number = match self.validate(input, &options.validation) {
            Ok(phone_number) => phone_number,
            Err(_) => return Ok(None),
        };

        let base_value = phone_number.transform_base(options.base);
        let base_len = base_value.len();
        if options.remove_from_start.saturating_add(options.remove_from_end) >= base_len {
            warn!(
                "Transform would remove all digits: start {}, end {}, base {} of length {}",
                options.remove_from_start, options.remove_from_end, options.base, base_len
            );
            return Err(ConfigError::RemovesAllDigits {
                remove_from_start: options.remove_from_start,
                remove_from_end: options.remove_from_end,
                base_len,
            });
        }

        let trimmed = &base_value[options.remove_from_start..base_len - options.remove_from_end];
        Ok(Some(decorate(
            trimmed,
            &options.prefix,
            &options.separator,
            &options.suffix,
            &options.suffix_separator,
        )))
    }

    /// Another name for [`customize`](Self::customize).
    pub fn refactor(
        &self,
        input: impl PhoneNumberInput,
        options: &TransformOptions,
    ) -> Result<Option<String>> {
        self.customize(input, options)
    }
}
