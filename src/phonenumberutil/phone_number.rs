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

use log::debug;

use super::{
    enums::{OperatorKey, PhoneNumberFormat, ReasonCode, TransformBase},
    errors::ValidationFailure,
    helper_constants::{
        COUNTRY_CODE, MASK, MASK_VISIBLE_PREFIX, MASK_VISIBLE_SUFFIX_START, OPERATOR_CODE_RANGE,
        PLUS_SIGN, PRETTY_FIRST_GROUP_END, PRETTY_SECOND_GROUP_END, PRETTY_SEPARATOR,
    },
    helper_types::LocalCandidate,
};

/// Outcome of validating one input.
pub type ValidationResult = std::result::Result<BdPhoneNumber, ValidationFailure>;

/// A validated Bangladesh mobile number with every derived representation.
///
/// All representations are computed once from the local number; there are
/// no setters, so they can't drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BdPhoneNumber {
    input: String,
    local: String,
    international: String,
    e164: String,
    pretty: String,
    masked: String,
    operator_code: String,
    operator_key: Option<OperatorKey>,
}

impl BdPhoneNumber {
    pub(super) fn from_candidate(candidate: LocalCandidate<'_>) -> Self {
        let LocalCandidate { input, local, country_code_source } = candidate;
        let core = &local[1..];
        let operator_code = &local[OPERATOR_CODE_RANGE];
        let operator_key = OperatorKey::from_operator_code(operator_code);
        debug!(
            "Detected operator {:?} for code {} ({:?})",
            operator_key, operator_code, country_code_source
        );

        Self {
            input: input.to_owned(),
            international: fast_cat::concat_str!(COUNTRY_CODE, core),
            e164: fast_cat::concat_str!(PLUS_SIGN, COUNTRY_CODE, core),
            pretty: fast_cat::concat_str!(
                &local[..PRETTY_FIRST_GROUP_END],
                PRETTY_SEPARATOR,
                &local[PRETTY_FIRST_GROUP_END..PRETTY_SECOND_GROUP_END],
                PRETTY_SEPARATOR,
                &local[PRETTY_SECOND_GROUP_END..]
            ),
            masked: fast_cat::concat_str!(
                &local[..MASK_VISIBLE_PREFIX],
                MASK,
                &local[MASK_VISIBLE_SUFFIX_START..]
            ),
            operator_code: operator_code.to_owned(),
            operator_key,
            local,
        }
    }

    /// Trimmed input the number was parsed from.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// 11-digit national form, e.g. `01712345678`.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Local form without its leading zero, e.g. `1712345678`.
    pub fn core(&self) -> &str {
        &self.local[1..]
    }

    /// `880` followed by the core, e.g. `8801712345678`.
    pub fn international(&self) -> &str {
        &self.international
    }

    /// `+8801712345678`
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// `017-123-45678`
    pub fn pretty(&self) -> &str {
        &self.pretty
    }

    /// `017****5678`
    pub fn masked(&self) -> &str {
        &self.masked
    }

    /// The two digits after the leading zero, e.g. `17`.
    pub fn operator_code(&self) -> &str {
        &self.operator_code
    }

    pub fn operator_key(&self) -> Option<OperatorKey> {
        self.operator_key
    }

    /// Display name of the operator, e.g. `Grameenphone`.
    pub fn operator(&self) -> Option<&'static str> {
        self.operator_key.map(|key| key.label())
    }

    /// Returns the representation selected by `format`.
    pub fn get(&self, format: PhoneNumberFormat) -> &str {
        match format {
            PhoneNumberFormat::Local => self.local(),
            PhoneNumberFormat::International => self.international(),
            PhoneNumberFormat::E164 => self.e164(),
            PhoneNumberFormat::Pretty => self.pretty(),
            PhoneNumberFormat::Masked => self.masked(),
        }
    }

    pub(super) fn transform_base(&self, base: TransformBase) -> &str {
        match base {
            TransformBase::Local => self.local(),
            TransformBase::Core => self.core(),
            TransformBase::International => self.international(),
        }
    }
}

/// Fixed-shape summary of an input, valid or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSummary {
    /// Raw input as given, untrimmed; empty when absent.
    pub input: String,
    /// Local number when valid, otherwise every ASCII digit of the input.
    pub cleaned: String,
    pub is_valid: bool,
    pub e164: Option<String>,
    pub national: Option<String>,
    pub carrier_guess: Option<&'static str>,
    pub reason_code: Option<ReasonCode>,
    pub reason: Option<String>,
}

impl ParseSummary {
    pub(super) fn from_valid(input: String, phone_number: &BdPhoneNumber) -> Self {
        Self {
            input,
            cleaned: phone_number.local().to_owned(),
            is_valid: true,
            e164: Some(phone_number.e164().to_owned()),
            national: Some(phone_number.local().to_owned()),
            carrier_guess: phone_number.operator(),
            reason_code: None,
            reason: None,
        }
    }

    pub(super) fn from_failure(input: String, cleaned: String, failure: ValidationFailure) -> Self {
        Self {
            input,
            cleaned,
            is_valid: false,
            e164: None,
            national: None,
            carrier_guess: None,
            reason_code: Some(failure.reason_code),
            reason: Some(failure.reason),
        }
    }
}
