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

use thiserror::Error;

use super::{enums::ReasonCode, helper_constants::UNSUPPORTED_OPERATOR_MESSAGE};

/// Errors caused by the caller's arguments rather than by the phone number
/// being checked. Bad phone data never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unsupported format. Use one of: {supported}.")]
    UnsupportedFormat { value: String, supported: String },

    #[error("Unsupported base. Use one of: {supported}.")]
    UnsupportedBase { value: String, supported: String },

    #[error("{}", UNSUPPORTED_OPERATOR_MESSAGE)]
    UnsupportedOperator { value: String },

    #[error("Cannot remove all digits. Decrease removeFromStart/removeFromEnd.")]
    RemovesAllDigits {
        remove_from_start: usize,
        remove_from_end: usize,
        base_len: usize,
    },
}

/// A phone number that did not pass validation.
///
/// `input` is the stringified raw input (empty when the input was absent),
/// except for an operator mismatch where it's the trimmed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationFailure {
    pub input: String,
    pub reason: String,
    pub reason_code: ReasonCode,
}

impl ValidationFailure {
    pub(crate) fn new(input: impl Into<String>, reason: impl Into<String>, reason_code: ReasonCode) -> Self {
        Self { input: input.into(), reason: reason.into(), reason_code }
    }
}
