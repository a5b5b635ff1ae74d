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

use regex::Regex;

use super::helper_constants::{
    ASCII_LETTER_PATTERN, LOCAL_START_PATTERN, MISSING_LEADING_ZERO_PATTERN,
    MOBILE_LOCAL_PATTERN, NON_DIGIT_PATTERN, OPERATOR_NAME_SEPARATORS_PATTERN,
    WHITESPACE_RUN_PATTERN,
};

pub(super) struct PhoneNumberRegExps {
    /// A complete local mobile number: `01`, an operator selector digit in
    /// 3-9, then eight more digits. Used with full matching.
    pub mobile_local_pattern: Regex,

    /// Any 11-digit number starting with `01`, regardless of the operator
    /// selector. Separates a bad start from a bad operator code.
    pub local_start_pattern: Regex,

    /// A mobile number typed without its leading zero (`1` + nine digits).
    pub missing_leading_zero_pattern: Regex,

    /// Only ASCII letters are rejected; other scripts fall through to digit
    /// stripping like any other punctuation.
    pub ascii_letter_pattern: Regex,

    pub non_digit_pattern: Regex,

    /// Runs of underscores and hyphens inside operator names.
    pub operator_name_separators_pattern: Regex,
    pub whitespace_run_pattern: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        Self {
            mobile_local_pattern: Self::compile(MOBILE_LOCAL_PATTERN),
            local_start_pattern: Self::compile(LOCAL_START_PATTERN),
            missing_leading_zero_pattern: Self::compile(MISSING_LEADING_ZERO_PATTERN),
            ascii_letter_pattern: Self::compile(ASCII_LETTER_PATTERN),
            non_digit_pattern: Self::compile(NON_DIGIT_PATTERN),
            operator_name_separators_pattern: Self::compile(OPERATOR_NAME_SEPARATORS_PATTERN),
            whitespace_run_pattern: Self::compile(WHITESPACE_RUN_PATTERN),
        }
    }

    fn compile(pattern: &str) -> Regex {
        Regex::new(pattern).expect("Invalid constant pattern!")
    }
}
