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

use super::enums::{PhoneNumberFormat, TransformBase};

/// Options shared by every validating operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Accept `1XXXXXXXXX` (ten digits) as a local number missing its `0`.
    pub allow_missing_leading_zero: bool,
    /// Operator name or alias the number must belong to, e.g. `"gp"` or
    /// `"Robi Group"`. An unknown name fails validation with
    /// `UNSUPPORTED_OPERATOR`.
    pub expected_operator: Option<String>,
    /// Output format for `normalize`; other operations ignore it.
    pub format: Option<PhoneNumberFormat>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            allow_missing_leading_zero: true,
            expected_operator: None,
            format: None,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_missing_leading_zero(mut self, allow: bool) -> Self {
        self.allow_missing_leading_zero = allow;
        self
    }

    pub fn with_expected_operator(mut self, operator_name: impl Into<String>) -> Self {
        self.expected_operator = Some(operator_name.into());
        self
    }

    pub fn with_format(mut self, format: PhoneNumberFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Describes a custom rendering of a validated number: pick a base, cut
/// characters off either end, then decorate.
///
/// A separator is only emitted when both it and the text it joins are
/// non-empty, independently on the prefix and the suffix side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformOptions {
    pub validation: ValidationOptions,
    pub base: TransformBase,
    pub remove_from_start: usize,
    pub remove_from_end: usize,
    pub prefix: String,
    pub separator: String,
    pub suffix: String,
    pub suffix_separator: String,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_base(mut self, base: TransformBase) -> Self {
        self.base = base;
        self
    }

    pub fn with_remove_from_start(mut self, count: usize) -> Self {
        self.remove_from_start = count;
        self
    }

    pub fn with_remove_from_end(mut self, count: usize) -> Self {
        self.remove_from_end = count;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_suffix_separator(mut self, suffix_separator: impl Into<String>) -> Self {
        self.suffix_separator = suffix_separator.into();
        self
    }
}
