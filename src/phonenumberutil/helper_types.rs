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


/// Which rule produced the local candidate from the raw digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryCodeSource {
    /// `+880...`
    FromNumberWithPlusSign,
    /// `00880...`
    FromNumberWithIdd,
    /// `880...` without a plus sign or international prefix.
    FromNumberWithoutPlusSign,
    /// Already in local format, starting with `0`.
    FromNationalPrefix,
    /// `1` plus nine digits, with the leading zero restored.
    FromMissingLeadingZero,
    /// Digits taken as-is; later length and prefix checks decide.
    Unrecognized,
}

/// An 11-digit local number that passed every structural check, paired with
/// the trimmed raw input it came from.
#[derive(Debug)]
pub struct LocalCandidate<'a> {
    pub input: &'a str,
    pub local: String,
    pub country_code_source: CountryCodeSource,
}

impl<'a> LocalCandidate<'a> {
    pub fn new(input: &'a str, local: String, country_code_source: CountryCodeSource) -> Self {
        Self { input, local, country_code_source }
    }
}
