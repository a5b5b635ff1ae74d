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

use super::{PHONE_NUMBER_UTIL, enums::OperatorKey};

/// Operator selector pairs (digits 2-3 of the local number) to the operator
/// owning that block. Never maps to a grouped key.
const OPERATOR_BY_CODE: &[(&str, OperatorKey)] = &[
    ("13", OperatorKey::Grameenphone),
    ("14", OperatorKey::Banglalink),
    ("15", OperatorKey::Teletalk),
    ("16", OperatorKey::Airtel),
    ("17", OperatorKey::Grameenphone),
    ("18", OperatorKey::Robi),
    ("19", OperatorKey::Banglalink),
];

/// Caller-facing operator names, already normalized (lowercase, single
/// spaces, `_`/`-` folded into spaces).
const OPERATOR_ALIASES: &[(&str, OperatorKey)] = &[
    ("gp", OperatorKey::Grameenphone),
    ("grameenphone", OperatorKey::Grameenphone),
    ("robi", OperatorKey::Robi),
    ("airtel", OperatorKey::Airtel),
    ("robi airtel", OperatorKey::RobiGroup),
    ("airtel robi", OperatorKey::RobiGroup),
    ("robi group", OperatorKey::RobiGroup),
    ("robigroup", OperatorKey::RobiGroup),
    ("airtel group", OperatorKey::RobiGroup),
    ("banglalink", OperatorKey::Banglalink),
    ("bl", OperatorKey::Banglalink),
    ("teletalk", OperatorKey::Teletalk),
    ("tt", OperatorKey::Teletalk),
];

pub(super) fn operator_for_code(operator_code: &str) -> Option<OperatorKey> {
    OPERATOR_BY_CODE
        .iter()
        .find(|(code, _)| *code == operator_code)
        .map(|(_, key)| *key)
}

pub(super) fn operator_for_alias(normalized_name: &str) -> Option<OperatorKey> {
    OPERATOR_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized_name)
        .map(|(_, key)| *key)
}

impl OperatorKey {
    /// Looks up the operator owning a two-digit selector pair such as `"17"`.
    pub fn from_operator_code(operator_code: &str) -> Option<OperatorKey> {
        operator_for_code(operator_code)
    }

    /// Resolves a free-form operator name or abbreviation. Matching ignores
    /// case, and treats `_`/`-` runs and whitespace runs as a single space.
    pub fn resolve(operator_name: &str) -> Option<OperatorKey> {
        PHONE_NUMBER_UTIL.resolve_operator(operator_name)
    }
}
