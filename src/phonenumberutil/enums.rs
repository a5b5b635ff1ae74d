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

use std::{fmt, str::FromStr};

use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::errors::ConfigError;

/// Defines the representations a validated Bangladesh mobile number can be
/// rendered in.
///
/// For example, the Grameenphone number `01712345678` would be:
/// - **LOCAL**: `01712345678`
/// - **INTERNATIONAL**: `8801712345678`
/// - **E164**: `+8801712345678`
/// - **PRETTY**: `017-123-45678`
/// - **MASKED**: `017****5678`
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "lowercase")]
pub enum PhoneNumberFormat {
    /// **Local format.**
    /// The 11-digit national form, always starting with `01`.
    #[default]
    Local,
    /// **International format.**
    /// The local form with its leading `0` replaced by the country code `880`,
    /// without a plus sign.
    International,
    /// **E.164 format.**
    /// The international form prefixed with `+`.
    E164,
    /// **Pretty format.**
    /// Local digits grouped 3-3-5 and joined with hyphens.
    Pretty,
    /// **Masked format.**
    /// First three and last four digits visible, the rest hidden.
    Masked,
}

/// Selects which digits a custom transform starts from.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "lowercase")]
pub enum TransformBase {
    /// Full 11-digit local number, e.g. `01615928286`.
    #[default]
    Local,
    /// Local number without its leading zero, e.g. `1615928286`.
    Core,
    /// Country code followed by the core, e.g. `8801615928286`.
    International,
}

/// Machine-readable reason attached to every validation failure.
///
/// The string form (`as_str`, `Display`) is stable and can be stored or
/// compared against by callers.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Input was absent or blank.
    Required,
    /// Input contained an ASCII letter.
    LetterNotAllowed,
    /// A `+` appeared more than once, or somewhere other than the start.
    InvalidPlusPosition,
    /// No digits left after stripping punctuation.
    MissingDigits,
    /// A `+`-prefixed number carried a country code other than 880.
    UnsupportedCountryCode,
    /// The local candidate was not 11 digits long.
    InvalidLength,
    /// The local candidate did not start with `01`.
    InvalidStart,
    /// The operator selector digit was outside 3-9.
    InvalidOperatorCode,
    /// The expected operator name could not be resolved.
    UnsupportedOperator,
    /// The detected operator differs from the expected one.
    OperatorMismatch,
}

/// Operators known to the registry, plus the grouped `RobiGroup` key that
/// only ever appears as an *expected* operator.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum OperatorKey {
    Grameenphone,
    Banglalink,
    Teletalk,
    Airtel,
    Robi,
    /// Robi and Airtel share one group; matches a number of either.
    RobiGroup,
}

macro_rules! impl_lowercase_from_str {
    ($enum_type:ty, $error_variant:ident) => {
        impl FromStr for $enum_type {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$enum_type>::iter()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| ConfigError::$error_variant {
                        value: s.to_owned(),
                        supported: <$enum_type>::iter()
                            .map(|variant| variant.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

impl PhoneNumberFormat {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl TransformBase {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl_lowercase_from_str!(PhoneNumberFormat, UnsupportedFormat);
impl_lowercase_from_str!(TransformBase, UnsupportedBase);

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl OperatorKey {
    /// Internal lowercase identifier, e.g. `robi_group`.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Human-readable operator name.
    pub fn label(&self) -> &'static str {
        match self {
            OperatorKey::Grameenphone => "Grameenphone",
            OperatorKey::Banglalink => "Banglalink",
            OperatorKey::Teletalk => "Teletalk",
            OperatorKey::Airtel => "Airtel",
            OperatorKey::Robi => "Robi",
            OperatorKey::RobiGroup => "Robi Group",
        }
    }

    /// Checks a detected operator against `self` taken as the expected one.
    ///
    /// The registry never yields `RobiGroup` for a number, so the grouped key
    /// can't be compared by equality: it accepts either of its members.
    pub fn matches(&self, detected: Option<OperatorKey>) -> bool {
        match self {
            OperatorKey::RobiGroup => {
                matches!(detected, Some(OperatorKey::Robi) | Some(OperatorKey::Airtel))
            }
            expected => detected == Some(*expected),
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PhoneNumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TransformBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OperatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
