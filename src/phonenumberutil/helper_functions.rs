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

use std::borrow::Cow;

use super::phone_number_regexps::PhoneNumberRegExps;

/// Brings a caller-supplied operator name into the form used as alias keys:
/// trimmed, lowercased, `_`/`-` runs replaced by a space, then whitespace
/// runs collapsed to one space.
///
/// The steps run in this order, so `"robi-"` becomes `"robi "` and does not
/// resolve.
pub(super) fn normalize_operator_name(reg_exps: &PhoneNumberRegExps, operator_name: &str) -> String {
    let lowered = operator_name.trim().to_lowercase();
    let separated = reg_exps
        .operator_name_separators_pattern
        .replace_all(&lowered, " ");
    let collapsed = reg_exps.whitespace_run_pattern.replace_all(&separated, " ");
    collapsed.into_owned()
}

/// Keeps only ASCII digits.
pub(super) fn extract_digits<'a>(reg_exps: &PhoneNumberRegExps, s: &'a str) -> Cow<'a, str> {
    reg_exps.non_digit_pattern.replace_all(s, "")
}

/// Joins `prefix`, `trimmed` and `suffix`. Each separator is used only when
/// both it and the text on its outer side are non-empty.
pub(super) fn decorate(
    trimmed: &str,
    prefix: &str,
    separator: &str,
    suffix: &str,
    suffix_separator: &str,
) -> String {
    let separator = if prefix.is_empty() { "" } else { separator };
    let suffix_separator = if suffix.is_empty() { "" } else { suffix_separator };
    fast_cat::concat_str!(prefix, separator, trimmed, suffix_separator, suffix)
}

#[cfg(test)]
mod tests {
    use super::{decorate, extract_digits, normalize_operator_name};
    use crate::phonenumberutil::phone_number_regexps::PhoneNumberRegExps;

    #[test]
    fn operator_names_are_normalized() {
        let reg_exps = PhoneNumberRegExps::new();
        assert_eq!(normalize_operator_name(&reg_exps, "  Robi_Group "), "robi group");
        assert_eq!(normalize_operator_name(&reg_exps, "robi--airtel"), "robi airtel");
        assert_eq!(normalize_operator_name(&reg_exps, "Airtel \t  Robi"), "airtel robi");
        assert_eq!(normalize_operator_name(&reg_exps, "robi-"), "robi ");
        assert_eq!(normalize_operator_name(&reg_exps, "GP"), "gp");
    }

    #[test]
    fn digits_are_extracted() {
        let reg_exps = PhoneNumberRegExps::new();
        assert_eq!(extract_digits(&reg_exps, "+880 1712-345678"), "8801712345678");
        assert_eq!(extract_digits(&reg_exps, "(---)"), "");
        assert_eq!(extract_digits(&reg_exps, "\u{09E6}17"), "17");
    }

    #[test]
    fn separators_need_both_sides() {
        assert_eq!(decorate("1615928286", "+880", " ", "BD", " #"), "+880 1615928286 #BD");
        assert_eq!(decorate("1615928286", "", "-", "", "#"), "1615928286");
        assert_eq!(decorate("1615928286", "X", "", "-RAW", ""), "X1615928286-RAW");
        assert_eq!(decorate("1615928286", "+", "-", "", ""), "+-1615928286");
    }
}
