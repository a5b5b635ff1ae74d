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

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Trims Unicode whitespace and byte-order marks from both ends.
///
/// `str::trim` alone leaves U+FEFF in place, which shows up at the start of
/// text pasted from some editors.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

pub fn count_char(s: &str, needle: char) -> usize {
    s.chars().filter(|c| *c == needle).count()
}
