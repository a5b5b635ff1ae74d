/// Bangladesh country calling code, without the plus sign.
pub const COUNTRY_CODE: &'static str = "880";
/// Country code as dialed with the `00` international prefix.
pub const IDD_COUNTRY_CODE: &'static str = "00880";
/// National trunk prefix every local number starts with.
pub const NATIONAL_PREFIX: &'static str = "0";
pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_CHAR: char = '+';

/// Length of a complete number in local format.
pub const LOCAL_NUMBER_LENGTH: usize = 11;

// Byte ranges of the local number. The local number is ASCII-only once it
// has passed normalization, so byte offsets are char offsets.
pub const OPERATOR_CODE_RANGE: std::ops::Range<usize> = 1..3;
pub const PRETTY_FIRST_GROUP_END: usize = 3;
pub const PRETTY_SECOND_GROUP_END: usize = 6;
pub const MASK_VISIBLE_PREFIX: usize = 3;
pub const MASK_VISIBLE_SUFFIX_START: usize = 7;
pub const MASK: &'static str = "****";
pub const PRETTY_SEPARATOR: &'static str = "-";

// Local number patterns. `[0-9]` rather than `\d`: the regex crate's `\d`
// is Unicode-aware and these must stay ASCII.
pub const MOBILE_LOCAL_PATTERN: &'static str = "01[3-9][0-9]{8}";
pub const LOCAL_START_PATTERN: &'static str = "01[0-9]{9}";
pub const MISSING_LEADING_ZERO_PATTERN: &'static str = "1[0-9]{9}";
pub const ASCII_LETTER_PATTERN: &'static str = "[A-Za-z]";
pub const NON_DIGIT_PATTERN: &'static str = "[^0-9]+";
pub const OPERATOR_NAME_SEPARATORS_PATTERN: &'static str = "[_-]+";
pub const WHITESPACE_RUN_PATTERN: &'static str = r"\s+";

pub const REQUIRED_MESSAGE: &'static str = "Phone number is required.";
pub const LETTER_NOT_ALLOWED_MESSAGE: &'static str = "Phone number cannot contain letters.";
pub const INVALID_PLUS_POSITION_MESSAGE: &'static str =
    "Plus sign is only allowed once at the beginning.";
pub const MISSING_DIGITS_MESSAGE: &'static str = "Phone number must contain digits.";
pub const UNSUPPORTED_COUNTRY_CODE_MESSAGE: &'static str =
    "Only Bangladesh country code +880 is supported.";
pub const INVALID_LENGTH_MESSAGE: &'static str =
    "Bangladesh mobile numbers must be 11 digits in local format.";
pub const INVALID_START_MESSAGE: &'static str = "Bangladesh mobile numbers must start with 01.";
pub const INVALID_OPERATOR_CODE_MESSAGE: &'static str = "Invalid Bangladesh mobile operator code.";
pub const UNSUPPORTED_OPERATOR_MESSAGE: &'static str =
    "Unsupported operator. Use one of: Grameenphone, Airtel, Robi, Banglalink, Teletalk, Robi Group.";
pub const OPERATOR_MISMATCH_MESSAGE_PREFIX: &'static str =
    "Phone number operator mismatch. Expected ";
