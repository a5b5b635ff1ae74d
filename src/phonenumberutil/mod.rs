mod helper_constants;
mod helper_functions;
mod operator_registry;
mod phone_number_regexps;
pub mod errors;
pub mod enums;
pub mod options;
pub mod phone_number;
pub mod phonenumberutil;
pub(self) mod helper_types;

use std::sync::LazyLock;

use crate::phonenumberutil::phonenumberutil::PhoneNumberUtil;

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
