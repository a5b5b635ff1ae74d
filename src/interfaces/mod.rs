use std::borrow::Cow;

use crate::macros::impl_phone_number_input_for_integers;

/// Anything a caller may hand over as a phone number: text, an integer, or
/// nothing at all (`None`).
///
/// Implementations only stringify; they never trim or otherwise clean the
/// value, since the untrimmed text is reported back in failures.
pub trait PhoneNumberInput {
    /// Returns the input as text, or `None` when the input is absent.
    fn to_raw_input(&self) -> Option<Cow<'_, str>>;
}

impl PhoneNumberInput for str {
    fn to_raw_input(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl PhoneNumberInput for String {
    fn to_raw_input(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl PhoneNumberInput for Cow<'_, str> {
    fn to_raw_input(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_ref()))
    }
}

impl<T: PhoneNumberInput + ?Sized> PhoneNumberInput for &T {
    fn to_raw_input(&self) -> Option<Cow<'_, str>> {
        (**self).to_raw_input()
    }
}

impl<T: PhoneNumberInput> PhoneNumberInput for Option<T> {
    fn to_raw_input(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|value| value.to_raw_input())
    }
}

impl_phone_number_input_for_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
