// crate::interfaces::PhoneNumberInput
// std::borrow::Cow

/// Implements `PhoneNumberInput` for primitive integers.
///
/// Integers are formatted with `itoa`, so a number input costs a single
/// allocation for the resulting owned string.
macro_rules! impl_phone_number_input_for_integers {
    ($($int:ty),* $(,)?) => {
        $(
            impl $crate::interfaces::PhoneNumberInput for $int {
                fn to_raw_input(&self) -> Option<std::borrow::Cow<'_, str>> {
                    let mut buf = itoa::Buffer::new();
                    Some(std::borrow::Cow::Owned(buf.format(*self).to_owned()))
                }
            }
        )*
    };
}

pub(crate) use impl_phone_number_input_for_integers;
