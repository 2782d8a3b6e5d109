/// Common shape of every backend response: `{ success, message?, ... }`
pub trait Envelope {
    fn success(&self) -> bool;

    fn message(&self) -> Option<&str>;
}

/// Implements [`Envelope`] for a response struct with `success` and
/// `message: Option<String>` fields.
#[macro_export]
macro_rules! impl_envelope {
    ($ty:ty) => {
        impl $crate::Envelope for $ty {
            fn success(&self) -> bool {
                self.success
            }

            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        }
    };
}
