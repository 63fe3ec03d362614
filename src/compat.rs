/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{borrow::Cow, boxed::Box, string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub use alloc::{borrow::Cow, boxed::Box, string::String, vec::Vec};

// Only needed by unit tests
#[cfg(all(test, feature = "std"))]
pub use std::{borrow::ToOwned, format, string::ToString};

#[cfg(all(test, not(feature = "std")))]
pub use alloc::{borrow::ToOwned, format, string::ToString};
