//! Postal code key.
//!
//! A pincode is an opaque string: it is compared byte-for-byte and never
//! trimmed, padded, or matched by prefix.  `Borrow<str>` lets maps keyed by
//! `Pincode` be queried with a plain `&str`.

use std::borrow::Borrow;
use std::fmt;

use crate::{CoreError, CoreResult};

/// An exact-match postal code key such as `"122003"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Pincode(String);

impl Pincode {
    /// Wrap a non-empty string.
    pub fn new(code: impl Into<String>) -> CoreResult<Self> {
        let code = code.into();
        if code.is_empty() {
            return Err(CoreError::EmptyPincode);
        }
        Ok(Self(code))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Pincode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Pincode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Pincode {
    type Error = CoreError;

    fn try_from(code: &str) -> CoreResult<Self> {
        Self::new(code)
    }
}
