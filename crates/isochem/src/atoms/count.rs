use std::{
    fmt::{self, Display, Formatter},
    num::NonZeroU32,
    ops::Mul,
};

use crate::Count;

impl Count {
    pub const MAX: Self = Self(NonZeroU32::MAX);

    #[must_use]
    pub const fn new(n: u32) -> Option<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns `None` if the sum doesn't fit in a `u32`
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0.get()) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns `None` when `other` is larger than `self`, and `Some(None)` when they're equal (nothing is left over)
    pub(crate) fn checked_sub(self, other: Self) -> Option<Option<Self>> {
        self.get().checked_sub(other.get()).map(Self::new)
    }
}

impl Mul<f64> for Count {
    type Output = f64;

    fn mul(self, rhs: f64) -> Self::Output {
        f64::from(self.get()) * rhs
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let count = self.get();
        if count > 1 {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

impl Default for Count {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl From<Count> for u32 {
    fn from(value: Count) -> Self {
        value.get()
    }
}
