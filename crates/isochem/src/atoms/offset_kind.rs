use std::fmt::{self, Display, Formatter};

use crate::OffsetKind;

impl OffsetKind {
    /// Parses the leading sign of a modification symbol
    #[must_use]
    pub const fn from_sign(sign: char) -> Option<Self> {
        match sign {
            '+' => Some(Self::Add),
            '-' => Some(Self::Remove),
            _ => None,
        }
    }
}

impl Display for OffsetKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Add => "+",
                Self::Remove => "-",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_kind_display() {
        let add = OffsetKind::Add;
        assert_eq!(add.to_string(), "+");
        let remove = OffsetKind::Remove;
        assert_eq!(remove.to_string(), "-");
    }

    #[test]
    fn offset_kind_from_sign() {
        assert_eq!(OffsetKind::from_sign('+'), Some(OffsetKind::Add));
        assert_eq!(OffsetKind::from_sign('-'), Some(OffsetKind::Remove));
        assert_eq!(OffsetKind::from_sign('H'), None);
        assert!(OffsetKind::from_sign('-').unwrap().is_remove());
    }
}
