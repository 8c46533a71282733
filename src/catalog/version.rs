//! Server version and the catalog features it unlocks.
//!
//! `SYSCAT.COLUMNS` gained fields over several releases. Field groups are
//! read only when the connected server is new enough to have them.

use std::fmt;

use crate::error::{Error, Result};

/// Capability gates for version-dependent catalog fields.
pub trait VersionCapabilities {
    /// Collation and quantile statistics.
    fn is_at_least_v9_5(&self) -> bool;
    /// Inline LOB statistics.
    fn is_at_least_v9_7(&self) -> bool;
    /// Temporal (system-period) columns.
    fn is_at_least_v10_1(&self) -> bool;
    /// String units and encoding statistics.
    fn is_at_least_v10_5(&self) -> bool;
}

/// DB2 server version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServerVersion {
    pub major: u16,
    pub minor: u16,
    pub fix: u16,
}

impl ServerVersion {
    /// Create a version.
    pub fn new(major: u16, minor: u16, fix: u16) -> Self {
        Self { major, minor, fix }
    }

    /// Parse a product version string.
    ///
    /// Accepts the product-identifier form reported by the server
    /// (`SQL11059`, `DSN12015`: three letters, two digits version, two digits
    /// release, one digit modification) and dotted forms (`11.5.8.0`,
    /// `v10.1`).
    pub fn parse(version: &str) -> Result<Self> {
        let invalid = || Error::InvalidVersion {
            version: version.to_string(),
        };
        let s = version.trim();

        let prefix_len = s.bytes().take_while(u8::is_ascii_alphabetic).count();
        let digits = &s[prefix_len..];
        if prefix_len == 3 && digits.len() == 5 && digits.bytes().all(|b| b.is_ascii_digit()) {
            let num = |range: std::ops::Range<usize>| {
                digits[range].parse::<u16>().map_err(|_| invalid())
            };
            return Ok(Self::new(num(0..2)?, num(2..4)?, num(4..5)?));
        }

        let dotted = s.strip_prefix(['v', 'V']).unwrap_or(s);
        let mut parts = dotted.split('.');
        let mut next = |required: bool| -> Result<u16> {
            match parts.next() {
                Some(p) => p.trim().parse::<u16>().map_err(|_| invalid()),
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };
        let major = next(true)?;
        let minor = next(true)?;
        let fix = next(false)?;
        Ok(Self::new(major, minor, fix))
    }

    /// Whether this version is at least `major.minor`.
    pub fn is_at_least(&self, major: u16, minor: u16) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.fix)
    }
}

impl VersionCapabilities for ServerVersion {
    fn is_at_least_v9_5(&self) -> bool {
        self.is_at_least(9, 5)
    }

    fn is_at_least_v9_7(&self) -> bool {
        self.is_at_least(9, 7)
    }

    fn is_at_least_v10_1(&self) -> bool {
        self.is_at_least(10, 1)
    }

    fn is_at_least_v10_5(&self) -> bool {
        self.is_at_least(10, 5)
    }
}

/// Explicit gate values, independent of any server version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub v9_5: bool,
    pub v9_7: bool,
    pub v10_1: bool,
    pub v10_5: bool,
}

impl FeatureFlags {
    /// All gates open.
    pub fn all() -> Self {
        Self {
            v9_5: true,
            v9_7: true,
            v10_1: true,
            v10_5: true,
        }
    }

    /// All gates closed.
    pub fn none() -> Self {
        Self::default()
    }
}

impl VersionCapabilities for FeatureFlags {
    fn is_at_least_v9_5(&self) -> bool {
        self.v9_5
    }

    fn is_at_least_v9_7(&self) -> bool {
        self.v9_7
    }

    fn is_at_least_v10_1(&self) -> bool {
        self.v10_1
    }

    fn is_at_least_v10_5(&self) -> bool {
        self.v10_5
    }
}
