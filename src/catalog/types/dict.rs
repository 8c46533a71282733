//! Single-character dictionary codes used by DB2 catalog views.

use std::fmt;
use std::str::FromStr;

/// Unknown dictionary code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dictionary code '{}'", self.0)
    }
}

impl std::error::Error for UnknownCode {}

macro_rules! dictionary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $title:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Catalog code for this value.
            pub fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Human-readable title.
            pub fn title(&self) -> &'static str {
                match self {
                    $( $name::$variant => $title, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )+
                    other => Err(UnknownCode(other.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.title())
            }
        }
    };
}

dictionary! {
    /// `SYSCAT.COLUMNS.HIDDEN`: whether the column is left out of `SELECT *`.
    HiddenState {
        /// Implicitly hidden by the user.
        Implicit => ("I", "Implicitly hidden"),
        /// Managed and hidden by the system.
        System => ("S", "System managed hidden"),
    }
}

impl HiddenState {
    /// Whether the column is hidden from default views.
    pub fn is_hidden(&self) -> bool {
        match self {
            HiddenState::Implicit | HiddenState::System => true,
        }
    }
}

dictionary! {
    /// `SYSCAT.COLUMNS.GENERATED`: how the database computes the value.
    GeneratedKind {
        /// GENERATED ALWAYS.
        Always => ("A", "Always"),
        /// GENERATED BY DEFAULT.
        ByDefault => ("D", "By Default"),
    }
}

dictionary! {
    /// `SYSCAT.COLUMNS.COMPRESS`: value compression mode.
    Compression {
        /// No compression.
        Off => ("O", "Off"),
        /// System default values are compressed.
        SystemDefault => ("S", "System Default"),
    }
}

dictionary! {
    /// Generic Y/N flag.
    YesNo {
        Yes => ("Y", "Yes"),
        No => ("N", "No"),
    }
}
