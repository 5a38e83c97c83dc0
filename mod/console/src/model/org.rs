use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                Self(v)
            }
        }
    };
}

id_type!(
    /// Server-assigned sector identifier.
    SectorId
);
id_type!(
    /// Server-assigned process identifier.
    ProcessId
);
id_type!(
    /// Server-assigned sector-process pairing identifier.
    SectorProcessId
);
id_type!(
    /// Server-assigned user identifier.
    UserId
);

/// A top-level operational area (a plant or department).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: SectorId,
    pub name: String,
}

/// A recycling process type, independent of sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub name: String,
}

/// The join of one [`Sector`] with one [`Process`]: "this process as
/// performed in this sector". The unit most listing operations are
/// actually scoped by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorProcess {
    pub id: SectorProcessId,
    pub sector: Sector,
    pub process: Process,
}
