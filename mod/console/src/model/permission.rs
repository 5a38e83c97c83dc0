use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::org::{ProcessId, SectorId, SectorProcessId};

// ── Degree ──────────────────────────────────────────────────────────

/// Ordinal capability level attached to a permission grant.
///
/// Zero means no access; higher values grant progressively more
/// capability. Only the comparison "≥ required degree" matters — the
/// exact ordinal meaning above [`Degree::READ`] is host-defined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Degree(pub u8);

impl Degree {
    pub const NONE: Degree = Degree(0);
    pub const READ: Degree = Degree(1);
    pub const WRITE: Degree = Degree(2);
    pub const ADMIN: Degree = Degree(3);

    /// Whether this degree grants at least read access.
    pub fn grants_read(self) -> bool {
        self >= Degree::READ
    }

    /// Whether this degree satisfies the given minimum.
    pub fn allows(self, min: Degree) -> bool {
        self >= min
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── ScreenKey ───────────────────────────────────────────────────────

/// Identifier of a navigational unit (a tab or menu entry). Doubles as
/// the `type_screen` key in permission grants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenKey(Cow<'static, str>);

impl ScreenKey {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ScreenKey {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl fmt::Display for ScreenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Permission ──────────────────────────────────────────────────────

/// Back-reference carried by a scoped grant: which sector-process
/// pairing it applies to. Only `process_id` participates in gating;
/// the sector and pairing ids travel along for display and auditing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorProcessRef {
    pub id: SectorProcessId,
    #[serde(rename = "id_sector")]
    pub sector_id: SectorId,
    #[serde(rename = "id_process")]
    pub process_id: ProcessId,
}

/// What a permission grant applies to.
///
/// The wire format carries a nullable `sector_process`; modeling it as
/// a sum type makes the global-vs-specific precedence rule explicit
/// and exhaustively checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionScope {
    /// Applies everywhere; used only when no process-specific grant
    /// matches.
    Global,
    /// Applies to one sector-process pairing.
    SectorProcess(SectorProcessRef),
}

impl PermissionScope {
    /// The process this grant is scoped to, if any.
    pub fn process_id(&self) -> Option<ProcessId> {
        match self {
            PermissionScope::Global => None,
            PermissionScope::SectorProcess(sp) => Some(sp.process_id),
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, PermissionScope::Global)
    }
}

/// A single permission grant. Immutable for the session's lifetime;
/// the whole set is replaced on re-login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PermissionWire", into = "PermissionWire")]
pub struct Permission {
    pub screen: ScreenKey,
    pub degree: Degree,
    pub scope: PermissionScope,
}

impl Permission {
    /// A grant that applies regardless of the selected process.
    pub fn global(screen: impl Into<ScreenKey>, degree: Degree) -> Self {
        Self {
            screen: screen.into(),
            degree,
            scope: PermissionScope::Global,
        }
    }

    /// A grant scoped to one sector-process pairing.
    pub fn scoped(screen: impl Into<ScreenKey>, degree: Degree, scope: SectorProcessRef) -> Self {
        Self {
            screen: screen.into(),
            degree,
            scope: PermissionScope::SectorProcess(scope),
        }
    }
}

/// Wire shape of a permission: `sector_process` is nullable, null
/// meaning a global grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PermissionWire {
    type_screen: String,
    type_degree: Degree,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sector_process: Option<SectorProcessRef>,
}

impl From<PermissionWire> for Permission {
    fn from(wire: PermissionWire) -> Self {
        Self {
            screen: ScreenKey::new(wire.type_screen),
            degree: wire.type_degree,
            scope: match wire.sector_process {
                None => PermissionScope::Global,
                Some(sp) => PermissionScope::SectorProcess(sp),
            },
        }
    }
}

impl From<Permission> for PermissionWire {
    fn from(p: Permission) -> Self {
        Self {
            type_screen: p.screen.as_str().to_string(),
            type_degree: p.degree,
            sector_process: match p.scope {
                PermissionScope::Global => None,
                PermissionScope::SectorProcess(sp) => Some(sp),
            },
        }
    }
}
