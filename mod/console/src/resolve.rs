//! Permission resolution — pure, synchronous degree lookup.
//!
//! Runs on every render pass that decides visibility, since the
//! context selection can change between passes.

use crate::model::{Degree, Permission, PermissionScope, ProcessId, ScreenKey};

/// Resolve the capability degree for a screen under a process context.
///
/// Grants scoped to the given process take precedence over global
/// grants; global grants apply only when no process-specific grant
/// matches. Within the winning class the maximum degree applies.
/// No matching grant means [`Degree::NONE`] — a normal state, not an
/// error.
pub fn resolve_degree(
    permissions: &[Permission],
    screen: &ScreenKey,
    process: Option<ProcessId>,
) -> Degree {
    let mut specific: Option<Degree> = None;
    let mut global: Option<Degree> = None;

    for grant in permissions.iter().filter(|g| g.screen == *screen) {
        match grant.scope {
            PermissionScope::SectorProcess(sp) if Some(sp.process_id) == process => {
                specific = Some(specific.map_or(grant.degree, |d| d.max(grant.degree)));
            }
            PermissionScope::SectorProcess(_) => {}
            PermissionScope::Global => {
                global = Some(global.map_or(grant.degree, |d| d.max(grant.degree)));
            }
        }
    }

    specific.or(global).unwrap_or(Degree::NONE)
}
