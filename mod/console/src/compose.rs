//! View composition — which navigational items render, and at what
//! capability.

use std::sync::Arc;

use replast_state::StateCell;

use crate::model::{NavItem, Permission, ProcessId, ScreenKey, VisibleItem};
use crate::resolve::resolve_degree;
use crate::store::{ContextStore, SessionStore};

/// Filter an ordered item list down to what should render under the
/// given permission set and process context.
///
/// Declaration order is preserved — it is the declared menu order, not
/// re-sorted. An item renders iff it is active and its resolved degree
/// meets the item's minimum. Children are gated recursively; a parent
/// with children configured but none visible collapses even when the
/// parent's own degree suffices.
pub fn visible_items(
    items: &[NavItem],
    permissions: &[Permission],
    process: Option<ProcessId>,
) -> Vec<VisibleItem> {
    items
        .iter()
        .filter_map(|item| gate(item, permissions, process))
        .collect()
}

fn gate(item: &NavItem, permissions: &[Permission], process: Option<ProcessId>) -> Option<VisibleItem> {
    if !item.active {
        return None;
    }
    let degree = resolve_degree(permissions, &item.screen, process);
    if !degree.allows(item.min_degree) {
        return None;
    }
    let children = visible_items(&item.children, permissions, process);
    if !item.children.is_empty() && children.is_empty() {
        return None;
    }
    Some(VisibleItem {
        screen: item.screen.clone(),
        label: item.label.clone(),
        route: item.route.clone(),
        degree,
        children,
    })
}

/// Tracks the focused tab against the live session and context.
///
/// Every read recomputes visibility; when a context or session change
/// filters the focused tab out, the composer falls back to the first
/// still-visible leaf. No visible items is an explicit empty state,
/// never an error.
pub struct ViewComposer {
    session: Arc<SessionStore>,
    context: Arc<ContextStore>,
    items: Vec<NavItem>,
    focused: StateCell<Option<ScreenKey>>,
}

impl ViewComposer {
    pub fn new(session: Arc<SessionStore>, context: Arc<ContextStore>, items: Vec<NavItem>) -> Self {
        Self {
            session,
            context,
            items,
            focused: StateCell::default(),
        }
    }

    /// The ordered sublist that should render right now, each item
    /// annotated with its resolved degree.
    pub fn visible(&self) -> Vec<VisibleItem> {
        let permissions = self.session.permissions();
        let process = self.context.process().map(|p| p.id);
        visible_items(&self.items, &permissions, process)
    }

    /// Focus a tab. Succeeds only for a currently visible leaf.
    pub fn activate(&self, screen: &ScreenKey) -> bool {
        let leaves = leaf_keys(&self.visible());
        if !leaves.contains(screen) {
            return false;
        }
        let screen = screen.clone();
        self.focused.set_if(|f| {
            if f.as_ref() == Some(&screen) {
                false
            } else {
                *f = Some(screen.clone());
                true
            }
        });
        true
    }

    /// The focused tab, re-validated against current visibility.
    ///
    /// Falls back to the first visible leaf when the focused tab was
    /// filtered out by a context or session change; `None` when nothing
    /// is visible.
    pub fn active(&self) -> Option<ScreenKey> {
        let leaves = leaf_keys(&self.visible());
        let current = self.focused.get();
        if let Some(ref key) = current {
            if leaves.contains(key) {
                return current;
            }
        }

        let fallback = leaves.first().cloned();
        if fallback != current {
            tracing::debug!(
                from = current.as_ref().map(ScreenKey::as_str),
                to = fallback.as_ref().map(ScreenKey::as_str),
                "focused tab no longer visible, falling back"
            );
            let next = fallback.clone();
            self.focused.set_if(|f| {
                if *f == next {
                    false
                } else {
                    *f = next.clone();
                    true
                }
            });
        }
        fallback
    }
}

/// Focusable screens: visible leaves, in declared (DFS) order.
fn leaf_keys(items: &[VisibleItem]) -> Vec<ScreenKey> {
    let mut out = Vec::new();
    collect_leaves(items, &mut out);
    out
}

fn collect_leaves(items: &[VisibleItem], out: &mut Vec<ScreenKey>) {
    for item in items {
        if item.is_leaf() {
            out.push(item.screen.clone());
        } else {
            collect_leaves(&item.children, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Degree, Process, Sector, SectorId, SectorProcess, SectorProcessId, SectorProcessRef,
        Session, User, UserId,
    };

    fn scope(process: i64) -> SectorProcessRef {
        SectorProcessRef {
            id: SectorProcessId(process * 10),
            sector_id: SectorId(1),
            process_id: ProcessId(process),
        }
    }

    fn items() -> Vec<NavItem> {
        vec![
            NavItem::new("colors", "Colors", "/colors"),
            NavItem::new("machines", "Machines", "/machines"),
            NavItem::new("administration", "Administration", "/administration").with_children(
                vec![
                    NavItem::new("users", "Users", "/users"),
                    NavItem::new("recovery", "Recovery", "/recovery").require(Degree::ADMIN),
                ],
            ),
        ]
    }

    fn stores_with(
        permissions: Vec<Permission>,
        process: i64,
    ) -> (Arc<SessionStore>, Arc<ContextStore>) {
        let session = Arc::new(SessionStore::new());
        session.set(Session {
            user: User {
                id: UserId(1),
                name: "Ana".into(),
                permissions,
            },
            token: "tok".into(),
        });

        let context = Arc::new(ContextStore::new());
        let sector = Sector {
            id: SectorId(1),
            name: "Plant A".into(),
        };
        let processes: Vec<Process> = [7, 8]
            .iter()
            .map(|id| Process {
                id: ProcessId(*id),
                name: format!("Process {}", id),
            })
            .collect();
        let pairings = processes
            .iter()
            .map(|p| SectorProcess {
                id: SectorProcessId(p.id.0 * 10),
                sector: sector.clone(),
                process: p.clone(),
            })
            .collect();
        context.initialize(vec![sector], processes, pairings);
        context.select_process(ProcessId(process)).unwrap();
        (session, context)
    }

    #[test]
    fn test_order_is_preserved() {
        let perms = vec![
            Permission::global("machines", Degree::READ),
            Permission::global("colors", Degree::READ),
        ];
        let visible = visible_items(&items(), &perms, None);
        let keys: Vec<&str> = visible.iter().map(|v| v.screen.as_str()).collect();
        assert_eq!(keys, vec!["colors", "machines"]);
    }

    #[test]
    fn test_inactive_item_never_renders() {
        let nav = vec![NavItem::new("colors", "Colors", "/colors").inactive()];
        let perms = vec![Permission::global("colors", Degree::ADMIN)];
        assert!(visible_items(&nav, &perms, None).is_empty());
    }

    #[test]
    fn test_degree_annotates_item() {
        let perms = vec![Permission::scoped("colors", Degree::WRITE, scope(7))];
        let visible = visible_items(&items(), &perms, Some(ProcessId(7)));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].degree, Degree::WRITE);
    }

    #[test]
    fn test_parent_with_no_visible_children_collapses() {
        // Degree on the parent itself, but no grants for any child.
        let perms = vec![Permission::global("administration", Degree::ADMIN)];
        let visible = visible_items(&items(), &perms, None);
        assert!(visible.is_empty());
    }

    #[test]
    fn test_child_minimum_degree_enforced() {
        let perms = vec![
            Permission::global("administration", Degree::READ),
            Permission::global("users", Degree::READ),
            Permission::global("recovery", Degree::READ),
        ];
        let visible = visible_items(&items(), &perms, None);
        assert_eq!(visible.len(), 1);
        // Recovery needs ADMIN; only users survives.
        let children: Vec<&str> = visible[0].children.iter().map(|c| c.screen.as_str()).collect();
        assert_eq!(children, vec!["users"]);
    }

    #[test]
    fn test_composer_hides_screen_on_process_switch() {
        let perms = vec![Permission::scoped("colors", Degree::READ, scope(7))];
        let (session, context) = stores_with(perms, 7);
        let composer = ViewComposer::new(session, context.clone(), items());

        assert_eq!(composer.visible().len(), 1);
        assert!(composer.activate(&"colors".into()));
        assert_eq!(composer.active(), Some("colors".into()));

        // Switching process loses the grant; no panic, explicit empty
        // state.
        context.select_process(ProcessId(8)).unwrap();
        assert!(composer.visible().is_empty());
        assert_eq!(composer.active(), None);
    }

    #[test]
    fn test_composer_falls_back_to_first_visible() {
        let perms = vec![
            Permission::scoped("colors", Degree::READ, scope(7)),
            Permission::global("machines", Degree::READ),
        ];
        let (session, context) = stores_with(perms, 7);
        let composer = ViewComposer::new(session, context.clone(), items());

        assert!(composer.activate(&"colors".into()));
        context.select_process(ProcessId(8)).unwrap();
        // Colors is gone under process 8; machines is global.
        assert_eq!(composer.active(), Some("machines".into()));
    }

    #[test]
    fn test_activate_rejects_hidden_screen() {
        let perms = vec![Permission::global("machines", Degree::READ)];
        let (session, context) = stores_with(perms, 7);
        let composer = ViewComposer::new(session, context, items());
        assert!(!composer.activate(&"colors".into()));
        assert_eq!(composer.active(), Some("machines".into()));
    }

    #[test]
    fn test_session_clear_empties_composition() {
        let perms = vec![Permission::global("machines", Degree::READ)];
        let (session, context) = stores_with(perms, 7);
        let composer = ViewComposer::new(session.clone(), context, items());
        assert_eq!(composer.visible().len(), 1);

        session.clear();
        assert!(composer.visible().is_empty());
        assert_eq!(composer.active(), None);
    }
}
