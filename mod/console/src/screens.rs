//! Screen catalog — the stable `type_screen` keys of the console and
//! the default menu built from them.

use crate::model::{Degree, NavItem};

/// Stable screen keys. Permission grants reference these strings.
pub mod screen {
    pub const REGISTRATION: &str = "registration";
    pub const COLORS: &str = "colors";
    pub const LOTES: &str = "lotes";
    pub const GROUPS: &str = "groups";
    pub const MACHINES: &str = "machines";
    pub const MODELS: &str = "models";
    pub const PROCESSES: &str = "processes";
    pub const SECTORS: &str = "sectors";
    pub const SECTOR_PROCESSES: &str = "sector-processes";
    pub const FORMULAS: &str = "formulas";
    pub const PRODUCTS: &str = "products";
    pub const UNITIES: &str = "unities";
    pub const PRODUCTIONS: &str = "productions";
    pub const ADMINISTRATION: &str = "administration";
    pub const USERS: &str = "users";
    pub const PERMISSIONS: &str = "permissions";
    pub const RECOVERY: &str = "recovery";
}

/// The standard admin menu, in declared order.
///
/// Master data lives under a registration submenu; recovery requires
/// admin degree because it lists soft-deleted records.
pub fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::new(screen::REGISTRATION, "Registration", "/registration").with_children(vec![
            NavItem::new(screen::COLORS, "Colors", "/registration/colors"),
            NavItem::new(screen::LOTES, "Lotes", "/registration/lotes"),
            NavItem::new(screen::GROUPS, "Groups", "/registration/groups"),
            NavItem::new(screen::MACHINES, "Machines", "/registration/machines"),
            NavItem::new(screen::MODELS, "Models", "/registration/models"),
            NavItem::new(screen::PROCESSES, "Processes", "/registration/processes"),
            NavItem::new(screen::SECTORS, "Sectors", "/registration/sectors"),
            NavItem::new(
                screen::SECTOR_PROCESSES,
                "Sector processes",
                "/registration/sector-processes",
            ),
            NavItem::new(screen::FORMULAS, "Formulas", "/registration/formulas"),
            NavItem::new(screen::PRODUCTS, "Products", "/registration/products"),
            NavItem::new(screen::UNITIES, "Unities", "/registration/unities"),
        ]),
        NavItem::new(screen::PRODUCTIONS, "Production", "/productions"),
        NavItem::new(screen::ADMINISTRATION, "Administration", "/administration").with_children(
            vec![
                NavItem::new(screen::USERS, "Users", "/administration/users"),
                NavItem::new(
                    screen::PERMISSIONS,
                    "Permissions",
                    "/administration/permissions",
                ),
                NavItem::new(screen::RECOVERY, "Recovery", "/administration/recovery")
                    .require(Degree::ADMIN),
            ],
        ),
    ]
}
