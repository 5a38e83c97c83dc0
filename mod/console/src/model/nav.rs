use serde::{Deserialize, Serialize};

use crate::model::permission::{Degree, ScreenKey};

/// A tab or menu entry, as declared by the host. Declaration order is
/// the render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Screen key; also the `type_screen` the item is gated by.
    pub screen: ScreenKey,

    /// Human-readable label.
    pub label: String,

    /// Render target (route path) the host navigates to.
    pub route: String,

    /// Whether the feature is enabled at all, independent of
    /// permission. An inactive item never renders.
    #[serde(default = "default_true")]
    pub active: bool,

    /// Minimum degree required to render this item.
    #[serde(default = "default_min_degree")]
    pub min_degree: Degree,

    /// Nested child items, gated recursively.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

fn default_true() -> bool {
    true
}

fn default_min_degree() -> Degree {
    Degree::READ
}

impl NavItem {
    pub fn new(
        screen: impl Into<ScreenKey>,
        label: impl Into<String>,
        route: impl Into<String>,
    ) -> Self {
        Self {
            screen: screen.into(),
            label: label.into(),
            route: route.into(),
            active: true,
            min_degree: Degree::READ,
            children: Vec::new(),
        }
    }

    /// Attach child items (the item becomes a submenu parent).
    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }

    /// Require more than read access to render.
    pub fn require(mut self, min_degree: Degree) -> Self {
        self.min_degree = min_degree;
        self
    }

    /// Disable the feature regardless of permission.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// A navigational item that passed gating, annotated with the degree
/// it resolved to so child content can further restrict writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleItem {
    pub screen: ScreenKey,
    pub label: String,
    pub route: String,
    pub degree: Degree,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisibleItem>,
}

impl VisibleItem {
    /// Whether this item is a focusable content screen (no submenu).
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_item_defaults() {
        let item: NavItem = serde_json::from_str(
            r#"{"screen": "colors", "label": "Colors", "route": "/colors"}"#,
        )
        .unwrap();
        assert!(item.active);
        assert_eq!(item.min_degree, Degree::READ);
        assert!(item.children.is_empty());
    }

    #[test]
    fn test_builder() {
        let item = NavItem::new("recovery", "Recovery", "/recovery")
            .require(Degree::ADMIN)
            .inactive();
        assert_eq!(item.min_degree, Degree::ADMIN);
        assert!(!item.active);
    }
}
