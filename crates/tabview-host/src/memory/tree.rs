//! In-memory visual tree with focus tracking

use std::collections::HashMap;

use crate::element::{ElementId, Rect};
use crate::focus::{FocusNavigationDirection, FocusState, VisualTree};

#[derive(Debug, Clone)]
struct Node {
    parent: Option<ElementId>,
    bounds: Rect,
    focusable: bool,
}

#[derive(Debug, Default)]
pub struct MemoryVisualTree {
    nodes: HashMap<ElementId, Node>,
    /// Insertion order, which doubles as tab order
    order: Vec<ElementId>,
    focused: Option<ElementId>,
    focus_log: Vec<(ElementId, FocusState)>,
}

impl MemoryVisualTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(
        &mut self,
        element: ElementId,
        parent: Option<ElementId>,
        bounds: Rect,
        focusable: bool,
    ) {
        if self
            .nodes
            .insert(
                element,
                Node {
                    parent,
                    bounds,
                    focusable,
                },
            )
            .is_none()
        {
            self.order.push(element);
        }
    }

    /// Whether `element` is `root` or lies under it
    pub fn is_within(&self, element: ElementId, root: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = self.nodes.get(&id).and_then(|node| node.parent);
        }
        false
    }

    pub fn is_focus_within(&self, root: ElementId) -> bool {
        self.focused
            .map(|focused| self.is_within(focused, root))
            .unwrap_or(false)
    }

    /// Drop focus, as when the focused element leaves the tree
    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    /// Every programmatic or user focus assignment, oldest first
    pub fn focus_log(&self) -> &[(ElementId, FocusState)] {
        &self.focus_log
    }
}

impl VisualTree for MemoryVisualTree {
    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element).and_then(|node| node.parent)
    }

    fn focused_element(&self) -> Option<ElementId> {
        self.focused
    }

    fn find_first_focusable(&self, root: ElementId) -> Option<ElementId> {
        self.order.iter().copied().find(|id| {
            self.nodes.get(id).map(|n| n.focusable).unwrap_or(false) && self.is_within(*id, root)
        })
    }

    fn find_next_element(
        &self,
        direction: FocusNavigationDirection,
        exclusion: Rect,
    ) -> Option<ElementId> {
        let origin = exclusion.center();

        self.order
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|node| (*id, node)))
            .filter(|(_, node)| node.focusable && !node.bounds.intersects(&exclusion))
            .filter(|(_, node)| {
                let b = node.bounds;
                match direction {
                    FocusNavigationDirection::Up => b.bottom() <= exclusion.top(),
                    FocusNavigationDirection::Down => b.top() >= exclusion.bottom(),
                    FocusNavigationDirection::Left => b.right() <= exclusion.left(),
                    FocusNavigationDirection::Right => b.left() >= exclusion.right(),
                    _ => true,
                }
            })
            .map(|(id, node)| {
                let center = node.bounds.center();
                let distance = (center.x - origin.x).hypot(center.y - origin.y);
                (id, distance)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    fn set_focus(&mut self, element: ElementId, state: FocusState) -> bool {
        let focusable = self.nodes.get(&element).map(|n| n.focusable).unwrap_or(false);
        if !focusable {
            return false;
        }

        self.focused = Some(element);
        self.focus_log.push((element, state));
        true
    }
}
