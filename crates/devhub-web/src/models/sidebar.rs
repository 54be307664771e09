use std::rc::Rc;

use yew::functional::Reducible;

use crate::config::Breakpoint;
use crate::error::NavError;
use crate::models::{NavEntries, NavId};
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    pub is_open: bool,
    pub is_mobile: bool,
    pub active_id: NavId,
    breakpoint: Breakpoint,
    entries: Rc<NavEntries>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarAction {
    Resize(f64),
    Toggle,
    Select(NavId),
}

impl SidebarState {
    pub fn new(entries: Rc<NavEntries>, active_id: NavId, breakpoint: Breakpoint) -> Self {
        Self {
            is_open: true,
            is_mobile: false,
            active_id,
            breakpoint,
            entries,
        }
    }

    /// State of a freshly mounted sidebar. The active entry is taken from
    /// the location once here and is not re-derived afterwards.
    pub fn mount(
        entries: Rc<NavEntries>,
        location_path: &str,
        viewport_width: f64,
        breakpoint: Breakpoint,
    ) -> Self {
        let active_id = entries
            .find_by_path(location_path)
            .map(|entry| entry.id)
            .unwrap_or_else(|| entries.first_id());

        let mut state = Self::new(entries, active_id, breakpoint);
        state.on_resize(viewport_width);
        state
    }

    pub fn entries(&self) -> &NavEntries {
        &self.entries
    }

    /// Overrides any manual toggle, whether or not the breakpoint was crossed.
    pub fn on_resize(&mut self, viewport_width: f64) {
        self.is_mobile = self.breakpoint.is_mobile(viewport_width);
        self.is_open = !self.is_mobile;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Marks the entry active, collapses on mobile and returns the route to
    /// navigate to. Unknown ids leave the state untouched.
    pub fn on_entry_click(&mut self, id: NavId) -> Result<Route, NavError> {
        let route = self.entries.get(id)?.route;
        self.active_id = id;
        if self.is_mobile {
            self.is_open = false;
        }
        Ok(route)
    }
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SidebarAction::Resize(width) => next.on_resize(width),
            SidebarAction::Toggle => next.toggle(),
            SidebarAction::Select(id) => {
                if let Err(e) = next.on_entry_click(id) {
                    log::warn!("Ignoring sidebar click: {}", e);
                    return self;
                }
            }
        }
        log::debug!(
            "Sidebar {:?} -> open={} mobile={} active={}",
            action,
            next.is_open,
            next.is_mobile,
            next.active_id
        );
        next.into()
    }
}
