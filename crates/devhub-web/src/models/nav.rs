use std::fmt;

use crate::error::NavError;
use crate::routes::Route;

/// 1-based, dense identifier of a sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NavId(u32);

impl NavId {
    pub const FIRST: NavId = NavId(1);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NavId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Projects,
    Pipelines,
    Repos,
    Environments,
    Agents,
    Automations,
    Security,
    Extensions,
    Menu,
    ChevronLeft,
    ChevronRight,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => "📊",
            NavIcon::Projects => "📁",
            NavIcon::Pipelines => "📝",
            NavIcon::Repos => "🗂️",
            NavIcon::Environments => "📦",
            NavIcon::Agents => "🕵️",
            NavIcon::Automations => "🔀",
            NavIcon::Security => "🛡️",
            NavIcon::Extensions => "🧩",
            NavIcon::Menu => "☰",
            NavIcon::ChevronLeft => "‹",
            NavIcon::ChevronRight => "›",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: NavId,
    pub label: &'static str,
    pub icon: NavIcon,
    pub route: Route,
}

impl NavEntry {
    pub fn path(&self) -> String {
        self.route.path()
    }
}

/// The closed list of sidebar entries, one per route that has an icon,
/// numbered from 1 in route declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntries {
    entries: Vec<NavEntry>,
}

impl NavEntries {
    pub fn standard() -> Self {
        let entries = Route::REGISTERED
            .iter()
            .filter_map(|route| route.icon().map(|icon| (*route, icon)))
            .zip(1..)
            .map(|((route, icon), id)| NavEntry {
                id: NavId(id),
                label: route.label(),
                icon,
                route,
            })
            .collect();
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavEntry> {
        self.entries.iter()
    }

    pub fn first_id(&self) -> NavId {
        self.entries.first().map(|entry| entry.id).unwrap_or(NavId::FIRST)
    }

    pub fn get(&self, id: NavId) -> Result<&NavEntry, NavError> {
        id.get()
            .checked_sub(1)
            .and_then(|index| self.entries.get(index as usize))
            .ok_or(NavError::UnknownEntry(id))
    }

    pub fn find_by_path(&self, path: &str) -> Option<&NavEntry> {
        self.entries.iter().find(|entry| entry.path() == path)
    }
}
