use yew_router::Routable;

use crate::models::NavIcon;

/// Every page the shell can render. The sidebar entries and the route
/// table are both derived from this enum.
#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Landing,

    #[at("/dashboard")]
    Dashboard,
    #[at("/projects")]
    Projects,
    #[at("/pipelines")]
    Pipelines,
    #[at("/repos")]
    Repos,
    #[at("/environments")]
    Environments,
    #[at("/agents")]
    Agents,
    #[at("/automations")]
    Automations,
    #[at("/security")]
    Security,
    #[at("/extensions")]
    Extensions,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes registered in the route table, in table order. `NotFound` is
    /// the explicit no-match result and is not registered.
    pub const REGISTERED: [Route; 10] = [
        Route::Landing,
        Route::Dashboard,
        Route::Projects,
        Route::Pipelines,
        Route::Repos,
        Route::Environments,
        Route::Agents,
        Route::Automations,
        Route::Security,
        Route::Extensions,
    ];

    pub fn path(&self) -> String {
        self.to_path()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Dashboard => "Dashboard",
            Route::Projects => "Projects",
            Route::Pipelines => "Pipelines",
            Route::Repos => "Repos",
            Route::Environments => "Environments",
            Route::Agents => "Agents",
            Route::Automations => "Automations",
            Route::Security => "Security",
            Route::Extensions => "Extensions",
            Route::NotFound => "Not Found",
        }
    }

    /// Sections render inside the sidebar layout; the landing and 404 pages
    /// render bare.
    pub fn has_sidebar(&self) -> bool {
        !matches!(self, Route::Landing | Route::NotFound)
    }

    /// Sidebar icon. Only routes with an icon appear in the sidebar.
    pub fn icon(&self) -> Option<NavIcon> {
        match self {
            Route::Dashboard => Some(NavIcon::Dashboard),
            Route::Projects => Some(NavIcon::Projects),
            Route::Pipelines => Some(NavIcon::Pipelines),
            Route::Repos => Some(NavIcon::Repos),
            Route::Environments => Some(NavIcon::Environments),
            Route::Agents => Some(NavIcon::Agents),
            Route::Automations => Some(NavIcon::Automations),
            Route::Security => Some(NavIcon::Security),
            Route::Extensions => Some(NavIcon::Extensions),
            Route::Landing | Route::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub route: Route,
}

pub fn route_table() -> Vec<RouteEntry> {
    Route::REGISTERED
        .iter()
        .map(|route| RouteEntry {
            path: route.path(),
            route: *route,
        })
        .collect()
}

/// Exact string match against the route table. Anything unregistered,
/// including trailing-slash variants, resolves to `Route::NotFound`.
/// The app renders from this, not from `Routable::recognize`.
pub fn resolve(path: &str) -> Route {
    match Route::REGISTERED.iter().find(|route| route.path() == path) {
        Some(route) => *route,
        None => {
            log::debug!("No route registered for {}", path);
            Route::NotFound
        }
    }
}
