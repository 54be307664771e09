use crate::config::UiConfig;
use crate::models::{NavEntries, NavIcon, NavId, SidebarAction, SidebarState};
use gloo_events::EventListener;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

const LOGO_GLYPH: &str = "🛠️";

/// Current `window.innerWidth`. Without a window the layout is treated as desktop.
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or_else(|| {
            log::warn!("Viewport width unavailable, assuming desktop layout");
            f64::INFINITY
        })
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let config = use_store_value::<UiConfig>();
    let location = use_location();
    let navigator = use_navigator();

    let state = {
        let breakpoint = config.mobile_breakpoint;
        let path = location
            .as_ref()
            .map(|location| location.path().to_string())
            .unwrap_or_default();
        use_reducer(move || {
            SidebarState::mount(Rc::new(NavEntries::standard()), &path, viewport_width(), breakpoint)
        })
    };

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    dispatcher.dispatch(SidebarAction::Resize(viewport_width()));
                })
            });
            if listener.is_none() {
                log::warn!("No window available, sidebar will not follow resizes");
            }
            move || drop(listener)
        });
    }

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(SidebarAction::Toggle))
    };

    // The transition itself happens in the reducer; the route is only read here
    // so the navigation request follows the click.
    let on_select = {
        let state = state.clone();
        Callback::from(move |id: NavId| {
            let Ok(entry) = state.entries().get(id) else {
                log::warn!("Ignoring sidebar click on unknown entry {}", id);
                return;
            };
            let route = entry.route;
            state.dispatch(SidebarAction::Select(id));
            match &navigator {
                Some(navigator) => {
                    log::debug!("Navigating to {}", route.path());
                    navigator.push(&route);
                }
                None => log::warn!("No router available to navigate to {}", route.path()),
            }
        })
    };

    let is_open = state.is_open;
    let corner_icon = if is_open {
        NavIcon::ChevronLeft
    } else {
        NavIcon::ChevronRight
    };

    html! {
        <div class="sidebar-container">
            <button aria-label="Toggle Sidebar" class="sidebar-toggle" onclick={on_toggle.clone()}>
                {NavIcon::Menu.glyph()}
            </button>

            <aside class={classes!("sidebar", if is_open { "sidebar-open" } else { "sidebar-closed" })}>
                <div class="sidebar-header">
                    <span class="sidebar-logo">{LOGO_GLYPH}</span>
                    if is_open {
                        <h1 class="sidebar-title">{&config.brand}</h1>
                    }
                </div>

                if !state.is_mobile {
                    <button aria-label="Toggle Sidebar" class="sidebar-edge-toggle" onclick={on_toggle}>
                        {corner_icon.glyph()}
                    </button>
                }

                <nav class="sidebar-nav">
                    <ul>
                        { for state.entries().iter().map(|entry| {
                            let is_active = state.active_id == entry.id;
                            let onclick = {
                                let on_select = on_select.clone();
                                let id = entry.id;
                                Callback::from(move |_: MouseEvent| on_select.emit(id))
                            };
                            html! {
                                <li key={entry.id.get()}>
                                    <button
                                        class={classes!("sidebar-link", is_active.then_some("active"))}
                                        aria-current={is_active.then_some("page")}
                                        {onclick}
                                    >
                                        <span class="sidebar-link-icon">{entry.icon.glyph()}</span>
                                        <span class={classes!("sidebar-link-text", (!is_open).then_some("hidden"))}>
                                            {entry.label}
                                        </span>
                                    </button>
                                </li>
                            }
                        })}
                    </ul>
                </nav>
            </aside>
        </div>
    }
}
