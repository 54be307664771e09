use crate::components::Layout;
use crate::pages::{Landing, NotFound, PlaceholderPage};
use crate::routes::{resolve, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <CurrentPage />
        </BrowserRouter>
    }
}

/// Renders whatever the route table registers for the current path.
/// `Switch<Route>` is not used because its matching also accepts a
/// trailing slash.
#[function_component(CurrentPage)]
fn current_page() -> Html {
    let location = use_location();
    let path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    render(resolve(&path))
}

fn render(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
        // Every section returns `Layout` at this same position, so Yew keeps a
        // single `Sidebar` (and its active entry) across section changes.
        // Wrapping sections differently per route would remount it on each click.
        section => {
            debug_assert!(section.has_sidebar());
            html! {
                <Layout>
                    <PlaceholderPage route={section} />
                </Layout>
            }
        }
    }
}
