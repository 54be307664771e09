use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();
    let path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <div class="container">
            <h2>{format!("404 - {}", Route::NotFound.label())}</h2>
            <p>{format!("Nothing is registered at {}", path)}</p>
            <Link<Route> to={Route::Landing}>{format!("Back to {}", Route::Landing.label())}</Link<Route>>
        </div>
    }
}
