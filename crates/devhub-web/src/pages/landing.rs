use crate::config::UiConfig;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_store_value::<UiConfig>();
    let navigator = use_navigator();

    let on_open = Callback::from(move |_: MouseEvent| match &navigator {
        Some(navigator) => navigator.push(&Route::Dashboard),
        None => log::warn!("No router available to open the dashboard"),
    });

    html! {
        <div class="landing">
            <h1>{&config.brand}</h1>
            <button class="landing-open" onclick={on_open}>{"Open"}</button>
        </div>
    }
}
