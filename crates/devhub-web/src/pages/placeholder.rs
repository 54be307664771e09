use crate::routes::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlaceholderPageProps {
    pub route: Route,
}

/// Stand-in for sections that have no content yet.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderPageProps) -> Html {
    html! {
        <div class="container">
            <h2>{props.route.label()}</h2>
            <p>{format!("{} - Coming Soon", props.route.label())}</p>
        </div>
    }
}
