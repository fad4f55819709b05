use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="container not-found">
            <h1>{"Page not found"}</h1>
            <p>
                {"Nothing lives at this address. "}
                <Link<Route> to={Route::Clients}>{"Back to clients"}</Link<Route>>
            </p>
        </div>
    }
}
