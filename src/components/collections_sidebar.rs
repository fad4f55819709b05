use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::store::use_collections;

#[function_component(CollectionsSidebar)]
pub fn collections_sidebar() -> Html {
    let collections = use_collections();

    html! {
        <aside class="collections-sidebar">
            <h4>{"My Collections"}</h4>
            <hr />
            if collections.is_empty() {
                <p class="muted small">{"Click the '+' on a video to start a new collection."}</p>
            } else {
                <ul class="list-group flush">
                    { for collections.iter().map(|c| html! {
                        <li class="list-group-item" key={c.name.clone()}>
                            <span>{ &c.name }</span>
                            <span class="badge pill">{ c.videos.len() }</span>
                        </li>
                    }) }
                </ul>
                <Link<Route> to={Route::Collections} classes={classes!("btn", "btn-success", "btn-block")}>
                    {"View & Purchase Collections"}
                </Link<Route>>
            }
        </aside>
    }
}
