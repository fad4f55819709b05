use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::feedback::{Alert, AlertKind, Spinner};
use crate::hooks::{use_remote, FetchState};
use crate::routes::Route;

#[function_component(ClientListPage)]
pub fn client_list_page() -> Html {
    let companies = use_remote((), "Could not load clients.", |_| async move {
        ApiClient::default().fetch_clients().await
    });

    match &*companies {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(error) => html! { <Alert kind={AlertKind::Danger}>{ error }</Alert> },
        FetchState::Loaded(companies) => html! {
            <div class="client-list">
                <h2>{"Select a Client"}</h2>
                if companies.is_empty() {
                    <p class="muted">{"No clients found."}</p>
                } else {
                    <div class="list-group">
                        { for companies.iter().map(|company| html! {
                            <Link<Route>
                                to={Route::Conventions { company: company.name.clone() }}
                                classes={classes!("list-group-item", "action")}
                            >
                                { &company.name }
                            </Link<Route>>
                        }) }
                    </div>
                }
            </div>
        },
    }
}
