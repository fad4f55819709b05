use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::feedback::{Alert, AlertKind, Spinner};
use crate::hooks::{use_remote, FetchState};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct ConventionListPageProps {
    pub company: String,
}

#[function_component(ConventionListPage)]
pub fn convention_list_page(props: &ConventionListPageProps) -> Html {
    let conventions = use_remote(props.company.clone(), "Could not load conventions.", |company| async move {
        ApiClient::default().fetch_conventions(&company).await
    });

    let body = match &*conventions {
        FetchState::Loading => html! { <Spinner /> },
        FetchState::Failed(error) => html! { <Alert kind={AlertKind::Danger}>{ error }</Alert> },
        FetchState::Loaded(list) if list.is_empty() => html! {
            <p class="muted">{"No conventions found."}</p>
        },
        FetchState::Loaded(list) => html! {
            <div class="list-group">
                { for list.iter().map(|convention| html! {
                    <Link<Route>
                        to={Route::Videos {
                            company: props.company.clone(),
                            convention: convention.name.clone(),
                        }}
                        classes={classes!("list-group-item", "action")}
                    >
                        { &convention.name }
                    </Link<Route>>
                }) }
            </div>
        },
    };

    html! {
        <div class="convention-list">
            <Breadcrumb company={props.company.clone()} />
            <h2>{"Select a Convention"}</h2>
            { body }
        </div>
    }
}
