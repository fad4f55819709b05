use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    pub company: String,
    #[prop_or_default]
    pub convention: Option<String>,
}

/// Clients › company › convention. The last crumb is plain text.
#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    let separator = html! {
        <Icon icon_id={IconId::LucideChevronRight} width={"14"} height={"14"} />
    };

    html! {
        <nav class="breadcrumb" aria-label="breadcrumb">
            <Link<Route> to={Route::Clients}>{"Clients"}</Link<Route>>
            { separator.clone() }
            if let Some(convention) = &props.convention {
                <Link<Route> to={Route::Conventions { company: props.company.clone() }}>
                    { props.company.clone() }
                </Link<Route>>
                { separator }
                <span class="crumb-active">{ convention.clone() }</span>
            } else {
                <span class="crumb-active">{ props.company.clone() }</span>
            }
        </nav>
    }
}
