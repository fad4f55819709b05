use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Clients,
    #[at("/client/:company")]
    Conventions { company: String },
    #[at("/client/:company/convention/:convention")]
    Videos { company: String, convention: String },
    #[at("/collections")]
    Collections,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn scope_key(company: &str, convention: &str) -> String {
    format!("{company}/{convention}")
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Clients => html! { <pages::clients::ClientListPage /> },
        Route::Conventions { company } => html! {
            <pages::conventions::ConventionListPage {company} />
        },
        // Keyed on the scope so a new company/convention remounts the page at page 1.
        Route::Videos { company, convention } => {
            let key = scope_key(&company, &convention);
            html! { <pages::videos::VideoListPage {key} {company} {convention} /> }
        }
        Route::Collections => html! { <pages::collections::CollectionsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_key_differs_per_convention() {
        assert_eq!(scope_key("AcmeCo", "Expo25"), "AcmeCo/Expo25");
        assert_ne!(scope_key("AcmeCo", "Expo25"), scope_key("AcmeCo", "Expo26"));
        assert_ne!(scope_key("AcmeCo", "Expo25"), scope_key("Globex", "Expo25"));
    }

    #[test]
    fn paths_round_trip() {
        let route = Route::Videos {
            company: "AcmeCo".into(),
            convention: "Expo25".into(),
        };
        assert_eq!(route.to_path(), "/client/AcmeCo/convention/Expo25");
        assert_eq!(Route::recognize("/client/AcmeCo/convention/Expo25"), Some(route));
        assert_eq!(Route::recognize("/collections"), Some(Route::Collections));
    }
}
