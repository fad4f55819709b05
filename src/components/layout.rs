use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::routes::Route;
use crate::store::use_collections;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Fixed top navbar shared by every page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let is_open = use_state(|| false);
    let collections = use_collections();

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(!*is_open))
    };

    let clip_count = collections.total_clips();

    html! {
        <div class="app">
            <nav class="navbar navbar-dark fixed-top">
                <div class="navbar-inner">
                    <Link<Route> to={Route::Clients} classes={classes!("navbar-brand")}>
                        <Icon icon_id={IconId::LucideFilm} width={"22"} height={"22"} />
                        {" Druid Video Portal"}
                    </Link<Route>>
                    <button class="navbar-toggler" type="button" title="Menu" onclick={on_toggle}>
                        <Icon icon_id={IconId::LucideMoreHorizontal} width={"22"} height={"22"} />
                    </button>
                    <div class={classes!("navbar-collapse", (*is_open).then_some("open"))}>
                        <Link<Route> to={Route::Collections} classes={classes!("nav-link")}>
                            <Icon icon_id={IconId::LucideLibrary} width={"18"} height={"18"} />
                            {" My Collections"}
                            if clip_count > 0 {
                                <span class="badge">{clip_count}</span>
                            }
                        </Link<Route>>
                    </div>
                </div>
            </nav>
            <main class="container page-body">
                { props.children.clone() }
            </main>
        </div>
    }
}
