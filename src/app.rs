use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::components::notice_host::NoticeHost;
use crate::routes::{switch, Route};
use crate::store::{CollectionsProvider, NoticesProvider};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <NoticesProvider>
                <CollectionsProvider>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                    <NoticeHost />
                </CollectionsProvider>
            </NoticesProvider>
        </BrowserRouter>
    }
}
