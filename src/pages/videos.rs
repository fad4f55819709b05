use yew::prelude::*;

use crate::api::{ApiClient, VideoQuery};
use crate::components::add_to_collection::AddToCollection;
use crate::components::breadcrumb::Breadcrumb;
use crate::components::collections_sidebar::CollectionsSidebar;
use crate::components::feedback::{Alert, AlertKind, Spinner};
use crate::components::pager::Pager;
use crate::components::video_card::VideoCard;
use crate::config::config;
use crate::hooks::{use_remote, FetchState, PageAction, PageCursor};
use crate::models::Video;
use crate::pricing::{bundle_price, format_price};
use crate::store::{use_collections, use_notices};

#[derive(Properties, PartialEq)]
pub struct VideoListPageProps {
    pub company: String,
    pub convention: String,
}

#[function_component(VideoListPage)]
pub fn video_list_page(props: &VideoListPageProps) -> Html {
    let collections = use_collections();
    let notifier = use_notices();
    let cursor = use_reducer(PageCursor::default);
    let video_to_add = use_state(|| None::<Video>);

    let query = VideoQuery {
        company: props.company.clone(),
        convention: props.convention.clone(),
        page: cursor.current_page,
        per_page: config().per_page,
    };
    let page = use_remote(query, "Failed to fetch videos", |query| async move {
        ApiClient::default().fetch_videos(&query).await
    });

    // Feed the server's page counts back into the cursor.
    {
        let cursor = cursor.dispatcher();
        let info = page.loaded().map(|p| p.pagination);
        use_effect_with(info, move |info| {
            if let Some(info) = info {
                cursor.dispatch(PageAction::Loaded(*info));
            }
            || ()
        });
    }

    let on_prev = {
        let cursor = cursor.dispatcher();
        Callback::from(move |_| cursor.dispatch(PageAction::Prev))
    };
    let on_next = {
        let cursor = cursor.dispatcher();
        Callback::from(move |_| cursor.dispatch(PageAction::Next))
    };

    let on_open_modal = {
        let video_to_add = video_to_add.clone();
        Callback::from(move |video: Video| video_to_add.set(Some(video)))
    };
    let on_close_modal = {
        let video_to_add = video_to_add.clone();
        Callback::from(move |_| video_to_add.set(None))
    };
    let on_add = {
        let collections = collections.clone();
        let notifier = notifier.clone();
        Callback::from(move |(name, video): (String, Video)| {
            let title = video.title.clone();
            let outcome = collections.add(&name, video);
            let text = outcome.message(&title, &name);
            if outcome.changed() {
                notifier.success(text);
            } else {
                notifier.info(text);
            }
        })
    };

    let on_purchase = {
        let notifier = notifier.clone();
        Callback::from(move |video: Video| {
            notifier.info(format!(
                "Purchasing \"{}\" for ${}! (Checkout is not available yet)",
                video.title,
                format_price(video.price)
            ));
        })
    };

    let content = match &*page {
        FetchState::Loading => html! { <Spinner label="Loading Videos..." /> },
        FetchState::Failed(error) => html! {
            <Alert kind={AlertKind::Danger}>{ format!("Error: {error}") }</Alert>
        },
        FetchState::Loaded(page) => {
            let total_clips = page.pagination.total_items as usize;
            let on_buy_drive = {
                let notifier = notifier.clone();
                let convention = props.convention.clone();
                Callback::from(move |_| {
                    notifier.info(format!(
                        "Purchasing all {total_clips} clips from {convention} for ${}! (Checkout is not available yet)",
                        format_price(Some(bundle_price(total_clips)))
                    ));
                })
            };

            html! {
                <>
                    if total_clips > 0 {
                        <div class="card bundle-card">
                            <div>
                                <h3>{ format!("Total Clips Available: {total_clips}") }</h3>
                                <p>{"Purchase all clips from this convention in one bundle."}</p>
                            </div>
                            <button type="button" class="btn btn-success btn-lg" onclick={on_buy_drive}>
                                { format!("Buy Full Drive - ${}", format_price(Some(bundle_price(total_clips)))) }
                            </button>
                        </div>
                    }
                    <Pager cursor={(*cursor).clone()} on_prev={on_prev} on_next={on_next} />
                    if page.videos.is_empty() {
                        <p class="muted">{"No clips have been published for this convention yet."}</p>
                    } else {
                        <div class="video-grid">
                            { for page.videos.iter().map(|video| html! {
                                <VideoCard
                                    key={video.id.clone()}
                                    video={video.clone()}
                                    on_add={on_open_modal.clone()}
                                    on_purchase={on_purchase.clone()}
                                />
                            }) }
                        </div>
                    }
                </>
            }
        }
    };

    html! {
        <div class="video-list-page">
            <Breadcrumb company={props.company.clone()} convention={Some(props.convention.clone())} />
            <div class="video-layout">
                <section class="video-main">
                    <h2>{"Video Clips"}</h2>
                    { content }
                </section>
                <CollectionsSidebar />
            </div>
            <AddToCollection
                video={(*video_to_add).clone()}
                collection_names={collections.names()}
                on_submit={on_add}
                on_close={on_close_modal}
            />
        </div>
    }
}
