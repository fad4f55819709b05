use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::clip_preview::ClipPreview;
use crate::components::feedback::{Alert, AlertKind};
use crate::pricing::{bundle_price, format_price};
use crate::store::{use_collections, use_notices, Collection};

#[function_component(CollectionsPage)]
pub fn collections_page() -> Html {
    let collections = use_collections();
    let notifier = use_notices();

    let on_purchase = {
        let notifier = notifier.clone();
        Callback::from(move |collection: Collection| {
            let clip_count = collection.videos.len();
            notifier.info(format!(
                "Purchasing collection \"{}\" with {clip_count} clips for ${}! (Checkout is not available yet)",
                collection.name,
                format_price(Some(bundle_price(clip_count)))
            ));
        })
    };

    let on_remove = {
        let collections = collections.clone();
        let notifier = notifier.clone();
        Callback::from(move |(name, video_id, title): (String, String, String)| {
            collections.remove(&name, &video_id);
            notifier.warning(format!("Removed \"{title}\" from collection \"{name}\"."));
        })
    };

    html! {
        <div class="collections-page">
            <h1>{"My Collections"}</h1>
            <hr />
            if collections.is_empty() {
                <Alert kind={AlertKind::Info}>
                    {"You haven't created any collections yet. Go to a client's video page and click the '+' button on a clip to start a new collection."}
                </Alert>
            } else {
                { for collections.iter().map(|collection| {
                    let clip_count = collection.videos.len();
                    let purchase = {
                        let on_purchase = on_purchase.clone();
                        let collection = collection.clone();
                        Callback::from(move |_| on_purchase.emit(collection.clone()))
                    };

                    html! {
                        <div class="card collection-card" key={collection.name.clone()}>
                            <div class="collection-header">
                                <div>
                                    <h3>{ &collection.name }</h3>
                                    <p>{ format!("{clip_count} clip(s) in this collection.") }</p>
                                    <p class="muted small">
                                        { collection.created_label() }
                                    </p>
                                </div>
                                <button type="button" class="btn btn-success" onclick={purchase} disabled={clip_count == 0}>
                                    { format!("Purchase Collection (${})", format_price(Some(bundle_price(clip_count)))) }
                                </button>
                            </div>
                            <hr />
                            <div class="thumb-grid">
                                { for collection.videos.iter().map(|video| {
                                    let remove = {
                                        let on_remove = on_remove.clone();
                                        let args = (collection.name.clone(), video.id.clone(), video.title.clone());
                                        Callback::from(move |_| on_remove.emit(args.clone()))
                                    };
                                    html! {
                                        <div class="thumb" key={video.id.clone()}>
                                            if let Some(url) = &video.video_url {
                                                <ClipPreview src={url.clone()} title={video.title.clone()} compact=true />
                                            } else {
                                                <div class="no-preview">
                                                    <Icon icon_id={IconId::LucideFileVideo} width={"24"} height={"24"} />
                                                    {"No Preview"}
                                                </div>
                                            }
                                            <div class="thumb-footer">
                                                <small class="muted truncate">{ &video.title }</small>
                                                <button type="button" class="icon-btn" onclick={remove} title="Remove from collection">
                                                    <Icon icon_id={IconId::LucideTrash2} width={"14"} height={"14"} />
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    }
                }) }
            }
        </div>
    }
}
