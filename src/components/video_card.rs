use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::clip_preview::ClipPreview;
use crate::models::Video;
use crate::pricing::format_price;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub on_add: Callback<Video>,
    pub on_purchase: Callback<Video>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    let on_add = {
        let on_add = props.on_add.clone();
        let video = video.clone();
        Callback::from(move |_| on_add.emit(video.clone()))
    };
    let on_purchase = {
        let on_purchase = props.on_purchase.clone();
        let video = video.clone();
        Callback::from(move |_| on_purchase.emit(video.clone()))
    };

    html! {
        <div class="card video-card">
            if let Some(url) = &video.video_url {
                <ClipPreview src={url.clone()} title={video.title.clone()} />
            }
            <div class="card-body">
                <h5 class="card-title">{ &video.title }</h5>
                if let Some(description) = &video.description {
                    <p class="card-text muted">{ description }</p>
                }
                <div class="card-actions">
                    if video.purchased {
                        <span class="badge badge-owned">
                            <Icon icon_id={IconId::LucideCheck} width={"14"} height={"14"} />
                            {" Purchased"}
                        </span>
                    } else {
                        <button type="button" class="btn btn-primary btn-sm" onclick={on_purchase}>
                            { format!("Purchase (${})", format_price(video.price)) }
                        </button>
                    }
                    <button type="button" class="btn btn-outline btn-sm" onclick={on_add} title="Add to Collection">
                        <Icon icon_id={IconId::LucidePlus} width={"18"} height={"18"} />
                    </button>
                </div>
            </div>
        </div>
    }
}
