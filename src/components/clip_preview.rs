use web_sys::HtmlVideoElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq, Clone)]
pub struct ClipPreviewProps {
    /// Playable URL for the clip, usually a short-lived signed link.
    pub src: String,
    pub title: String,
    /// Thumbnail mode: no control bar, click toggles playback.
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(ClipPreview)]
pub fn clip_preview(props: &ClipPreviewProps) -> Html {
    let video_ref = use_node_ref();

    let is_playing = use_state(|| false);
    let is_muted = use_state(|| true);
    let duration = use_state(|| 0.0f64);
    let current_time = use_state(|| 0.0f64);
    let error_text = use_state(|| None::<String>);

    let on_toggle = {
        let video_ref = video_ref.clone();
        Callback::from(move |_| {
            if let Some(v) = video_ref.cast::<HtmlVideoElement>() {
                if v.paused() {
                    let _ = v.play();
                } else {
                    v.pause().ok();
                }
            }
        })
    };

    let on_time_update = {
        let video_ref = video_ref.clone();
        let current_time = current_time.clone();
        Callback::from(move |_| {
            if let Some(v) = video_ref.cast::<HtmlVideoElement>() {
                current_time.set(v.current_time());
            }
        })
    };

    // Seek a little past zero so the card shows a frame instead of black.
    let on_loaded_metadata = {
        let video_ref = video_ref.clone();
        let duration = duration.clone();
        Callback::from(move |_| {
            if let Some(v) = video_ref.cast::<HtmlVideoElement>() {
                duration.set(v.duration());
                if v.current_time() == 0.0 {
                    v.set_current_time(0.1);
                }
            }
        })
    };

    let on_play = {
        let is_playing = is_playing.clone();
        Callback::from(move |_| is_playing.set(true))
    };
    let on_pause = {
        let is_playing = is_playing.clone();
        Callback::from(move |_| is_playing.set(false))
    };

    let on_error = {
        let error_text = error_text.clone();
        let title = props.title.clone();
        Callback::from(move |_| {
            gloo::console::warn!(format!("Preview for \"{title}\" failed to load"));
            error_text.set(Some("Preview unavailable".into()));
        })
    };

    let on_toggle_mute = {
        let video_ref = video_ref.clone();
        let is_muted = is_muted.clone();
        Callback::from(move |_| {
            if let Some(v) = video_ref.cast::<HtmlVideoElement>() {
                let muted = !v.muted();
                v.set_muted(muted);
                is_muted.set(muted);
            }
        })
    };

    let play_icon = if *is_playing { IconId::LucidePause } else { IconId::LucidePlay };
    let vol_icon = if *is_muted { IconId::LucideVolumeX } else { IconId::LucideVolume2 };
    let timestamp = format!("{} / {}", format_clip_time(*current_time), format_clip_time(*duration));

    html! {
        <div class={classes!("clip-preview", props.compact.then_some("compact"))}>
            <div class="video-wrap">
                <video
                    ref={video_ref.clone()}
                    class="video"
                    src={props.src.clone()}
                    title={props.title.clone()}
                    preload="metadata"
                    muted={*is_muted}
                    playsinline=true
                    ontimeupdate={on_time_update}
                    onloadedmetadata={on_loaded_metadata}
                    onplay={on_play}
                    onpause={on_pause}
                    onerror={on_error}
                    onclick={on_toggle.clone()}
                />
                if let Some(msg) = &*error_text {
                    <div class="error-overlay">{ msg }</div>
                }
            </div>
            if !props.compact {
                <div class="controls control-row">
                    <button class="ctrl-btn" type="button" onclick={on_toggle} title="Play/Pause">
                        <Icon icon_id={play_icon} width={"18"} height={"18"} />
                    </button>
                    <span class="timestamp">{ timestamp }</span>
                    <button class="ctrl-btn" type="button" onclick={on_toggle_mute} title="Mute/Unmute">
                        <Icon icon_id={vol_icon} width={"18"} height={"18"} />
                    </button>
                </div>
            }
        </div>
    }
}

/// `mm:ss`, or `00:00` while the duration is still unknown.
pub fn format_clip_time(seconds: f64) -> String {
    if seconds.is_finite() && seconds >= 0.0 {
        let total = seconds.floor() as u32;
        format!("{:02}:{:02}", total / 60, total % 60)
    } else {
        "00:00".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::format_clip_time;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clip_time(0.0), "00:00");
        assert_eq!(format_clip_time(75.9), "01:15");
        assert_eq!(format_clip_time(f64::NAN), "00:00");
        assert_eq!(format_clip_time(-1.0), "00:00");
    }
}
