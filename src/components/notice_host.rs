use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::store::use_notices;

/// Stack of acknowledgment toasts in the corner of the viewport.
#[function_component(NoticeHost)]
pub fn notice_host() -> Html {
    let notifier = use_notices();

    html! {
        <div class="notice-host" aria-live="polite">
            { for notifier.notices().iter().map(|notice| {
                let on_close = {
                    let notifier = notifier.clone();
                    let id = notice.id;
                    Callback::from(move |_| notifier.dismiss(id))
                };
                html! {
                    <div class={notice.kind.class()} key={notice.id}>
                        <span>{ &notice.text }</span>
                        <button type="button" class="icon-btn" onclick={on_close} title="Dismiss">
                            <Icon icon_id={IconId::LucideX} width={"14"} height={"14"} />
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
