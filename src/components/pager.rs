use yew::prelude::*;

use crate::hooks::PageCursor;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub cursor: PageCursor,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

/// Previous/next bar. Renders nothing for a single page.
#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let Some(total_pages) = props.cursor.total_pages().filter(|n| *n > 1) else {
        return html! {};
    };

    let on_prev = props.on_prev.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());

    html! {
        <div class="pager">
            <button type="button" class="btn" onclick={on_prev} disabled={!props.cursor.can_prev()}>
                {"← Previous Page"}
            </button>
            <span>
                {"Page "}<strong>{ props.cursor.current_page }</strong>
                {" of "}<strong>{ total_pages }</strong>
            </span>
            <button type="button" class="btn" onclick={on_next} disabled={!props.cursor.can_next()}>
                {"Next Page →"}
            </button>
        </div>
    }
}
