use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::models::Video;

#[derive(Properties, PartialEq)]
pub struct AddToCollectionProps {
    /// Video being added; the modal is hidden while this is `None`.
    pub video: Option<Video>,
    pub collection_names: Vec<String>,
    pub on_submit: Callback<(String, Video)>,
    pub on_close: Callback<()>,
}

pub struct AddToCollection {
    selected: String,
    new_name: String,
    error: Option<String>,
}

pub enum AddToCollectionMsg {
    Select(String),
    UpdateNewName(String),
    Submit,
    Close,
}

/// A typed new name wins over the selected existing collection.
pub fn resolve_target(new_name: &str, selected: &str) -> Option<String> {
    let new_name = new_name.trim();
    if !new_name.is_empty() {
        return Some(new_name.to_string());
    }
    let selected = selected.trim();
    (!selected.is_empty()).then(|| selected.to_string())
}

impl AddToCollection {
    fn reset(&mut self, props: &AddToCollectionProps) {
        self.selected = props.collection_names.first().cloned().unwrap_or_default();
        self.new_name.clear();
        self.error = None;
    }
}

impl Component for AddToCollection {
    type Message = AddToCollectionMsg;
    type Properties = AddToCollectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut this = Self {
            selected: String::new(),
            new_name: String::new(),
            error: None,
        };
        this.reset(ctx.props());
        this
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let reopened = ctx.props().video.as_ref().map(|v| &v.id) != old_props.video.as_ref().map(|v| &v.id);
        if reopened {
            self.reset(ctx.props());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AddToCollectionMsg::Select(name) => {
                self.selected = name;
                true
            }
            AddToCollectionMsg::UpdateNewName(value) => {
                self.new_name = value;
                self.error = None;
                true
            }
            AddToCollectionMsg::Submit => {
                let Some(video) = ctx.props().video.clone() else {
                    return false;
                };
                match resolve_target(&self.new_name, &self.selected) {
                    Some(name) => {
                        ctx.props().on_submit.emit((name, video));
                        ctx.props().on_close.emit(());
                    }
                    None => {
                        self.error = Some("Choose a collection or enter a new name.".to_string());
                    }
                }
                true
            }
            AddToCollectionMsg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(video) = &props.video else {
            return html! {};
        };
        let link = ctx.link();
        let has_existing = !props.collection_names.is_empty();

        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            AddToCollectionMsg::Submit
        });
        let on_backdrop = link.callback(|_: MouseEvent| AddToCollectionMsg::Close);
        let on_keydown = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Escape").then_some(AddToCollectionMsg::Close)
        });

        html! {
            <div class="modal-backdrop" onclick={on_backdrop} onkeydown={on_keydown}>
                <div class="modal" role="dialog" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="modal-header">
                        <h5>{ format!("Add \"{}\" to a Collection", video.title) }</h5>
                        <button type="button" class="icon-btn" title="Close"
                            onclick={link.callback(|_| AddToCollectionMsg::Close)}>
                            <Icon icon_id={IconId::LucideX} width={"18"} height={"18"} />
                        </button>
                    </div>
                    <form onsubmit={on_submit}>
                        <div class="modal-body">
                            if has_existing {
                                <div class="form-group">
                                    <label for="collection-select">{"Add to Existing Collection"}</label>
                                    <select
                                        id="collection-select"
                                        disabled={!self.new_name.trim().is_empty()}
                                        onchange={link.callback(|e: Event| {
                                            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                            AddToCollectionMsg::Select(select.value())
                                        })}
                                    >
                                        { for props.collection_names.iter().map(|name| html! {
                                            <option value={name.clone()} selected={*name == self.selected}>{ name }</option>
                                        }) }
                                    </select>
                                </div>
                            }
                            <div class="form-group">
                                <label for="new-collection">
                                    { if has_existing { "Or Create a New Collection" } else { "Create a New Collection" } }
                                </label>
                                <input
                                    id="new-collection"
                                    placeholder="e.g., Keynote Highlights"
                                    value={self.new_name.clone()}
                                    oninput={link.callback(|e: InputEvent| {
                                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                        AddToCollectionMsg::UpdateNewName(input.value())
                                    })}
                                    autofocus=true
                                />
                            </div>
                            if let Some(error) = &self.error {
                                <div class="alert alert-error">{ error }</div>
                            }
                        </div>
                        <div class="modal-footer">
                            <button type="submit" class="btn btn-primary">{"Add to Collection"}</button>
                            <button type="button" class="btn" onclick={link.callback(|_| AddToCollectionMsg::Close)}>
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}
