use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_else(default_label)]
    pub label: String,
}

fn default_label() -> String {
    "Loading...".to_string()
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="spinner-wrap">
            <div class="spinner" role="status"></div>
            <span class="spinner-label">{ props.label.clone() }</span>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum AlertKind {
    Danger,
    Info,
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub children: Html,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let class = match props.kind {
        AlertKind::Danger => "alert alert-error",
        AlertKind::Info => "alert alert-info",
    };
    html! {
        <div {class} role="alert">{ props.children.clone() }</div>
    }
}
