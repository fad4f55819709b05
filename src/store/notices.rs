use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Info => "notice notice-info",
            NoticeKind::Warning => "notice notice-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub items: Vec<Notice>,
}

pub enum NoticeAction {
    Push(Notice),
    Dismiss(u64),
}

impl Reducible for Notices {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NoticeAction::Push(notice) => {
                let mut next = (*self).clone();
                next.items.push(notice);
                Rc::new(next)
            }
            NoticeAction::Dismiss(id) => {
                if !self.items.iter().any(|n| n.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.items.retain(|n| n.id != id);
                Rc::new(next)
            }
        }
    }
}

/// Pushes notices that clear themselves after a few seconds.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    inner: UseReducerHandle<Notices>,
    next_id: Rc<RefCell<u64>>,
}

impl Notifier {
    pub fn notices(&self) -> &[Notice] {
        &self.inner.items
    }

    pub fn push(&self, kind: NoticeKind, text: impl Into<String>) {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            *next_id
        };
        self.inner.dispatch(NoticeAction::Push(Notice { id, kind, text: text.into() }));

        let dispatcher = self.inner.dispatcher();
        Timeout::new(AUTO_DISMISS_MS, move || {
            dispatcher.dispatch(NoticeAction::Dismiss(id));
        })
        .forget();
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(NoticeKind::Warning, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.inner.dispatch(NoticeAction::Dismiss(id));
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticesProviderProps {
    pub children: Html,
}

#[function_component(NoticesProvider)]
pub fn notices_provider(props: &NoticesProviderProps) -> Html {
    let inner = use_reducer(Notices::default);
    let next_id = use_mut_ref(|| 0u64);
    let notifier = Notifier { inner, next_id };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { props.children.clone() }
        </ContextProvider<Notifier>>
    }
}

#[hook]
pub fn use_notices() -> Notifier {
    use_context::<Notifier>().expect("use_notices called outside NoticesProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(n: Rc<Notices>, id: u64, text: &str) -> Rc<Notices> {
        n.reduce(NoticeAction::Push(Notice { id, kind: NoticeKind::Info, text: text.into() }))
    }

    #[test]
    fn notices_keep_push_order() {
        let n = push(push(Rc::new(Notices::default()), 1, "a"), 2, "b");
        assert_eq!(n.items.iter().map(|i| i.id).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn repeated_text_is_not_collapsed() {
        let n = push(push(Rc::new(Notices::default()), 1, "same"), 2, "same");
        assert_eq!(n.items.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_that_notice() {
        let n = push(push(Rc::new(Notices::default()), 1, "a"), 2, "b");
        let n = n.reduce(NoticeAction::Dismiss(1));
        assert_eq!(n.items.len(), 1);
        assert_eq!(n.items[0].text, "b");
    }

    #[test]
    fn dismissing_unknown_id_is_noop() {
        let n = push(Rc::new(Notices::default()), 1, "a");
        let same = n.clone().reduce(NoticeAction::Dismiss(42));
        assert!(Rc::ptr_eq(&n, &same));
    }
}
