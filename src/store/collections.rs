use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::debug_log;
use crate::models::Video;

/// A user-named bucket of videos picked for purchase. Lives for the session only.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection {
    pub name: String,
    pub videos: Vec<Video>,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v.id == video_id)
    }

    pub fn created_label(&self) -> String {
        format!("Created {}", self.created_at.format("%Y-%m-%d %H:%M UTC"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Created,
    Appended,
    AlreadyPresent,
}

impl AddOutcome {
    /// False when the add left the store untouched.
    pub fn changed(&self) -> bool {
        *self != AddOutcome::AlreadyPresent
    }

    pub fn message(&self, video_title: &str, collection_name: &str) -> String {
        match self {
            AddOutcome::Created => {
                format!("Created collection \"{collection_name}\" with \"{video_title}\"!")
            }
            AddOutcome::Appended => {
                format!("Video \"{video_title}\" added to collection \"{collection_name}\"!")
            }
            AddOutcome::AlreadyPresent => {
                format!("Video \"{video_title}\" is already in collection \"{collection_name}\".")
            }
        }
    }
}

/// All collections, in creation order. Names are unique; within a collection video ids are unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collections {
    items: Vec<Collection>,
}

impl Collections {
    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.items.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.items.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|c| c.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_clips(&self) -> usize {
        self.items.iter().map(|c| c.videos.len()).sum()
    }

    /// Create-or-append. Adding a video id the collection already holds is a no-op.
    pub fn add_video(&mut self, name: &str, video: Video, now: DateTime<Utc>) -> AddOutcome {
        match self.items.iter_mut().find(|c| c.name == name) {
            None => {
                self.items.push(Collection {
                    name: name.to_string(),
                    videos: vec![video],
                    created_at: now,
                });
                AddOutcome::Created
            }
            Some(c) if c.contains(&video.id) => AddOutcome::AlreadyPresent,
            Some(c) => {
                c.videos.push(video);
                AddOutcome::Appended
            }
        }
    }

    /// Drops `video_id` from the named collection. The collection itself stays, even if empty.
    pub fn remove_video(&mut self, name: &str, video_id: &str) -> bool {
        let Some(c) = self.items.iter_mut().find(|c| c.name == name) else {
            return false;
        };
        let before = c.videos.len();
        c.videos.retain(|v| v.id != video_id);
        c.videos.len() != before
    }
}

pub enum CollectionsAction {
    Add { name: String, video: Video, at: DateTime<Utc> },
    RemoveVideo { name: String, video_id: String },
}

impl Reducible for Collections {
    type Action = CollectionsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            CollectionsAction::Add { name, video, at } => next.add_video(&name, video, at).changed(),
            CollectionsAction::RemoveVideo { name, video_id } => next.remove_video(&name, &video_id),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Shared handle to the session's collections, handed out through context.
///
/// `pending` mirrors every dispatched action synchronously, so outcomes
/// reported by [`CollectionsHandle::add`] account for earlier adds that
/// have not rendered yet.
#[derive(Clone, PartialEq)]
pub struct CollectionsHandle {
    inner: UseReducerHandle<Collections>,
    pending: Rc<RefCell<Collections>>,
}

impl Deref for CollectionsHandle {
    type Target = Collections;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl CollectionsHandle {
    pub fn add(&self, name: &str, video: Video) -> AddOutcome {
        let at = Utc::now();
        let outcome = self.pending.borrow_mut().add_video(name, video.clone(), at);
        debug_log!("Adding video \"{}\" to collection \"{name}\": {outcome:?}", video.title);
        self.inner.dispatch(CollectionsAction::Add {
            name: name.to_string(),
            video,
            at,
        });
        outcome
    }

    pub fn remove(&self, name: &str, video_id: &str) {
        debug_log!("Removing video {video_id} from collection \"{name}\"");
        self.pending.borrow_mut().remove_video(name, video_id);
        self.inner.dispatch(CollectionsAction::RemoveVideo {
            name: name.to_string(),
            video_id: video_id.to_string(),
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct CollectionsProviderProps {
    pub children: Html,
}

#[function_component(CollectionsProvider)]
pub fn collections_provider(props: &CollectionsProviderProps) -> Html {
    let inner = use_reducer(Collections::default);
    let pending = use_mut_ref(Collections::default);
    let handle = CollectionsHandle { inner, pending };

    html! {
        <ContextProvider<CollectionsHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<CollectionsHandle>>
    }
}

#[hook]
pub fn use_collections() -> CollectionsHandle {
    use_context::<CollectionsHandle>().expect("use_collections called outside CollectionsProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            title: format!("Clip {id}"),
            description: None,
            price: Some(9.99),
            video_url: None,
            purchased: false,
        }
    }

    fn ids(c: &Collection) -> Vec<&str> {
        c.videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn new_name_creates_one_collection() {
        let mut store = Collections::default();
        let outcome = store.add_video("Keynotes", video("a"), Utc::now());
        assert_eq!(outcome, AddOutcome::Created);
        assert_eq!(store.len(), 1);
        assert_eq!(ids(store.get("Keynotes").unwrap()), ["a"]);
    }

    #[test]
    fn same_video_twice_is_kept_once() {
        let mut store = Collections::default();
        store.add_video("Keynotes", video("a"), Utc::now());
        let outcome = store.add_video("Keynotes", video("a"), Utc::now());
        assert_eq!(outcome, AddOutcome::AlreadyPresent);
        assert_eq!(ids(store.get("Keynotes").unwrap()), ["a"]);
    }

    #[test]
    fn distinct_videos_accumulate_in_order() {
        let mut store = Collections::default();
        for id in ["c", "a", "b"] {
            store.add_video("Panels", video(id), Utc::now());
        }
        assert_eq!(ids(store.get("Panels").unwrap()), ["c", "a", "b"]);
        assert_eq!(store.total_clips(), 3);
    }

    #[test]
    fn same_video_may_live_in_several_collections() {
        let mut store = Collections::default();
        store.add_video("One", video("a"), Utc::now());
        store.add_video("Two", video("a"), Utc::now());
        assert_eq!(store.names(), ["One", "Two"]);
        assert_eq!(store.total_clips(), 2);
    }

    #[test]
    fn second_video_appends() {
        let mut store = Collections::default();
        store.add_video("X", video("a"), Utc::now());
        assert_eq!(store.add_video("X", video("b"), Utc::now()), AddOutcome::Appended);
    }

    #[test]
    fn remove_filters_by_id_and_keeps_collection() {
        let mut store = Collections::default();
        store.add_video("X", video("a"), Utc::now());
        store.add_video("X", video("b"), Utc::now());
        assert!(store.remove_video("X", "a"));
        assert_eq!(ids(store.get("X").unwrap()), ["b"]);
        assert!(store.remove_video("X", "b"));
        assert!(store.get("X").unwrap().videos.is_empty());
        assert_eq!(store.len(), 1);
        assert!(!store.remove_video("X", "b"));
        assert!(!store.remove_video("missing", "b"));
    }

    fn add_action(name: &str, id: &str, at: DateTime<Utc>) -> CollectionsAction {
        CollectionsAction::Add { name: name.into(), video: video(id), at }
    }

    #[test]
    fn reducer_noop_keeps_same_rc() {
        let at = Utc::now();
        let store = Rc::new(Collections::default()).reduce(add_action("X", "a", at));
        let again = store.clone().reduce(add_action("X", "a", at));
        assert!(Rc::ptr_eq(&store, &again));
    }

    #[test]
    fn back_to_back_adds_before_render_report_each_outcome() {
        // Both clicks land before the provider re-renders, so the rendered
        // store is still empty while the pending copy has seen the first add.
        let rendered = Rc::new(Collections::default());
        let pending = RefCell::new(Collections::default());
        let at = Utc::now();

        let first = pending.borrow_mut().add_video("X", video("a"), at);
        let second = pending.borrow_mut().add_video("X", video("a"), at);
        assert_eq!(first, AddOutcome::Created);
        assert_eq!(second, AddOutcome::AlreadyPresent);
        assert!(rendered.is_empty());

        let reduced = rendered.reduce(add_action("X", "a", at)).reduce(add_action("X", "a", at));
        assert_eq!(*reduced, *pending.borrow());
        assert_eq!(ids(reduced.get("X").unwrap()), ["a"]);
    }

    #[test]
    fn only_already_present_leaves_store_unchanged() {
        assert!(AddOutcome::Created.changed());
        assert!(AddOutcome::Appended.changed());
        assert!(!AddOutcome::AlreadyPresent.changed());
    }

    #[test]
    fn created_label_names_the_zone() {
        use chrono::TimeZone;
        let mut store = Collections::default();
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 5, 0).unwrap();
        store.add_video("X", video("a"), at);
        assert_eq!(store.get("X").unwrap().created_label(), "Created 2025-03-14 09:05 UTC");
    }

    #[test]
    fn acknowledgment_text_per_outcome() {
        assert_eq!(
            AddOutcome::Appended.message("Intro", "Keynotes"),
            "Video \"Intro\" added to collection \"Keynotes\"!"
        );
        assert!(AddOutcome::AlreadyPresent.message("Intro", "Keynotes").contains("already in"));
        assert!(AddOutcome::Created.message("Intro", "Keynotes").starts_with("Created collection"));
    }
}
