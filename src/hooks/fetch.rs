use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::debug_log;
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(v) => Some(v),
            _ => None,
        }
    }
}

/// Hands out a generation token per request so that only the newest
/// response for a view is applied, whatever order they arrive in.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Runs `fetch` on mount and every time `deps` changes.
///
/// The state goes back to `Loading` on each change. Failures are reduced to
/// one display string via [`ApiError::user_message`] with `fallback`.
#[hook]
pub fn use_remote<T, D, F, Fut>(deps: D, fallback: &'static str, fetch: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let tracker = use_mut_ref(RequestTracker::default);

    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            state.set(FetchState::Loading);
            let token = tracker.borrow_mut().issue();
            let request = fetch(deps.clone());
            wasm_bindgen_futures::spawn_local(settle(request, token, tracker, state, fallback));
            || ()
        });
    }

    state
}

async fn settle<T, Fut>(
    request: Fut,
    token: u64,
    tracker: Rc<RefCell<RequestTracker>>,
    state: UseStateHandle<FetchState<T>>,
    fallback: &'static str,
) where
    Fut: Future<Output = Result<T, ApiError>>,
{
    let result = request.await;
    if let Err(e) = &result {
        gloo::console::error!(format!("Request #{token} failed: {e}"));
    }
    match resolve(&tracker.borrow(), token, result, fallback) {
        Some(next) => state.set(next),
        None => debug_log!("Discarding stale response for request #{token}"),
    }
}

/// State to apply for a settled request, or `None` when a newer request has
/// been issued since.
fn resolve<T>(tracker: &RequestTracker, token: u64, result: Result<T, ApiError>, fallback: &str) -> Option<FetchState<T>> {
    if !tracker.is_current(token) {
        return None;
    }
    Some(match result {
        Ok(value) => FetchState::Loaded(value),
        Err(e) => FetchState::Failed(e.user_message(fallback)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn late_arrival_of_older_request_is_stale() {
        let mut tracker = RequestTracker::default();
        let page_two = tracker.issue();
        let page_three = tracker.issue();
        // page three resolves first, then page two
        assert!(tracker.is_current(page_three));
        assert!(!tracker.is_current(page_two));
    }

    const FALLBACK: &str = "Failed to fetch videos";

    #[test]
    fn stale_success_is_dropped() {
        let mut tracker = RequestTracker::default();
        let older = tracker.issue();
        tracker.issue();
        assert_eq!(resolve(&tracker, older, Ok(1), FALLBACK), None);
    }

    #[test]
    fn stale_failure_does_not_overwrite_newer_state() {
        let mut tracker = RequestTracker::default();
        let older = tracker.issue();
        tracker.issue();
        let err = ApiError::from_status(500, r#"{"error":"boom"}"#);
        assert_eq!(resolve::<u8>(&tracker, older, Err(err), FALLBACK), None);
    }

    #[test]
    fn current_failure_shows_server_message() {
        let mut tracker = RequestTracker::default();
        let token = tracker.issue();
        let err = ApiError::from_status(404, r#"{"error":"convention not found"}"#);
        assert_eq!(
            resolve::<u8>(&tracker, token, Err(err), FALLBACK),
            Some(FetchState::Failed("convention not found".into()))
        );
    }

    #[test]
    fn current_failure_without_message_uses_fallback() {
        let mut tracker = RequestTracker::default();
        let token = tracker.issue();
        let err = ApiError::Network("offline".into());
        assert_eq!(resolve::<u8>(&tracker, token, Err(err), FALLBACK), Some(FetchState::Failed(FALLBACK.into())));
    }

    #[test]
    fn current_success_is_loaded() {
        let mut tracker = RequestTracker::default();
        let token = tracker.issue();
        assert_eq!(resolve(&tracker, token, Ok(7), FALLBACK), Some(FetchState::Loaded(7)));
    }

    #[test]
    fn loaded_accessor() {
        assert_eq!(FetchState::Loaded(3).loaded(), Some(&3));
        assert_eq!(FetchState::<u8>::Loading.loaded(), None);
        assert_eq!(FetchState::<u8>::Failed("x".into()).loaded(), None);
    }
}
