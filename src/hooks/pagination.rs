use std::rc::Rc;

use yew::prelude::*;

use crate::models::PaginationInfo;

/// Current page of a listing plus the server's metadata from the last successful fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct PageCursor {
    pub current_page: u32,
    pub info: Option<PaginationInfo>,
}

pub enum PageAction {
    Next,
    Prev,
    Loaded(PaginationInfo),
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { current_page: 1, info: None }
    }
}

impl PageCursor {
    pub fn can_next(&self) -> bool {
        self.info
            .map(|info| self.current_page < info.total_pages)
            .unwrap_or(false)
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.info.map(|info| info.total_pages)
    }

    /// Applies `action`, returning the new cursor.
    pub fn apply(&self, action: PageAction) -> Self {
        match action {
            PageAction::Next if self.can_next() => Self {
                current_page: self.current_page + 1,
                ..self.clone()
            },
            PageAction::Prev if self.can_prev() => Self {
                current_page: self.current_page - 1,
                ..self.clone()
            },
            PageAction::Next | PageAction::Prev => self.clone(),
            PageAction::Loaded(info) => {
                let current_page = if info.total_pages > 0 {
                    self.current_page.clamp(1, info.total_pages)
                } else {
                    1
                };
                Self { current_page, info: Some(info) }
            }
        }
    }
}

impl Reducible for PageCursor {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
