pub mod add_to_collection;
pub mod breadcrumb;
pub mod clip_preview;
pub mod collections_sidebar;
pub mod feedback;
pub mod layout;
pub mod notice_host;
pub mod pager;
pub mod video_card;
