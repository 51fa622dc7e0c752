//! Post layout: binds a content record and its metadata to a page view.
//!
//! - `view` - The structured view types
//! - `binder` - [`bind_post`], the single entry point
//! - `html` - Page markup for a bound view

mod binder;
mod html;
mod view;

pub use binder::{BACK_LINK_LABEL, PostInput, bind_post, github_handle};
pub use view::{
    AuthorView, BackLink, DateView, GithubLink, NavDirection, NavLink, PostFooter, PostHeader,
    PostView, TagView,
};
