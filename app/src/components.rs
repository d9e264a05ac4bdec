//! UI pieces that make up the site header, plus the error page.
//!
//! `header` composes the rest: `sticky` and `favicon` adapt the state
//! machines from `header_state` to the browser, `nav_bar` renders the links.

pub mod error_template;
pub mod favicon;
pub mod header;
pub mod nav_bar;
pub mod sticky;
pub mod wordmark;
