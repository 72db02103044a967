//! Frontend-independent view model

pub mod auto_scroll;
pub mod composer;

pub use auto_scroll::AutoScroll;
pub use composer::{ActionControl, HeaderError, Screen, StatusLine, compose};
