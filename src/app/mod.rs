//! The `app` module is the core of the application.
//!
//! It owns the page-controller state, routes keyboard and mouse input, and
//! polls background work (translation jobs, illustration fetches) on each
//! tick. Submodules split the `App` impl by responsibility.

mod actions;
mod init;
mod keyboard;
mod mouse;
mod state;
mod tick;

pub use state::App;
