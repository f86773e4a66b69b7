//! The browser-control surface the login core drives.
//!
//! Implementations own the browser, the tab and the profile. The core only
//! borrows a [`Page`] for the length of one attempt and issues the commands
//! below, strictly one at a time.
//!
//! Lookups are expected to wait for the element themselves (up to whatever
//! timeout the implementation is configured with) and fail with
//! [`PageError::ElementNotFound`](crate::PageError::ElementNotFound) when it
//! never shows up.

use crate::error::PageResult;

/// A single browser tab.
pub trait Page {
	/// Returns the location the tab is currently showing.
	///
	/// Must fail when the tab or browser is no longer reachable, rather than
	/// returning a stale cached value.
	fn current_location(&self) -> PageResult<String>;

	/// Starts navigation to `url` and blocks until the initial load signal.
	fn navigate(&self, url: &str) -> PageResult<()>;

	/// Blocks until the page reports load completion.
	fn wait_load(&self) -> PageResult<()>;

	/// Locates a text input by CSS `selector`.
	fn find_input(&self, selector: &str) -> PageResult<Box<dyn InputHandle + '_>>;

	/// Locates a clickable control by CSS `selector`.
	fn find_clickable(&self, selector: &str) -> PageResult<Box<dyn Clickable + '_>>;
}

/// A located text input.
pub trait InputHandle {
	fn focus(&self) -> PageResult<()>;

	/// Types `text` into the input as key events.
	fn set_text(&self, text: &str) -> PageResult<()>;
}

/// A located button or link.
pub trait Clickable {
	fn click(&self) -> PageResult<()>;
}
