//! [`Page`] implementation over a `headless_chrome` tab.

use std::thread;
use std::time::{Duration, Instant};

use headless_chrome::{Element, Tab};
use signon::{Clickable, InputHandle, Page, PageError, PageResult};

const READY_STATE_POLL: Duration = Duration::from_millis(100);

pub struct ChromePage<'a> {
	tab: &'a Tab,
	lookup_timeout: Duration,
}

impl<'a> ChromePage<'a> {
	pub fn new(tab: &'a Tab, lookup_timeout: Duration) -> Self {
		Self { tab, lookup_timeout }
	}

	/// The document's `readyState`. Fails while the page is between
	/// documents, which is not the same as the tab being gone.
	fn ready_state(&self) -> anyhow::Result<String> {
		let object = self.tab.evaluate("document.readyState", false)?;
		object
			.value
			.as_ref()
			.and_then(|v| v.as_str())
			.map(str::to_string)
			.ok_or_else(|| anyhow::anyhow!("document.readyState did not evaluate to a string"))
	}

	fn find(&self, selector: &str) -> PageResult<ChromeElement<'a>> {
		self.tab
			.wait_for_element_with_custom_timeout(selector, self.lookup_timeout)
			.map(ChromeElement)
			.map_err(|_| PageError::ElementNotFound {
				selector: selector.to_string(),
			})
	}
}

impl Page for ChromePage<'_> {
	// Tab::get_url is cached from target events and keeps answering after the
	// tab dies. Target info comes from the browser, so it only fails once the
	// target is gone, not while a redirect swaps the execution context.
	fn current_location(&self) -> PageResult<String> {
		target_location(self.tab.get_target_info().map(|info| info.url))
	}

	fn navigate(&self, url: &str) -> PageResult<()> {
		self.tab.navigate_to(url).map_err(command("navigate"))?;
		self.tab.wait_until_navigated().map_err(command("navigate"))?;
		Ok(())
	}

	fn wait_load(&self) -> PageResult<()> {
		let deadline = Instant::now() + self.lookup_timeout;
		loop {
			let state = match self.ready_state() {
				Ok(state) if state == "complete" => return Ok(()),
				Ok(state) => state,
				Err(err) => {
					// Distinguish a document swap from a dead tab.
					self.current_location()?;
					format!("unreadable ({err:#})")
				}
			};
			if Instant::now() >= deadline {
				return Err(PageError::command(
					"wait for load",
					format!("document still {state} after {}ms", self.lookup_timeout.as_millis()),
				));
			}
			thread::sleep(READY_STATE_POLL);
		}
	}

	fn find_input(&self, selector: &str) -> PageResult<Box<dyn InputHandle + '_>> {
		Ok(Box::new(self.find(selector)?))
	}

	fn find_clickable(&self, selector: &str) -> PageResult<Box<dyn Clickable + '_>> {
		Ok(Box::new(self.find(selector)?))
	}
}

struct ChromeElement<'a>(Element<'a>);

impl InputHandle for ChromeElement<'_> {
	fn focus(&self) -> PageResult<()> {
		self.0.focus().map(drop).map_err(command("focus"))
	}

	fn set_text(&self, text: &str) -> PageResult<()> {
		self.0.type_into(text).map(drop).map_err(command("type"))
	}
}

impl Clickable for ChromeElement<'_> {
	fn click(&self) -> PageResult<()> {
		self.0.click().map(drop).map_err(command("click"))
	}
}

/// Maps a target-info read onto the page contract: any failure means the
/// target no longer exists.
fn target_location(url: anyhow::Result<String>) -> PageResult<String> {
	url.map_err(|e| PageError::Unavailable(format!("{e:#}")))
}

fn command(name: &'static str) -> impl Fn(anyhow::Error) -> PageError {
	move |err| PageError::command(name, format!("{err:#}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mid_redirect_url_is_a_location() {
		let url = "https://www.linkedin.com/checkpoint/lg/login-submit?loginSubmitSource=GUEST_HOME";
		assert_eq!(target_location(Ok(url.to_string())), Ok(url.to_string()));
	}

	#[test]
	fn missing_target_is_unavailable() {
		let err = target_location(Err(anyhow::anyhow!("No target with given id found"))).unwrap_err();
		assert_eq!(err, PageError::Unavailable("No target with given id found".into()));
	}
}
