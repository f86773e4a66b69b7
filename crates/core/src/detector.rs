use tracing::debug;

use crate::markers::Markers;
use crate::page::Page;

/// Answers "is this tab already inside the authenticated area?".
///
/// Reads the location fresh on every call. An unreadable location counts as
/// signed out.
pub struct SessionDetector<'a, P: Page + ?Sized> {
	page: &'a P,
	markers: &'a Markers,
}

impl<'a, P: Page + ?Sized> SessionDetector<'a, P> {
	pub fn new(page: &'a P, markers: &'a Markers) -> Self {
		Self { page, markers }
	}

	pub fn is_authenticated(&self) -> bool {
		match self.page.current_location() {
			Ok(location) => self.markers.is_authenticated(&location),
			Err(err) => {
				debug!(target = "signon", error = %err, "location unavailable, treating session as signed out");
				false
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::ScriptedPage;

	#[test]
	fn marker_anywhere_in_location_counts() {
		let markers = Markers::default();
		for location in [
			"https://www.linkedin.com/feed/",
			"https://www.linkedin.com/feed/update/urn:li:activity:1",
			"http://localhost:8080/feed?x=1",
		] {
			let page = ScriptedPage::new(location);
			assert!(SessionDetector::new(&page, &markers).is_authenticated(), "{location}");
		}
	}

	#[test]
	fn other_locations_are_signed_out() {
		let markers = Markers::default();
		for location in [
			"https://www.linkedin.com/login",
			"https://www.linkedin.com/checkpoint/challenge",
			"https://www.linkedin.com/",
			"about:blank",
			"",
		] {
			let page = ScriptedPage::new(location);
			assert!(!SessionDetector::new(&page, &markers).is_authenticated(), "{location}");
		}
	}

	#[test]
	fn unreadable_location_is_signed_out() {
		let markers = Markers::default();
		let page = ScriptedPage::closed();
		assert!(!SessionDetector::new(&page, &markers).is_authenticated());
		assert!(page.interactions().is_empty());
	}
}
