//! Scripted [`Page`] for exercising the login flow without a browser.
//!
//! A [`ScriptedPage`] starts at a fixed location. Navigation moves it to the
//! requested URL, or to the configured redirect for that URL. Once the submit
//! control has been clicked, every location read takes the next entry from the
//! post-submit script; when the script runs dry the last entry keeps being
//! returned. Every command is recorded so tests can assert on exactly what the
//! orchestrator did.
//!
//! Only built for this crate's tests or with the `testing` feature.
//!
//! ```ignore
//! use signon::testing::ScriptedPage;
//!
//! let page = ScriptedPage::new("about:blank")
//! 	.then("https://example.com/checkpoint")
//! 	.then("https://example.com/feed");
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{PageError, PageResult};
use crate::page::{Clickable, InputHandle, Page};

/// A command issued to a [`ScriptedPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Navigate(String),
	WaitLoad,
	FindInput(String),
	Focus(String),
	SetText { selector: String, text: String },
	FindClickable(String),
	Click(String),
}

type Location = Result<String, PageError>;

/// Test double for [`Page`].
pub struct ScriptedPage {
	current: RefCell<Location>,
	script: RefCell<VecDeque<Location>>,
	missing: HashSet<String>,
	redirects: HashMap<String, String>,
	submitted: Cell<bool>,
	reads: Cell<u32>,
	polls: Cell<u32>,
	commands: RefCell<Vec<Command>>,
}

impl ScriptedPage {
	/// A page currently showing `location`.
	pub fn new(location: impl Into<String>) -> Self {
		Self::starting_at(Ok(location.into()))
	}

	/// A page whose location can never be read.
	pub fn closed() -> Self {
		Self::starting_at(Err(PageError::Unavailable("target closed".into())))
	}

	fn starting_at(current: Location) -> Self {
		Self {
			current: RefCell::new(current),
			script: RefCell::new(VecDeque::new()),
			missing: HashSet::new(),
			redirects: HashMap::new(),
			submitted: Cell::new(false),
			reads: Cell::new(0),
			polls: Cell::new(0),
			commands: RefCell::new(Vec::new()),
		}
	}

	/// Appends a post-submit location.
	pub fn then(self, location: impl Into<String>) -> Self {
		self.script.borrow_mut().push_back(Ok(location.into()));
		self
	}

	/// Appends `location` `times` times.
	pub fn then_repeat(self, location: &str, times: usize) -> Self {
		(0..times).fold(self, |page, _| page.then(location))
	}

	/// Appends a read that fails as if the tab had been closed. Reads after
	/// it keep failing unless more locations follow.
	pub fn then_closed(self) -> Self {
		self.script
			.borrow_mut()
			.push_back(Err(PageError::Unavailable("target closed".into())));
		self
	}

	/// Makes lookups of `selector` fail.
	pub fn without(mut self, selector: impl Into<String>) -> Self {
		self.missing.insert(selector.into());
		self
	}

	/// Navigating to `from` lands on `to` instead.
	pub fn redirecting(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
		self.redirects.insert(from.into(), to.into());
		self
	}

	/// All commands issued so far, excluding location reads.
	pub fn interactions(&self) -> Vec<Command> {
		self.commands.borrow().clone()
	}

	/// Location reads, including the fast-path read.
	pub fn location_reads(&self) -> u32 {
		self.reads.get()
	}

	/// Location reads made after the form was submitted.
	pub fn polls(&self) -> u32 {
		self.polls.get()
	}

	pub fn was_submitted(&self) -> bool {
		self.submitted.get()
	}

	fn record(&self, command: Command) {
		self.commands.borrow_mut().push(command);
	}

	fn lookup(&self, selector: &str) -> PageResult<()> {
		if self.missing.contains(selector) {
			return Err(PageError::ElementNotFound {
				selector: selector.to_string(),
			});
		}
		Ok(())
	}
}

impl Page for ScriptedPage {
	fn current_location(&self) -> PageResult<String> {
		self.reads.set(self.reads.get() + 1);
		if self.submitted.get() {
			self.polls.set(self.polls.get() + 1);
			if let Some(next) = self.script.borrow_mut().pop_front() {
				*self.current.borrow_mut() = next;
			}
		}
		self.current.borrow().clone()
	}

	fn navigate(&self, url: &str) -> PageResult<()> {
		self.record(Command::Navigate(url.to_string()));
		let landed = self.redirects.get(url).map_or(url, String::as_str);
		*self.current.borrow_mut() = Ok(landed.to_string());
		Ok(())
	}

	fn wait_load(&self) -> PageResult<()> {
		self.record(Command::WaitLoad);
		Ok(())
	}

	fn find_input(&self, selector: &str) -> PageResult<Box<dyn InputHandle + '_>> {
		self.record(Command::FindInput(selector.to_string()));
		self.lookup(selector)?;
		Ok(Box::new(ScriptedElement {
			page: self,
			selector: selector.to_string(),
		}))
	}

	fn find_clickable(&self, selector: &str) -> PageResult<Box<dyn Clickable + '_>> {
		self.record(Command::FindClickable(selector.to_string()));
		self.lookup(selector)?;
		Ok(Box::new(ScriptedElement {
			page: self,
			selector: selector.to_string(),
		}))
	}
}

struct ScriptedElement<'a> {
	page: &'a ScriptedPage,
	selector: String,
}

impl InputHandle for ScriptedElement<'_> {
	fn focus(&self) -> PageResult<()> {
		self.page.record(Command::Focus(self.selector.clone()));
		Ok(())
	}

	fn set_text(&self, text: &str) -> PageResult<()> {
		self.page.record(Command::SetText {
			selector: self.selector.clone(),
			text: text.to_string(),
		});
		Ok(())
	}
}

impl Clickable for ScriptedElement<'_> {
	fn click(&self) -> PageResult<()> {
		self.page.record(Command::Click(self.selector.clone()));
		self.page.submitted.set(true);
		Ok(())
	}
}
