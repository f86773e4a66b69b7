//! Automated browser login with outcome detection.
//!
//! The crate does not talk to a browser itself. It drives anything that
//! implements [`Page`]: a blocking, single-tab view of a browser exposing the
//! current location, navigation and element lookup.
//!
//! An attempt runs in this order:
//!
//! 1. [`SessionDetector`] checks whether the tab is already inside the
//!    authenticated area. If it is, nothing else happens.
//! 2. [`Credentials`] are checked for empty fields.
//! 3. The login form is filled and submitted once.
//! 4. The location is polled on a fixed interval until it reaches the
//!    authenticated area, returns to the login form after the grace window,
//!    becomes unreadable, or the check budget runs out. Verification
//!    checkpoints keep the loop waiting for a person to clear them.
//!
//! ```ignore
//! use signon::{Authenticator, Credentials, LoginTarget};
//!
//! let target = LoginTarget::default();
//! let creds = Credentials::from_env("LINKEDIN_EMAIL", "LINKEDIN_PASSWORD");
//! let outcome = Authenticator::new(&page, &target).authenticate(&creds);
//! ```

pub mod config;
pub mod credentials;
pub mod detector;
pub mod error;
pub mod markers;
pub mod orchestrator;
pub mod outcome;
pub mod page;
pub mod poll;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{ConfigError, LoginTarget, Selectors, Timing};
pub use credentials::Credentials;
pub use detector::SessionDetector;
pub use error::{AuthError, PageError, PageResult};
pub use markers::{Classification, Markers};
pub use orchestrator::{AttemptReport, Authenticator};
pub use outcome::Outcome;
pub use page::{Clickable, InputHandle, Page};
