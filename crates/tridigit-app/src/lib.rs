//! Application layer for tridigit
//!
//! Pure state machine and generic runtime for the three-digit display widget:
//! type three digits, see them full-screen, mirrored every couple of seconds
//! and rotated to follow the device. The same code runs behind the terminal
//! and the browser front ends and in deterministic tests.
//!
//! # Components
//!
//! - [`App`]: UI state machine (input validation, mode switch, display flags)
//! - [`Transform`]: the fixed-order transforms derived from [`DisplayFlags`]
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod buffer;
mod config;
mod driver;
mod env;
mod event;
mod input;
mod number;
mod runtime;
mod state;
mod transform;

pub use action::AppAction;
pub use app::App;
pub use buffer::{DIGIT_COUNT, InputBuffer};
pub use config::{DEFAULT_MIRROR_INTERVAL, DisplayConfig, strings};
pub use driver::Driver;
pub use env::{EnvChange, EnvSample, Viewport};
pub use event::AppEvent;
pub use input::KeyInput;
pub use number::{DisplayNumber, NumberError};
pub use runtime::Runtime;
pub use state::{DisplayFlags, Mode, SessionId, Showing};
pub use transform::{Transform, css_transform};
