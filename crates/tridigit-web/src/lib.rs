//! Browser front end for tridigit
//!
//! A Yew component around [`tridigit_app::App`]. The page renders an input
//! field for three digits; once complete the number fills the viewport,
//! mirrors on a timer and rotates with the device. Transforms are applied
//! through CSS, in the order given by [`tridigit_app::Transform::ORDER`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod component;
mod logging;
mod styles;
mod subscription;

pub use component::{TriDigit, transform_style, wrapper_classes};
pub use logging::{ConsoleWriter, init_logging};
pub use subscription::{BrowserSubscription, sample_environment};
