//! Services module - widget logic with no dependency on a particular host page.
//!
//! # Components
//!
//! - [`Scheduler`] / [`TimerHandle`]: cancellable repeating timers that drive
//!   carousel autoplay. [`TokioScheduler`] runs them on a tokio runtime,
//!   [`ManualScheduler`] on a virtual clock advanced by the caller.
//! - [`SwipeTracker`]: turns a touch start/end pair into a [`SwipeDirection`]
//!   once the horizontal travel passes a threshold.
//! - [`ProductFilter`]: one active category chip deciding which product
//!   cards are shown.
//! - [`FormValidator`]: required, email and phone checks for contact forms,
//!   reporting [`FieldError`]s with the messages shown beside each field.
//!
//! # Usage Example
//!
//! ```ignore
//! use slidekit::services::{classify_swipe, SwipeDirection};
//!
//! assert_eq!(classify_swipe(200.0, 140.0, 50.0), Some(SwipeDirection::Next));
//! assert_eq!(classify_swipe(200.0, 170.0, 50.0), None);
//! ```

pub mod autoplay;
pub mod filter;
pub mod gesture;
pub mod validation;

pub use autoplay::{ManualScheduler, Scheduler, TickFn, TimerHandle, TokioScheduler};
pub use filter::{ALL_CATEGORY, FilterError, ProductFilter, matches_category};
pub use gesture::{SwipeDirection, SwipeTracker, classify_swipe};
pub use validation::{FieldError, FieldKind, FormField, FormValidator};
