//! Infinite carousel
//!
//! - `engine`: per-instance index arithmetic, navigation guard, wrap correction
//! - `layout`: centering math and the frame handed to the DOM layer
//! - `registry`: instances keyed by container id and the active instance
//! - `sync`: cancelable per-frame recenter loop for the sidebar animation

pub mod engine;
pub mod layout;
pub mod registry;
pub mod sync;

pub use engine::{CarouselState, Direction, WrapCorrection};
pub use layout::{CardMetrics, CarouselFrame, Transition};
pub use registry::{group_id, CarouselRegistry};
pub use sync::{FrameHandle, FrameScheduler, RecenterLoop};
