//! Starfield background renderer.
//!
//! A [`Starfield`] owns one full-viewport drawing surface mounted in a host
//! [`Page`], a set of slowly rising stars and a self-rescheduling frame loop.
//! The page delivers resize and theme changes as explicit [`PageEvent`]s and
//! drives the loop through its [`FrameScheduler`].

mod frame;
mod page;
mod star;
mod starfield;
mod surface;

#[cfg(test)]
mod testing;

pub use frame::{FrameRequest, FrameScheduler};
pub use page::{NodeId, Page, PageEvent, ReadyState};
pub use star::{RADIUS_RANGE, SPEED_RANGE, Star, generate_stars};
pub use starfield::{MOUNT_ID, STAR_COUNT, Starfield, StarfieldOptions};
pub use surface::{CanvasSurface, Dot, Surface};
