// SPDX-License-Identifier: MPL-2.0
//! Animation primitives: re-targetable springs and overlay transitions.
//!
//! These types hold no rendering concerns. They are stepped from the
//! application's periodic tick and the view layer reads their current
//! values each frame.

pub mod spring;
pub mod transition;

pub use spring::{ColorSpring, Spring};
pub use transition::{OverlayTransition, Phase};
