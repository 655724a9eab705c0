// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern throughout.
//!
//! # Components
//!
//! - [`header`] - Floating site header with the animated disclosure menu
//! - [`swiper`] - Full-screen lightbox for browsing an album
//! - [`pages`] - Stateless page views over catalog data
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`gesture`] - Horizontal swipe detection from raw pointer events
//! - [`layout`] - Aspect-ratio layout arithmetic

pub mod design_tokens;
pub mod gesture;
pub mod header;
pub mod layout;
pub mod pages;
pub mod swiper;
