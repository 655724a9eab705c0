// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a photography portfolio viewer built with the Iced GUI
//! framework.
//!
//! A TOML manifest describes the site (albums, image files, page copy); the
//! application renders it as a small set of pages with a spring-animated
//! header menu and a full-screen image lightbox.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod animation;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
