// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::catalog::AlbumId;
use crate::ui::header::{Ambient, PageLink, Tone};

/// Screens the user can navigate between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Albums,
    Album(AlbumId),
    Videos,
    About,
}

impl Screen {
    /// Header baseline for this screen. Photograph-backed screens carry
    /// white chrome; text pages carry black.
    #[must_use]
    pub fn ambient(&self) -> Ambient {
        match self {
            Screen::Landing => Ambient {
                tone: Tone::White,
                is_landing: true,
            },
            Screen::About => Ambient {
                tone: Tone::White,
                is_landing: false,
            },
            Screen::Albums | Screen::Album(_) | Screen::Videos => Ambient {
                tone: Tone::Black,
                is_landing: false,
            },
        }
    }
}

impl From<PageLink> for Screen {
    fn from(link: PageLink) -> Self {
        match link {
            PageLink::Home => Screen::Landing,
            PageLink::Albums => Screen::Albums,
            PageLink::Videos => Screen::Videos,
            PageLink::About => Screen::About,
        }
    }
}
