// SPDX-License-Identifier: MPL-2.0
//! Portfolio catalog: the read-only data snapshot the UI renders.
//!
//! A portfolio is described by a `portfolio.toml` manifest listing albums,
//! their images, page text, and social/video links. The manifest is loaded
//! once and validated up front so the interaction layer is only ever handed
//! albums that satisfy its preconditions (at least one image, a resolvable
//! cover, positive pixel dimensions).

use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Unique identifier of an album, as declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId(String);

impl AlbumId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier of an image asset, as declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A stored photograph with known natural pixel dimensions.
///
/// Dimensions are guaranteed positive once the catalog is loaded, so layout
/// code can divide by `natural_width` without checking.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub id: ImageId,
    pub natural_width: u32,
    pub natural_height: u32,
    /// Resolved path of the backing file. Opaque to the UI core; only the
    /// rendering layer dereferences it.
    pub source: PathBuf,
}

/// An ordered collection of images with a designated cover.
#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    cover_index: usize,
    pub images: Vec<ImageAsset>,
}

impl Album {
    /// Returns the cover image used on the albums listing page.
    #[must_use]
    pub fn cover(&self) -> &ImageAsset {
        &self.images[self.cover_index]
    }
}

/// Heading text supplied per page by the manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageText {
    pub title: String,
    pub subtitle: Option<String>,
    pub body: Option<String>,
}

/// A contact/social entry shown in the menu panel and on the about page.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub value: String,
    pub href: String,
}

/// An external video destination listed on the videos page.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoLink {
    pub title: String,
    pub href: String,
}

/// The loaded, validated portfolio snapshot.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub site_title: String,
    pub landing_cover: Option<PathBuf>,
    pub albums_page: PageText,
    pub about: PageText,
    pub about_banner: Option<PathBuf>,
    pub social: Vec<SocialLink>,
    pub videos: Vec<VideoLink>,
    pub albums: Vec<Album>,
}

impl Portfolio {
    /// Looks up an album by identifier.
    #[must_use]
    pub fn album(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|album| &album.id == id)
    }

    /// Loads and validates a portfolio manifest.
    ///
    /// Image paths in the manifest are resolved relative to the manifest's
    /// directory. Entries without explicit dimensions are probed on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: Manifest = toml::from_str(&content)
            .map_err(|e| CatalogError::InvalidManifest(e.to_string()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        manifest.resolve(base_dir)
    }
}

// ============================================================================
// Manifest (raw serde shapes)
// ============================================================================

#[derive(Debug, Deserialize)]
struct Manifest {
    site: SiteSection,
    #[serde(default)]
    landing: Option<LandingSection>,
    #[serde(default)]
    albums_page: Option<PageTextSection>,
    #[serde(default)]
    about: Option<AboutSection>,
    #[serde(default, rename = "social")]
    social: Vec<SocialSection>,
    #[serde(default, rename = "video")]
    videos: Vec<VideoSection>,
    #[serde(default, rename = "album")]
    albums: Vec<AlbumSection>,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    title: String,
}

#[derive(Debug, Deserialize)]
struct LandingSection {
    cover: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PageTextSection {
    #[serde(default)]
    title: String,
    subtitle: Option<String>,
    body: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AboutSection {
    #[serde(flatten)]
    text: PageTextSection,
    banner: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SocialSection {
    label: String,
    value: String,
    href: String,
}

#[derive(Debug, Deserialize)]
struct VideoSection {
    title: String,
    href: String,
}

#[derive(Debug, Deserialize)]
struct AlbumSection {
    id: String,
    title: String,
    /// Image id used as the album cover. Defaults to the first image.
    cover: Option<String>,
    #[serde(default, rename = "image")]
    images: Vec<ImageSection>,
}

#[derive(Debug, Deserialize)]
struct ImageSection {
    id: String,
    source: String,
    natural_width: Option<u32>,
    natural_height: Option<u32>,
}

impl PageTextSection {
    fn into_page_text(self) -> PageText {
        PageText {
            title: self.title,
            subtitle: self.subtitle,
            body: self.body,
        }
    }
}

impl Manifest {
    fn resolve(self, base_dir: &Path) -> Result<Portfolio> {
        let mut album_ids = HashSet::new();
        let mut albums = Vec::with_capacity(self.albums.len());

        for section in self.albums {
            if !album_ids.insert(section.id.clone()) {
                return Err(CatalogError::DuplicateId(section.id).into());
            }
            albums.push(resolve_album(section, base_dir)?);
        }

        Ok(Portfolio {
            site_title: self.site.title,
            landing_cover: self
                .landing
                .and_then(|landing| landing.cover)
                .map(|cover| base_dir.join(cover)),
            albums_page: self
                .albums_page
                .unwrap_or_default()
                .into_page_text(),
            about_banner: self
                .about
                .as_ref()
                .and_then(|about| about.banner.clone())
                .map(|banner| base_dir.join(banner)),
            about: self
                .about
                .map(|about| about.text.into_page_text())
                .unwrap_or_default(),
            social: self
                .social
                .into_iter()
                .map(|s| SocialLink {
                    label: s.label,
                    value: s.value,
                    href: s.href,
                })
                .collect(),
            videos: self
                .videos
                .into_iter()
                .map(|v| VideoLink {
                    title: v.title,
                    href: v.href,
                })
                .collect(),
            albums,
        })
    }
}

fn resolve_album(section: AlbumSection, base_dir: &Path) -> Result<Album> {
    if section.images.is_empty() {
        return Err(CatalogError::EmptyAlbum(section.title).into());
    }

    let mut image_ids = HashSet::new();
    let mut images = Vec::with_capacity(section.images.len());

    for image in section.images {
        if !image_ids.insert(image.id.clone()) {
            return Err(CatalogError::DuplicateId(image.id).into());
        }
        images.push(resolve_image(image, base_dir)?);
    }

    let cover_index = match section.cover {
        Some(cover_id) => images
            .iter()
            .position(|image| image.id.as_str() == cover_id)
            .ok_or(CatalogError::MissingCover(section.title.clone()))?,
        None => 0,
    };

    Ok(Album {
        id: AlbumId::new(section.id),
        title: section.title,
        cover_index,
        images,
    })
}

fn resolve_image(section: ImageSection, base_dir: &Path) -> Result<ImageAsset> {
    let source = base_dir.join(&section.source);

    let (natural_width, natural_height) =
        match (section.natural_width, section.natural_height) {
            (Some(width), Some(height)) => (width, height),
            // Manifest omits dimensions: probe the file header.
            _ => image_rs::image_dimensions(&source)
                .map_err(|_| CatalogError::UnreadableImage(section.source.clone()))?,
        };

    if natural_width == 0 || natural_height == 0 {
        return Err(CatalogError::UnreadableImage(section.source).into());
    }

    Ok(ImageAsset {
        id: ImageId::new(section.id),
        natural_width,
        natural_height,
        source,
    })
}
