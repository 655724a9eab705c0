// SPDX-License-Identifier: MPL-2.0
use iced_folio::catalog::{AlbumId, Portfolio};
use iced_folio::config::{self, Config, DEFAULT_WINDOW_WIDTH};
use tempfile::tempdir;

#[test]
fn test_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        catalog_path: Some("albums/portfolio.toml".to_string()),
        window_width: Some(DEFAULT_WINDOW_WIDTH),
        window_height: Some(900.0),
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded.catalog_path.as_deref(), Some("albums/portfolio.toml"));
    assert_eq!(loaded.window_height, Some(900.0));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_catalog_loads_a_complete_manifest() {
    let dir = tempdir().expect("Failed to create temporary directory");

    // Real image files so dimension probing has something to read.
    let wide = dir.path().join("wide.png");
    image_rs::RgbaImage::new(8, 4)
        .save(&wide)
        .expect("Failed to write test image");
    let tall = dir.path().join("tall.png");
    image_rs::RgbaImage::new(4, 8)
        .save(&tall)
        .expect("Failed to write test image");

    let manifest = r#"
[site]
title = "Jane Doe Photography"

[albums_page]
title = "Albums"

[about]
title = "About"
body = "Photographer."

[[social]]
label = "Email"
value = "jane@example.com"
href = "mailto:jane@example.com"

[[album]]
id = "portraits"
title = "Portraits"

[[album.image]]
id = "wide"
source = "wide.png"

[[album.image]]
id = "tall"
source = "tall.png"
"#;

    let manifest_path = dir.path().join("portfolio.toml");
    std::fs::write(&manifest_path, manifest).expect("Failed to write manifest");

    let portfolio = Portfolio::load_from_path(&manifest_path).expect("Failed to load catalog");
    assert_eq!(portfolio.site_title, "Jane Doe Photography");
    assert_eq!(portfolio.albums.len(), 1);

    let album = portfolio
        .album(&AlbumId::new("portraits"))
        .expect("Album missing");
    assert_eq!(album.images.len(), 2);
    assert_eq!(album.images[0].natural_width, 8);
    assert_eq!(album.images[0].natural_height, 4);
    assert_eq!(album.images[1].natural_width, 4);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_catalog_rejects_an_album_without_images() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let manifest = r#"
[site]
title = "Empty"

[albums_page]
title = "Albums"

[about]
title = "About"

[[album]]
id = "nothing"
title = "Nothing"
"#;

    let manifest_path = dir.path().join("portfolio.toml");
    std::fs::write(&manifest_path, manifest).expect("Failed to write manifest");

    assert!(Portfolio::load_from_path(&manifest_path).is_err());

    dir.close().expect("Failed to close temporary directory");
}
