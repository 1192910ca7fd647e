/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # immich-hub
//!
//! A client library for the REST API of a self-hosted
//! [Immich](https://immich.app) photo server, aimed at host automation
//! platforms that poll for photo/album metadata and thumbnail previews.
//!
//! The entry point is the [`Hub`]: one per configured server connection.
//! It owns a single HTTP connection pool, sends the API key on every
//! request, and exposes typed accessors for the endpoints a picture-frame
//! style integration needs.
//!
//! ## Features
//!
//! - API key validation (`authenticate`)
//! - Current user information
//! - Asset information and preview-sized thumbnail download
//! - Favorite images, album listings, album contents
//! - "Memory lane" images for the current calendar day across years
//!
//! Every accessor is a single request/response round trip. There is no
//! caching, no retry logic, and no pagination beyond what the server
//! returns in one page.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! immich-hub = "0.2"
//! ```
//!
//! ## Usage
//!
//! **You will need an API key created in the Immich web UI prior to use**
//!
//! ```rust
//! use immich_hub::{Hub, ImmichError};
//!
//! async fn show_library(host: &str, api_key: &str) -> Result<(), ImmichError> {
//!     // One hub per configured server connection
//!     let hub = Hub::new(host, api_key, true)?;
//!
//!     // Validate the credential before polling
//!     if !hub.authenticate().await? {
//!         println!("server rejected the API key");
//!         return Ok(());
//!     }
//!
//!     for album in hub.list_all_albums().await? {
//!         println!("{} ({} assets)", album.album_name, album.asset_count);
//!     }
//!
//!     // Download a preview of the first favorite image
//!     let favorites = hub.list_favorite_images().await?;
//!     if let Some(image) = favorites.first() {
//!         if let Some(bytes) = hub.download_asset(&image.id).await? {
//!             println!("preview is {} bytes", bytes.len());
//!         }
//!     }
//!
//!     // Release the connection pool when the connection is torn down
//!     hub.close();
//!     Ok(())
//! }
//! ```
//!

pub mod album;
pub mod asset;
pub mod diagnostics;
pub mod errors;
pub mod hub;
pub mod memory_lane;
pub mod user;

pub use album::*;
pub use asset::*;
pub use diagnostics::*;
pub use errors::*;
pub use hub::*;
pub use memory_lane::*;
pub use user::*;
