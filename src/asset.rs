/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use serde::Deserialize;
use serde_json::Value;

/// Media classification carried in an asset's `type` field.
///
/// Values the server adds in future releases decode to [`AssetType::Other`]
/// rather than failing the whole response.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    #[serde(rename = "IMAGE")]
    Image,

    #[serde(rename = "VIDEO")]
    Video,

    #[serde(rename = "AUDIO")]
    Audio,

    #[serde(other)]
    Other,
}

/// A single media item tracked by the Immich server.
///
/// Only the fields a polling integration consumes are modeled; everything
/// else the server returns is ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: AssetType,

    #[serde(default)]
    pub original_file_name: Option<String>,

    #[serde(default)]
    pub local_date_time: Option<String>,

    #[serde(default)]
    pub is_favorite: bool,

    /// Raw EXIF mapping as returned by the server; shape varies per asset.
    #[serde(default)]
    pub exif_info: Option<Value>,
}

impl Asset {
    /// True only for still images. The image-listing operations drop
    /// videos and any other media type.
    pub fn is_image(&self) -> bool {
        self.kind == AssetType::Image
    }
}
