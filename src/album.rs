/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::asset::Asset;
use serde::Deserialize;

/// Holds information returned from the Albums API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,

    pub album_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub asset_count: u64,

    #[serde(default)]
    pub shared: bool,

    /// Populated when fetching a single album; the list endpoint omits it.
    #[serde(default)]
    pub assets: Vec<Asset>,
}
