/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::asset::Asset;
use serde::Deserialize;

/// One memory-lane bucket: the assets captured on the same calendar
/// day/month in a past year.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemoryLaneEntry {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub years_ago: Option<u32>,

    pub assets: Vec<Asset>,
}
