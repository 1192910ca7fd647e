/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use serde::Deserialize;

/// Holds information returned from the current-user endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    pub email: String,

    pub name: String,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default)]
    pub profile_image_path: Option<String>,

    #[serde(default)]
    pub avatar_color: Option<String>,
}
