/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Lists the library's albums and saves a preview of the first favorite
//! image. Expects IMMICH_HOST and IMMICH_API_KEY in the environment.

use immich_hub::Hub;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let host = std::env::var("IMMICH_HOST")?;
    let api_key = std::env::var("IMMICH_API_KEY")?;
    let hub = Hub::new(&host, &api_key, true)?;

    if !hub.authenticate().await? {
        anyhow::bail!("server rejected the API key");
    }

    for album in hub.list_all_albums().await? {
        println!("{} ({} assets)", album.album_name, album.asset_count);
    }

    let favorites = hub.list_favorite_images().await?;
    if let Some(image) = favorites.first() {
        if let Some(data) = hub.download_asset(&image.id).await? {
            std::fs::write("preview.jpg", &data)?;
            println!("wrote preview.jpg ({} bytes)", data.len());
        }
    }

    hub.close();
    Ok(())
}
