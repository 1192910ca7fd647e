/*
 * Copyright (c) 2025 the immich-hub Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::album::Album;
use crate::asset::Asset;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::errors::ImmichError;
use crate::memory_lane::MemoryLaneEntry;
use crate::user::User;
use bytes::Bytes;
use chrono::Datelike;
use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

const HEADER_API_KEY: &str = "x-api-key";

/// Single point of contact with one Immich server.
///
/// Owns the HTTP connection pool for the lifetime of the configured
/// connection and attaches the API key to every request. The hub holds no
/// other state: every accessor is one request/response round trip that
/// either returns its documented value or an [`ImmichError`].
///
/// The pool is safe for concurrent in-flight requests; responses complete
/// in any order. Call [`Hub::close`] when the connection is torn down.
pub struct Hub {
    host: Url,
    api_key: String,
    http: reqwest::Client,
    sink: Arc<dyn DiagnosticSink>,
}

impl Hub {
    /// Creates a hub for the server at `host` using the given API key.
    ///
    /// Opens the connection pool but performs no request. With
    /// `verify_ssl` false the pool accepts invalid TLS certificates,
    /// for servers behind self-signed reverse proxies.
    pub fn new(host: &str, api_key: &str, verify_ssl: bool) -> Result<Self, ImmichError> {
        Self::with_sink(host, api_key, verify_ssl, Arc::new(LogSink))
    }

    /// Same as [`Hub::new`] with an explicit diagnostic sink.
    pub fn with_sink(
        host: &str,
        api_key: &str,
        verify_ssl: bool,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, ImmichError> {
        let host = Url::parse(host)?;
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!verify_ssl)
            .build()
            .map_err(ImmichError::CannotConnect)?;
        Ok(Self {
            host,
            api_key: api_key.to_owned(),
            http,
            sink,
        })
    }

    /// Releases the connection pool.
    ///
    /// Consuming `self` makes the release single-shot and rules out
    /// accessor calls afterward; must not be invoked while requests are
    /// in flight (the borrow on `self` enforces this).
    pub fn close(self) {}

    /// Tests whether the configured API key is accepted by the server.
    ///
    /// Returns `Ok(true)` only for an HTTP 200 whose body reports
    /// `authStatus: true`. Application-level rejection yields `Ok(false)`
    /// after logging the body, never an error; callers decide whether a
    /// `false` means bad credentials or a transient server problem.
    pub async fn authenticate(&self) -> Result<bool, ImmichError> {
        let url = self.endpoint("/api/auth/validateToken")?;
        let req = self.http.post(url).header(ACCEPT, "application/json");
        let resp = self.send(req).await?;
        let (status, body) = self.read_text(resp).await?;

        if status != StatusCode::OK {
            self.sink.error(&format!("Error from API: body={body}"));
            return Ok(false);
        }

        match serde_json::from_str::<TokenValidation>(&body) {
            Ok(validation) if validation.auth_status => Ok(true),
            _ => {
                self.sink.error(&format!("Error from API: body={body}"));
                Ok(false)
            }
        }
    }

    /// Returns information for the user owning the API key.
    pub async fn get_my_user_info(&self) -> Result<User, ImmichError> {
        let url = self.endpoint("/api/users/me")?;
        self.fetch(self.http.get(url)).await
    }

    /// Returns information for the specified asset id.
    pub async fn get_asset_info(&self, asset_id: &str) -> Result<Asset, ImmichError> {
        let url = self.endpoint(&format!("/api/assets/{asset_id}"))?;
        self.fetch(self.http.get(url)).await
    }

    /// Downloads the preview-sized thumbnail for the asset.
    ///
    /// Returns the raw response bytes, or `None` when the server answers
    /// with a non-success status (only the status is logged; thumbnail
    /// misses are routine while assets are still being transcoded).
    pub async fn download_asset(&self, asset_id: &str) -> Result<Option<Bytes>, ImmichError> {
        let mut url = self.endpoint(&format!("/api/assets/{asset_id}/thumbnail"))?;
        url.query_pairs_mut().append_pair("size", "preview");

        let resp = self.send(self.http.get(url)).await?;
        let status = resp.status();
        if status != StatusCode::OK {
            self.sink
                .error(&format!("Error from API: status={}", status.as_u16()));
            return Ok(None);
        }
        let data = resp.bytes().await.map_err(|err| self.connect_error(err))?;
        Ok(Some(data))
    }

    /// Lists the user's favorite images.
    ///
    /// Queries the metadata search endpoint for favorites and keeps only
    /// still images, in the order the server returned them.
    pub async fn list_favorite_images(&self) -> Result<Vec<Asset>, ImmichError> {
        let url = self.endpoint("/api/search/metadata")?;
        let req = self.http.post(url).form(&[("isFavorite", "true")]);
        let results: SearchMetadataResponse = self.fetch(req).await?;
        Ok(keep_images(results.assets.items))
    }

    /// Lists all albums visible to the user, unfiltered.
    pub async fn list_all_albums(&self) -> Result<Vec<Album>, ImmichError> {
        let url = self.endpoint("/api/albums")?;
        self.fetch(self.http.get(url)).await
    }

    /// Lists the images in an album, excluding videos and other media.
    pub async fn list_album_images(&self, album_id: &str) -> Result<Vec<Asset>, ImmichError> {
        let url = self.endpoint(&format!("/api/albums/{album_id}"))?;
        let album: Album = self.fetch(self.http.get(url)).await?;
        Ok(keep_images(album.assets))
    }

    /// Fetches today's memory-lane images.
    ///
    /// Day and month come from the local wall clock at call time.
    pub async fn list_memory_lane_images(&self) -> Result<Vec<Asset>, ImmichError> {
        let today = chrono::Local::now();
        self.list_memory_lane_images_on(today.day(), today.month())
            .await
    }

    /// Fetches memory-lane images for an explicit calendar day and month.
    ///
    /// Entries are flattened in server order, then intra-entry order, and
    /// filtered to still images.
    pub async fn list_memory_lane_images_on(
        &self,
        day: u32,
        month: u32,
    ) -> Result<Vec<Asset>, ImmichError> {
        let mut url = self.endpoint("/api/assets/memory-lane")?;
        url.query_pairs_mut()
            .append_pair("day", &day.to_string())
            .append_pair("month", &month.to_string());

        let entries: Vec<MemoryLaneEntry> = self.fetch(self.http.get(url)).await?;
        let assets = entries.into_iter().flat_map(|entry| entry.assets);
        Ok(keep_images(assets.collect()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ImmichError> {
        Ok(self.host.join(path)?)
    }

    fn connect_error(&self, err: reqwest::Error) -> ImmichError {
        self.sink
            .error(&format!("Error connecting to the API: {err}"));
        ImmichError::CannotConnect(err)
    }

    // Attaches the credential header and maps transport failures.
    async fn send(&self, req: RequestBuilder) -> Result<Response, ImmichError> {
        req.header(HEADER_API_KEY, &self.api_key)
            .send()
            .await
            .map_err(|err| self.connect_error(err))
    }

    async fn read_text(&self, resp: Response) -> Result<(StatusCode, String), ImmichError> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| self.connect_error(err))?;
        Ok((status, body))
    }

    // Shared discipline for the JSON-returning data operations: non-2xx
    // logs the body and becomes an Api error, a 2xx body that fails to
    // decode becomes a Decode error, never a partial value.
    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ImmichError> {
        let resp = self.send(req.header(ACCEPT, "application/json")).await?;
        let (status, body) = self.read_text(resp).await?;

        if !status.is_success() {
            self.sink.error(&format!("Error from API: body={body}"));
            return Err(ImmichError::Api(status));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub")
            .field("host", &self.host.as_str())
            .field("api_key", &"xxx")
            .finish()
    }
}

fn keep_images(assets: Vec<Asset>) -> Vec<Asset> {
    assets.into_iter().filter(Asset::is_image).collect()
}

// Expected response from the token validation endpoint
#[derive(Deserialize, Debug)]
struct TokenValidation {
    #[serde(default, rename = "authStatus")]
    auth_status: bool,
}

// The metadata search endpoint wraps matches in a paged envelope; only
// the first page of items is consumed.
#[derive(Deserialize, Debug)]
struct SearchMetadataResponse {
    assets: SearchAssetsPage,
}

#[derive(Deserialize, Debug)]
struct SearchAssetsPage {
    items: Vec<Asset>,
}
