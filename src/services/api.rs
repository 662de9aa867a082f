use crate::core::config::Config;
use crate::core::error::ChartError;
use crate::core::model::{GenerateRequest, RoleDocument, ScenarioDocument};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
use url::Url;

#[cfg(target_arch = "wasm32")]
pub trait ApiBounds {}
#[cfg(target_arch = "wasm32")]
impl<T> ApiBounds for T {}

#[cfg(not(target_arch = "wasm32"))]
pub trait ApiBounds: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> ApiBounds for T {}

/// Everything the front-ends need from the outside world.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChartApi: ApiBounds {
    async fn fetch_scenarios(&self) -> Result<ScenarioDocument>;
    async fn fetch_roles(&self) -> Result<RoleDocument>;
    /// Returns the chart text of a successful response.
    async fn generate(&self, request: &GenerateRequest) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Remote(Url),
    #[cfg(not(target_arch = "wasm32"))]
    File(PathBuf),
}

#[cfg(target_arch = "wasm32")]
fn resolve(location: &str) -> Result<Location> {
    match Url::parse(location) {
        Ok(url) => Ok(Location::Remote(url)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let href = web_sys::window()
                .ok_or(anyhow!("No window"))?
                .location()
                .href()
                .map_err(|e| anyhow!("Location error: {:?}", e))?;
            let base = Url::parse(&href).context("Invalid page URL")?;
            Ok(Location::Remote(base.join(location)?))
        }
        Err(e) => Err(anyhow!("Invalid URL {}: {}", location, e)),
    }
}

/// Anything that is not an http(s) URL is read from disk.
#[cfg(not(target_arch = "wasm32"))]
fn resolve(location: &str) -> Result<Location> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Location::Remote(url)),
        Ok(url) if url.scheme() == "file" => url
            .to_file_path()
            .map(Location::File)
            .map_err(|_| anyhow!("Invalid file URL: {}", location)),
        _ => Ok(Location::File(PathBuf::from(location))),
    }
}

fn resolve_remote(location: &str) -> Result<Url> {
    match resolve(location)? {
        Location::Remote(url) => Ok(url),
        #[cfg(not(target_arch = "wasm32"))]
        Location::File(_) => Err(anyhow!("Not an http(s) URL: {}", location)),
    }
}

pub struct HttpChartApi {
    client: Client,
    scenarios_url: String,
    roles_url: String,
    generate_url: Url,
}

impl HttpChartApi {
    pub fn new(config: &Config) -> Result<Self> {
        let generate_url = resolve_remote(&config.generate_url)
            .context("generate_url must point at the chart service")?;
        Ok(Self {
            client: Client::new(),
            scenarios_url: config.scenarios_url.clone(),
            roles_url: config.roles_url.clone(),
            generate_url,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, location: &str) -> Result<T> {
        match resolve(location)? {
            Location::Remote(url) => {
                debug!("GET {}", url);
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ChartError::Load {
                        url: location.to_string(),
                        status: status.as_u16(),
                    }
                    .into());
                }
                Ok(response.json::<T>().await?)
            }
            #[cfg(not(target_arch = "wasm32"))]
            Location::File(path) => {
                debug!("Reading {}", path.display());
                let content = tokio::fs::read(&path)
                    .await
                    .with_context(|| format!("Failed to load {}", location))?;
                serde_json::from_slice(&content).with_context(|| format!("Invalid JSON in {}", location))
            }
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChartApi for HttpChartApi {
    async fn fetch_scenarios(&self) -> Result<ScenarioDocument> {
        self.fetch_json(&self.scenarios_url).await
    }

    async fn fetch_roles(&self) -> Result<RoleDocument> {
        self.fetch_json(&self.roles_url).await
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        debug!(
            "POST {} scenario={} roles={:?}",
            self.generate_url, request.scenario_id, request.roles
        );
        let response = self
            .client
            .post(self.generate_url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ChartError::generate(body).into());
        }
        debug!("Chart received ({} bytes)", body.len());
        Ok(body)
    }
}
