use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// How many entries to ask for when listing every Pokemon in one page.
const LIST_LIMIT: u32 = 2000;

#[derive(Debug, Deserialize)]
pub struct PokemonListItem {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PokemonListResponse {
    pub count: u32,
    pub results: Vec<PokemonListItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
}

/// Read-only client for the public Pokemon API.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {url}");
        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json()?)
        } else {
            Err(anyhow::anyhow!("Request to {url} failed with status {status}"))
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetch_names(&self) -> anyhow::Result<Vec<String>> {
        let resp: PokemonListResponse = self.get(&format!("/pokemon?limit={LIST_LIMIT}"))?;
        tracing::debug!("Fetched {} of {} Pokemon names", resp.results.len(), resp.count);
        Ok(resp.results.into_iter().map(|p| p.name).collect())
    }

    pub fn fetch_details(&self, name: &str) -> anyhow::Result<PokemonDetails> {
        let name = name.trim().to_lowercase();
        self.get(&format!("/pokemon/{name}"))
            .map_err(|e| anyhow::anyhow!("Could not load details for '{name}': {e}"))
    }
}
