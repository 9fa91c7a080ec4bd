use serde::Serialize;

use super::pokeapi::{PokeApiClient, PokemonDetails};
use crate::config::Config;
use crate::sprites::sprite_url;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoOutput<'a> {
    #[serde(flatten)]
    details: &'a PokemonDetails,
    sprite_url: String,
}

pub fn run_pokemon_sprite(name: &str) -> anyhow::Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Pokemon name cannot be empty");
    }
    println!("{}", sprite_url(name));
    Ok(())
}

pub fn run_pokemon_list(config: &Config, search: Option<String>) -> anyhow::Result<()> {
    let client = PokeApiClient::new(config)?;
    let names = client
        .fetch_names()
        .map_err(|e| anyhow::anyhow!("Could not reach {}: {e}", client.base_url()))?;

    let needle = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    let matching: Vec<&String> = names.iter().filter(|n| n.contains(&needle)).collect();

    if matching.is_empty() {
        println!("No Pokemon found.");
        return Ok(());
    }

    for name in matching {
        println!("{name}");
    }

    Ok(())
}

pub fn run_pokemon_info(config: &Config, name: &str, json: bool) -> anyhow::Result<()> {
    let client = PokeApiClient::new(config)?;
    let details = client.fetch_details(name)?;
    let sprite = sprite_url(&details.name);

    if json {
        let output = InfoOutput {
            details: &details,
            sprite_url: sprite,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let types: Vec<&str> = details.types.iter().map(|t| t.kind.name.as_str()).collect();

    println!();
    println!("#{} {}", details.id, details.name);
    println!("  Types:  {}", types.join(", "));
    println!("  Height: {:.1} m", f64::from(details.height) / 10.0);
    println!("  Weight: {:.1} kg", f64::from(details.weight) / 10.0);
    if !details.stats.is_empty() {
        println!("  Base stats:");
        for stat in &details.stats {
            println!("    {:<16} {}", stat.stat.name, stat.base_stat);
        }
    }
    println!("  Sprite: {sprite}");
    println!();

    Ok(())
}
