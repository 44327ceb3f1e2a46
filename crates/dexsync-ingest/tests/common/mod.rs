//! Shared fixtures for ingestion integration tests

#![allow(dead_code)]

use dexsync_ingest::pipeline::Throttle;
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::subscriber::DefaultGuard;

pub const NOTION_TOKEN: &str = "secret_test_token";
pub const DATABASE_ID: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f0";

/// Primary record for a single-type or dual-type pokemon
pub fn pokemon_json(id: u32, slug: &str, types: &[&str]) -> Value {
    json!({
        "id": id,
        "name": slug,
        "species": { "name": slug, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id) },
        "types": types
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "slot": i + 1, "type": { "name": name, "url": "https://pokeapi.co/api/v2/type/0/" } }))
            .collect::<Vec<_>>(),
        "sprites": {
            "front_default": format!("https://raw.example/sprites/{}.png", id),
            "back_default": null,
            "other": {
                "official-artwork": { "front_default": format!("https://raw.example/artwork/{}.png", id) }
            }
        },
        "height": 6,
        "weight": 85,
        "stats": [
            { "base_stat": 39, "stat": { "name": "hp" } },
            { "base_stat": 52, "stat": { "name": "attack" } },
            { "base_stat": 43, "stat": { "name": "defense" } },
            { "base_stat": 60, "stat": { "name": "special-attack" } },
            { "base_stat": 50, "stat": { "name": "special-defense" } },
            { "base_stat": 65, "stat": { "name": "speed" } }
        ]
    })
}

/// Species record with one English and one Japanese entry of each kind
pub fn species_json(id: u32, flavor_text: &str, genus: &str, generation: &str) -> Value {
    json!({
        "id": id,
        "flavor_text_entries": [
            { "flavor_text": "ほのおの ポケモン", "language": { "name": "ja" }, "version": { "name": "x" } },
            { "flavor_text": flavor_text, "language": { "name": "en" }, "version": { "name": "red" } }
        ],
        "genera": [
            { "genus": "とかげポケモン", "language": { "name": "ja" } },
            { "genus": genus, "language": { "name": "en" } }
        ],
        "generation": { "name": generation, "url": "https://pokeapi.co/api/v2/generation/1/" }
    })
}

/// Species record without any English entries
pub fn species_json_without_english(id: u32) -> Value {
    json!({
        "id": id,
        "flavor_text_entries": [
            { "flavor_text": "Texte", "language": { "name": "fr" } }
        ],
        "genera": [
            { "genus": "Pokémon Test", "language": { "name": "fr" } }
        ],
        "generation": { "name": "generation-iii" }
    })
}

pub fn created_page_json(id: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "url": format!("https://www.notion.so/{}", id),
        "properties": {}
    })
}

/// Throttle that records requested delays without sleeping
#[derive(Clone, Default)]
pub struct RecordingThrottle {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingThrottle {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

impl Throttle for RecordingThrottle {
    async fn wait(&self, delay: Duration) {
        self.waits.lock().unwrap().push(delay);
    }
}

/// Captures log output of the current thread
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    /// Install as the thread-local subscriber until the guard is dropped.
    ///
    /// Only valid with the current-thread runtime used by `#[tokio::test]`.
    pub fn install(&self) -> DefaultGuard {
        let buffer = Arc::clone(&self.buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || CaptureWriter(Arc::clone(&buffer)))
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}
