//! vitals — terminal preview of the health-ring dashboard card engine.
//!
//! Wires the full stack (config → card → history cache → sparkline) against
//! simulated host capabilities and prints the result. Run with:
//! `RUST_LOG=info vitals`

use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;
use vitals_card::{Card, Section};
use vitals_core::{RawSample, StateSource};
use vitals_history::HistorySource;

/// Scripted current values, keyed like a real host state table.
struct DemoState(HashMap<String, String>);

impl StateSource for DemoState {
    fn current_value(&self, entity_id: &str) -> Option<String> {
        self.0.get(entity_id).cloned()
    }
}

/// Synthetic history: one reading per hour over the requested window, with a
/// per-key offset so every metric gets its own curve.
struct DemoHistory;

impl HistorySource for DemoHistory {
    async fn fetch_history(
        &self,
        entity_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> vitals_core::Result<Vec<RawSample>> {
        let seed = entity_id.bytes().map(u64::from).sum::<u64>() as f64;
        let mut samples = Vec::new();
        let mut t = from;
        while t <= to {
            let hours = (t - from).num_hours() as f64;
            let value = 50.0 + seed % 40.0 + 10.0 * ((hours + seed) * 0.7).sin();
            samples.push(RawSample::new(t, format!("{value:.1}")));
            t += chrono::Duration::hours(1);
        }
        Ok(samples)
    }
}

fn demo_state(prefix: &str) -> DemoState {
    let readings = [
        ("sleep_score", "82"),
        ("recovery_index", "67"),
        ("movement_index", "45"),
        ("total_sleep", "448"),
        ("sleep_efficiency", "93"),
        ("deep_sleep", "96"),
        ("rem_sleep", "104"),
        ("light_sleep", "248"),
        ("restorative_sleep", "38"),
        ("spo2", "97"),
        ("heart_rate", "64"),
        ("resting_heart_rate", "52"),
        ("hrv", "58.5"),
        ("steps", "12345"),
        ("skin_temperature", "36.7"),
        ("vo2_max", "47"),
        ("metabolic_score", "71"),
        ("average_glucose", "98"),
        ("glucose_variability", "14"),
        ("hba1c", "5.4"),
        // Left unknown on purpose so the placeholder path shows up too.
        ("time_in_target", "unknown"),
    ];
    DemoState(
        readings
            .into_iter()
            .map(|(key, value)| (format!("{prefix}_{key}"), value.to_string()))
            .collect(),
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("vitals v{} preview starting", env!("CARGO_PKG_VERSION"));

    let config = vitals_config::load(vitals_config::default_path())?;
    let state = demo_state(&config.prefix);
    let mut card = Card::new(state, DemoHistory, &config);

    println!("── Scores ──");
    for ring in card.score_rings() {
        let value = ring
            .value
            .map_or_else(|| "--".to_string(), |v| format!("{v:.0}"));
        println!("{:<10} {:>4}  {}", ring.label, value, ring.color);
    }

    for section in Section::ALL {
        println!("\n── {} ──", section.title());
        for &metric in section.metrics() {
            let row = card.row(metric).await;
            let values: Vec<f64> = card.series(metric).await.iter().map(|s| s.value).collect();
            println!(
                "{:<16} {:>10}  {}",
                row.label,
                row.display,
                vitals_sparkline::text::render(&values, 24)
            );
        }
    }

    Ok(())
}
