use anyhow::Context;
use log::{info, warn};
use medlink::{group_outpatient_episodes, EpisodeConfig, OutpatientRecord};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path_arg) = std::env::args().nth(1) else {
        warn!("usage: medlink <records.json>");
        return Ok(());
    };
    let path = Path::new(&path_arg);
    if !path.exists() {
        warn!("Records file not found: {}", path.display());
        return Ok(());
    }

    info!("Loading outpatient records from: {}", path.display());
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<OutpatientRecord> =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    info!("Loaded {} records", records.len());

    let grouping = group_outpatient_episodes(&records, &EpisodeConfig::default())?;

    for episode in &grouping.episodes {
        info!(
            "{}: {} records, {} ~ {}, group {}",
            episode.id,
            episode.record_count(),
            episode.start_date,
            episode.end_date,
            episode
                .diagnostic_group
                .map_or("unresolved", |g| g.display_name())
        );
    }
    info!(
        "{} episodes from {} records ({} merges)",
        grouping.stats.episode_count, grouping.stats.total_records, grouping.stats.merged_count
    );

    println!("{}", serde_json::to_string_pretty(&grouping)?);
    Ok(())
}
