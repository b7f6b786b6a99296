mod app;
mod chart;
mod color;
mod data;
mod error;
mod ui;

use std::path::Path;

use anyhow::Context;

/// Log written by the ADS1115 sampling loop, relative to the working directory.
const INPUT_PATH: &str = "adc_log.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = Path::new(INPUT_PATH);
    let table = data::loader::load_csv(path).context("loading sample table")?;
    log::info!(
        "Loaded {} samples with columns {:?}",
        table.len(),
        table.column_names()
    );

    let spec = chart::build_chart(&table).context("building chart")?;
    app::show(spec).context("displaying chart")?;

    Ok(())
}
