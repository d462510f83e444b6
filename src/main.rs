use std::io::Write;
use std::path::Path;

use anyhow::Result;

use century_lens::data::loader::{self, LoadError};
use century_lens::state::DashboardState;
use century_lens::ui;

/// Backend data file, relative to the working directory. The dashboard needs
/// no upload step or flags; run `generate_sample` once to create the file.
const DATA_FILE: &str = "data/centuries.csv";

fn main() -> Result<()> {
    env_logger::init();

    let mut state = DashboardState::default();
    match loader::load_file(Path::new(DATA_FILE)) {
        Ok(dataset) => {
            log::info!("loaded {} innings from {DATA_FILE}", dataset.len());
            state.set_dataset(dataset);
        }
        // Missing data is a visible message, not a failure.
        Err(LoadError::DataSourceNotFound { .. }) => {
            log::warn!("data source missing: {DATA_FILE}");
            state.status_message = Some(format!(
                "Data file '{DATA_FILE}' not found. Run `cargo run --bin generate_sample` to create it."
            ));
        }
        Err(err) => return Err(err.into()),
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ui::report::render(&mut out, &state)?;
    out.flush()?;
    Ok(())
}
