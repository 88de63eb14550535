//! `freecam` binary: fly around a reference grid.
//!
//! Usage: `freecam [PRESET.toml]` or `freecam --schema` to dump the JSON
//! Schema of the UI-exposed options.

use std::{io::Write, path::Path, process::ExitCode};

use freecam::{FreecamError, Options, Viewer};

fn write_schema() -> Result<(), FreecamError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| FreecamError::OptionsParse(e.to_string()))?;
    writeln!(std::io::stdout().lock(), "{schema}")?;
    Ok(())
}

fn run(arg: Option<String>) -> Result<(), FreecamError> {
    let options = match arg.as_deref() {
        Some("--schema") => return write_schema(),
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    Viewer::builder().with_options(options).build().run()
}

fn main() -> ExitCode {
    env_logger::init();

    match run(std::env::args().nth(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
