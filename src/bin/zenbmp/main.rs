use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::exit;

use log::debug;
use zenbmp::{BmpError, Presenter};

use crate::cmd_args::ViewOptions;
use crate::terminal::TerminalPresenter;

mod cmd_args;
mod terminal;

/// Columns used when `$COLUMNS` is unset or unparsable.
const DEFAULT_COLUMNS: usize = 80;

fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(DEFAULT_COLUMNS)
}

fn read_input(path: &Path) -> Result<Vec<u8>, BmpError> {
    let mut file = File::open(path).map_err(|source| BmpError::FileNotFound {
        path: path.display().to_string(),
        source,
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(BmpError::Io)?;
    Ok(data)
}

/// Headers are summarised before the pixel data is decoded, so files the
/// decoder rejects (compressed ones, say) still get their summary printed.
fn run<W: Write>(opts: &ViewOptions, out: &mut W, columns: usize) -> Result<(), BmpError> {
    let data = read_input(&opts.path)?;

    let headers = zenbmp::read_headers(&data)?;
    if opts.show_info {
        writeln!(out, "{}", headers.summary()).map_err(BmpError::Io)?;
    }

    let bitmap = zenbmp::decode_bmp(&data)?;
    if opts.show_display {
        let surface = bitmap.compose()?;
        TerminalPresenter::new(&mut *out, columns).present(&surface)?;
    }
    Ok(())
}

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = match cmd.try_get_matches_from(cmd_args::normalize_args(std::env::args_os())) {
        Ok(options) => options,
        Err(e) => {
            let _ = e.print();
            exit(cmd_args::usage_exit_code(&e));
        }
    };

    cmd_args::setup_logger(&options);

    // Nothing to do without a file.
    let Some(opts) = cmd_args::parse_options(&options) else {
        return;
    };

    let stdout = io::stdout();
    if let Err(e) = run(&opts, &mut stdout.lock(), terminal_columns()) {
        debug!("Could not display {}, reason {:?}", opts.path.display(), e);
        eprintln!("Error: {:?}: {e}", e.kind());
        exit(e.exit_code());
    }
}
