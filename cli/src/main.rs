mod diagnostics;
mod logging;
mod options;

use std::ffi::OsString;

use command_parser_core::{CommandParser, ParseOutcome};
use tracing::{debug, info, warn};

use crate::diagnostics::Diagnostic;
use crate::options::{FlexOptions, flex_spec};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    logging::init();

    let code = match run(std::env::args_os()) {
        Ok(code) => code,
        Err(diagnostic) => {
            diagnostic.emit();
            1
        }
    };
    std::process::exit(code);
}

fn run(argv: impl IntoIterator<Item = OsString>) -> Result<i32, Diagnostic> {
    let argv = argv
        .into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| {
                Diagnostic::error(format!("invalid UTF-8 in argument {}", arg.to_string_lossy()))
            })
        })
        .collect::<Result<Vec<String>, _>>()?;

    let parser = CommandParser::new(flex_spec()).map_err(|err| Diagnostic::fatal(err.to_string()))?;

    let outcome = parser.parse(argv).map_err(|err| {
        if let Some(usage) = err.usage() {
            print!("{usage}");
        }
        Diagnostic::error(err.to_string())
    })?;

    let bindings = match outcome {
        ParseOutcome::HelpRequested { usage } => {
            print!("{usage}");
            return Ok(0);
        }
        ParseOutcome::Parsed(bindings) => bindings,
    };

    match serde_json::to_string(&bindings) {
        Ok(json) => debug!(bindings = %json, "parsed command line"),
        Err(err) => warn!(error = %err, "failed to serialize bindings"),
    }

    let options = FlexOptions::from_bindings(&bindings);
    if options.version {
        println!("flex {PACKAGE_VERSION}");
        return Ok(0);
    }

    if options.files.is_empty() && !options.nowarn {
        Diagnostic::warning("no input files given, reading standard input").emit();
    }

    info!(
        files = options.files.len(),
        outfile = ?options.outfile,
        prefix = ?options.prefix,
        "scanner options resolved"
    );
    Ok(0)
}
