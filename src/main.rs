// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use vdiff_viewer::app::{self, Flags};

const HELP: &str = "\
vdiff-viewer: compare build screenshots against approved baselines

USAGE:
  vdiff-viewer [OPTIONS] [BASE]

ARGS:
  BASE                 Report URL (http/https) or local report directory

OPTIONS:
  --lang <LANG>        UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let base = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        base,
        config_dir,
    })
}
