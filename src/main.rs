// SPDX-License-Identifier: MPL-2.0
use flutter_preview::app::{self, config, paths, Flags};
use flutter_preview::logging;
use flutter_preview::preview::ThemePreference;

const HELP: &str = "\
Preview a Flutter UI component

USAGE:
  flutter-preview [OPTIONS] <COMPONENT_ID>

OPTIONS:
  --lang <LOCALE>           Interface language (e.g. en-US, fr)
  --config-dir <DIR>        Directory holding settings.toml
  --theme <MODE>            light, dark or system
  --title <TEXT>            Subtitle shown in the panel header
  --description <TEXT>      Caption (or setup copy when not configured)
  --height <PX>             Preview frame height (200-2000)
  --log-level <LEVEL>       error, warn, info, debug or trace
  --list                    Print the registered component ids and exit
  -h, --help                Print this help
";

fn parse_theme(raw: &str) -> Result<ThemePreference, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "light" => Ok(ThemePreference::Light),
        "dark" => Ok(ThemePreference::Dark),
        "system" => Ok(ThemePreference::System),
        other => Err(format!("unknown theme '{other}'")),
    }
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let level = args
        .opt_value_from_str::<_, String>("--log-level")
        .ok()
        .flatten()
        .and_then(|raw| logging::parse_level(&raw))
        .unwrap_or(logging::DEFAULT_LEVEL);
    logging::init(level);

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").ok().flatten();
    paths::init_cli_overrides(config_dir.clone());

    if args.contains("--list") {
        let (config, _) = config::load();
        for id in config.component_registry().ids() {
            println!("{id}");
        }
        return Ok(());
    }

    let theme = match args.opt_value_from_fn("--theme", parse_theme) {
        Ok(theme) => theme,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring --theme");
            None
        }
    };

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").ok().flatten(),
        config_dir,
        theme,
        title: args.opt_value_from_str("--title").ok().flatten(),
        description: args.opt_value_from_str("--description").ok().flatten(),
        height: args.opt_value_from_str("--height").ok().flatten(),
        component_id: String::new(),
    };

    let Some(component_id) = args
        .finish()
        .into_iter()
        .next()
        .and_then(|arg| arg.into_string().ok())
    else {
        eprint!("missing <COMPONENT_ID>\n\n{HELP}");
        std::process::exit(2);
    };

    app::run(Flags {
        component_id,
        ..flags
    })
}
