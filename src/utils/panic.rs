use better_panic::Settings;
use color_eyre::config::HookBuilder;
use color_eyre::eyre::Result;
use std::panic;
use std::process;
use tracing::error;

/// Install the color-eyre hooks and a panic hook that logs the report before
/// handing off to human-panic (release) or better-panic (debug)
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug in {}. Run with SITEUI_LOGLEVEL=debug and attach the log file when reporting it.",
            env!("CARGO_PKG_NAME")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    panic::set_hook(Box::new(move |panic_info| {
        let report = panic_hook.panic_report(panic_info).to_string();
        error!("panic: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));

            let file_path = handle_dump(&meta, panic_info);
            if print_msg(file_path, &meta).is_err() {
                eprintln!("{report}");
            }
        }

        #[cfg(debug_assertions)]
        {
            Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
