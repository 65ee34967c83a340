use std::env;
use std::ffi::OsStr;
use std::path::Path;

use log::{error, info};
use seahorse::{App, Command, Context, Flag, FlagType};

use attendance_list::generate_attendance_list;
use attendance_list::input::{Config, ConfigBuilder, InvalidArgument};
use attendance_list::locale::Locale;
use attendance_list::time::{Month, Year};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::fmt;
    use std::path::PathBuf;

    use log::error;
    use seahorse::Context;

    /// Logs the error and exits, seahorse actions can not return errors.
    pub fn exit_on_error<E: fmt::Debug>(result: Result<(), E>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .map_err(|e| anyhow::anyhow!("missing required flag \"{}\": {:?}", name, e))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }

        fn required_usize_flag(&self, name: &str) -> Result<usize, anyhow::Error> {
            let value = self
                .context()
                .int_flag(name)
                .map_err(|e| anyhow::anyhow!("missing required flag \"{}\": {:?}", name, e))?;

            usize::try_from(value)
                .map_err(|_| anyhow::anyhow!("flag \"{}\" must not be negative", name))
        }

        fn optional_path_flag(&self, name: &str) -> Option<PathBuf> {
            self.context().string_flag(name).ok().map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

/// Applies the flags both commands share.
fn apply_common_flags(context: &Context, builder: &mut ConfigBuilder) {
    if let Some(output) = context.optional_path_flag("output") {
        builder.output(output);
    }

    if let Some(preserve_dir) = context.optional_path_flag("preserve-dir") {
        builder.preserve_dir(preserve_dir);
    }

    builder.dump_json(context.bool_flag("dump-json"));

    if context.bool_flag("no-colors") {
        builder.colors(false);
    }
}

fn build_config(context: &Context, path: &Path) -> anyhow::Result<Config> {
    let workspace = dunce::canonicalize(path)
        .map_err(|e| anyhow::anyhow!("failed to find `{}`: {}", path.display(), e))?
        .parent()
        .ok_or_else(|| anyhow::anyhow!("the attendance file should have a parent directory"))?
        .to_path_buf();

    let mut builder = Config::try_from_toml_file(path)?;
    builder.workspace(workspace);
    apply_common_flags(context, &mut builder);

    let config = builder.build()?;

    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let path = context.required_path_flag("config")?;
    let config = build_config(context, &path)?;

    generate_attendance_list(&config)?;

    Ok(())
}

fn quick(context: &Context) -> anyhow::Result<()> {
    let number = context.required_usize_flag("month")?;
    let month = Month::try_from(number).map_err(|_| InvalidArgument::InvalidMonth { number })?;
    let year = Year::new(context.required_usize_flag("year")?);

    let locale = match context.string_flag("locale") {
        Ok(locale) => locale.parse::<Locale>()?,
        Err(_) => Locale::default(),
    };

    let mut builder = Config::builder(context.args.clone(), month, year, locale);
    apply_common_flags(context, &mut builder);

    generate_attendance_list(&builder.build()?)?;

    Ok(())
}

fn output_flags(command: Command) -> Command {
    command
        .flag(
            Flag::new("output", FlagType::String)
                .description("[optional] Path to the pdf file.")
                .alias("o"),
        )
        .flag(
            Flag::new("preserve-dir", FlagType::String).description(
                "[optional] Copies the latex working directory here, if compiling fails.",
            ),
        )
        .flag(
            Flag::new("dump-json", FlagType::Bool)
                .description("[optional] Writes the document as json next to the pdf."),
        )
        .flag(
            Flag::new("no-colors", FlagType::Bool)
                .description("[optional] Disables the shading of the heading row and weekends."),
        )
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let make_command = output_flags(
        Command::new("make")
            .usage(format!("{} make --config <file> [args]", args[0]))
            .description("Makes an attendance list from the given attendance file.")
            .flag(
                Flag::new("config", FlagType::String)
                    .description("Path to the attendance file.")
                    .alias("c"),
            ),
    )
    .action(|context: &Context| exit_on_error(make(context)));

    let quick_command = output_flags(
        Command::new("quick")
            .usage(format!(
                "{} quick --month <n> --year <n> [args] \"Full Name\"...",
                args[0]
            ))
            .description("Makes an attendance list for the given names without a file.")
            .flag(Flag::new("month", FlagType::Int).description("The month from 1 to 12."))
            .flag(Flag::new("year", FlagType::Int).description("The year, like 2024."))
            .flag(
                Flag::new("locale", FlagType::String)
                    .description("[optional] One of `en`, `de` or `pl`. Default: `en`"),
            ),
    )
    .action(|context: &Context| exit_on_error(quick(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(make_command)
        .command(quick_command);

    app.run(args);

    Ok(())
}
