use std::env;
use std::ffi::OsStr;

use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use pensum::balance::format_balance;
use pensum::input::toml_input::{self, Global};
use pensum::input::{read_toml, Config};
use pensum::session::Session;
use pensum::{generate_report, prepare_session};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use std::path::PathBuf;

    use log::error;
    use seahorse::Context;

    /// Logs the error of a failed action and exits.
    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> anyhow::Result<String> {
            self.context()
                .string_flag(name)
                .map_err(|_| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> anyhow::Result<PathBuf> {
            self.required_string_flag(name).map(PathBuf::from)
        }

        fn required_usize_flag(&self, name: &str) -> anyhow::Result<usize> {
            let value = self
                .context()
                .int_flag(name)
                .map_err(|_| anyhow::anyhow!("missing or invalid flag \"{}\"", name))?;

            usize::try_from(value)
                .map_err(|_| anyhow::anyhow!("flag \"{}\" must not be negative", name))
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let global = context.required_path_flag("global")?;
    let month = context.required_path_flag("month")?;

    let workspace = dunce::canonicalize(&month)
        .map_err(|e| anyhow::anyhow!("failed to resolve \"{}\": {}", month.display(), e))?
        .parent()
        .ok_or_else(|| anyhow::anyhow!("month should have a parent directory"))?
        .to_path_buf();

    let mut builder = Config::try_from_toml_files(&month, &global)?;
    builder.workspace(workspace);

    if let Ok(output) = context.required_path_flag("output") {
        builder.output(output);
    }

    if let Ok(preserve_dir) = context.required_path_flag("preserve-dir") {
        builder.preserve_dir(preserve_dir);
    }

    let config = builder.build()?;

    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let path = generate_report(&config)?;

    info!("report written to \"{}\"", path.display());

    Ok(())
}

fn print_table(session: &Session, config: &Config) -> anyhow::Result<()> {
    let table = session
        .table(config.key())
        .ok_or_else(|| anyhow::anyhow!("no allocation for {}", config.key()))?;

    println!(
        "{} {:04}, {}",
        config.key().month().name(),
        config.key().year().as_usize(),
        config.settings().teacher_name()
    );
    println!(
        "{:<12}{:<14}{:>10}{:>10}{:>10}",
        "Data", "Dzień", "Przydział", "Pensum", "Różnica"
    );
    for day in table.days() {
        println!(
            "{:<12}{:<14}{:>10}{:>10}{:>10}",
            day.date().to_string(),
            day.week_day().name(),
            day.assigned_hours().to_string(),
            day.contracted_load().to_string(),
            format_balance(day.delta()),
        );
    }
    println!("Do wypłaty: {} godzin", format_balance(session.balance()));

    Ok(())
}

fn show(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let session = prepare_session(&config)?;

    if context.bool_flag("json") {
        let table = session
            .table(config.key())
            .ok_or_else(|| anyhow::anyhow!("no allocation for {}", config.key()))?;
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }

    print_table(&session, &config)
}

fn template(context: &Context) -> anyhow::Result<()> {
    let global: Global = read_toml(&context.required_path_flag("global")?)?;
    let year = context.required_usize_flag("year")?;
    let month = context.required_usize_flag("month")?;

    let mut session = Session::new(global.settings());
    let key = session.generate(year, month)?.key();
    session.apply_weekly(key)?;

    let table = session
        .table(key)
        .ok_or_else(|| anyhow::anyhow!("no allocation for {}", key))?;
    print!(
        "{}",
        toml::to_string(&toml_input::Month::from_work_month(table))?
    );

    Ok(())
}

fn input_flags(command: Command) -> Command {
    command
        .flag(Flag::new("global", FlagType::String).description("Path to the global file."))
        .flag(Flag::new("month", FlagType::String).description("Path to the month file."))
}

fn run() {
    let args: Vec<String> = env::args().collect();

    let make_command = input_flags(
        Command::new("make")
            .usage(format!("{} make [args]", args[0]))
            .description("Makes a report from the given files."),
    )
    .flag(Flag::new("output", FlagType::String).description(
        "[optional] Path to the output folder. Default: `<path to month>/pdfs/`",
    ))
    .flag(Flag::new("preserve-dir", FlagType::String).description(
        "[optional] Keeps the latex files in this folder if the compilation fails.",
    ))
    .action(|context: &Context| exit_on_error(make(context)));

    let show_command = input_flags(
        Command::new("show")
            .usage(format!("{} show [args]", args[0]))
            .description("Prints the allocation and the balance of the given files."),
    )
    .flag(Flag::new("json", FlagType::Bool).description("[optional] Prints the table as json."))
    .action(|context: &Context| exit_on_error(show(context)));

    let template_command = Command::new("template")
        .usage(format!(
            "{} template --global global.toml --year 2025 --month 3",
            args[0]
        ))
        .description("Prints a month file listing every business day of the month.")
        .flag(Flag::new("global", FlagType::String).description("Path to the global file."))
        .flag(Flag::new("year", FlagType::Int).description("The year of the month."))
        .flag(Flag::new("month", FlagType::Int).description("The month number, 1 to 12."))
        .action(|context: &Context| exit_on_error(template(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(make_command)
        .command(show_command)
        .command(template_command);

    app.run(args);
}
