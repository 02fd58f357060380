use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ModuleService, QuizService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownCommand(String),
    UnexpectedArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::UnexpectedArg(arg) => write!(f, "unexpected argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     # launch the desktop app (default)");
    eprintln!("  cargo run -p app -- check  # validate the authored content and exit");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG    log filter (default: info)");
}

struct DesktopApp {
    modules: Arc<ModuleService>,
    quizzes: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn modules(&self) -> Arc<ModuleService> {
        Arc::clone(&self.modules)
    }

    fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launch the UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            print_usage();
            ArgsError::UnknownCommand(first.to_string())
        })?,
    };
    if !argv.is_empty() {
        argv.remove(0);
    }
    if let Some(extra) = argv.first() {
        print_usage();
        return Err(ArgsError::UnexpectedArg(extra.clone()).into());
    }

    // Content is parsed and validated here; a broken module never
    // reaches a view.
    let services = AppServices::load()?;

    match cmd {
        Command::Check => {
            check(&services);
            Ok(())
        }
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                modules: services.modules(),
                quizzes: services.quizzes(),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Track the Attack")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn check(services: &AppServices) {
    for module in services.modules().modules() {
        tracing::info!(
            module = %module.id(),
            title = module.title(),
            topics = module.topics().len(),
            questions = module.questions().len(),
            "module ok"
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
