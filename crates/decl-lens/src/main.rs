use std::{
    io::{self, BufWriter},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use decl_lens::{
    ClangFrontEnd, ToolSettings,
    config::{LogLevel, SourceLanguage},
};

#[derive(Parser, Debug)]
#[command(name = "decl-lens", version, about)]
struct Args {
    /// C/C++ source text to analyze (the code itself, not a path)
    source: Option<String>,

    /// Further positional arguments are accepted and ignored.
    #[arg(hide = true)]
    ignored: Vec<String>,

    /// Settings file; defaults to the nearest decl-lens.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// clang executable to run
    #[arg(long)]
    clang: Option<String>,

    /// Source language: c or c++
    #[arg(long)]
    lang: Option<String>,

    /// Language standard, e.g. c++17
    #[arg(long)]
    std: Option<String>,

    /// Extra flag forwarded to clang (repeatable)
    #[arg(long = "extra-arg", allow_hyphen_values = true)]
    extra_args: Vec<String>,

    /// File name printed for the analyzed source
    #[arg(long)]
    main_file_name: Option<String>,

    /// Print `Found declaration at L:C` after function and record lines
    #[arg(long)]
    locations: bool,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn apply_to(
        &self,
        settings: &mut ToolSettings,
    ) {
        let frontend = &mut settings.frontend;
        if let Some(clang) = &self.clang {
            frontend.clang_path = clang.clone();
        }
        if let Some(lang) = &self.lang {
            match SourceLanguage::from_setting_value(lang) {
                Some(language) => frontend.language = language,
                None => warn!("Ignoring unknown --lang {lang:?}"),
            }
        }
        if let Some(std) = &self.std {
            frontend.std = Some(std.clone());
        }
        frontend.extra_flags.extend(self.extra_args.iter().cloned());
        if let Some(name) = &self.main_file_name {
            frontend.main_file_name = name.clone();
        }
        if self.locations {
            settings.report.show_locations = true;
        }
        if self.verbose {
            settings.logging.level = LogLevel::Debug;
        }
        settings.normalize();
    }
}

fn init_logging(
    level: LogLevel,
    log_file: Option<&Path>,
) {
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(EnvFilter::new(level.as_directive()));

    let file_layer = log_file.map(|log_path| {
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new(".")),
            log_path.file_name().unwrap_or(std::ffi::OsStr::new("decl-lens.log")),
        );
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(false)
            .with_filter(EnvFilter::new(LogLevel::Debug.as_directive()))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

fn main() -> ExitCode {
    // Bad command lines are reported but still exit 0, like every other path.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut settings = ToolSettings::load(args.config.as_deref(), &cwd);
    args.apply_to(&mut settings);

    init_logging(settings.logging.level, args.log_file.as_deref());
    debug!("Settings: {settings:?}");
    if !args.ignored.is_empty() {
        debug!("Ignoring {} extra positional arguments", args.ignored.len());
    }

    let frontend = ClangFrontEnd::new(settings.frontend.clone());
    let stdout = io::stdout().lock();
    match decl_lens::run(args.source.as_deref(), &frontend, &settings, BufWriter::new(stdout)) {
        Ok(summary) => debug!(
            "Reported {} declarations, filtered {}, {} front-end diagnostics",
            summary.reported, summary.filtered, summary.diagnostics
        ),
        Err(e) => error!("{e}"),
    }

    // Front-end and reporting failures are logged, never reflected in the
    // exit status.
    ExitCode::SUCCESS
}
