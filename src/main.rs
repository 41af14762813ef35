use std::{
    error::Error as StdError,
    fs,
    io::{self, Write},
    path::Path,
    process,
};

use clap::Parser;
use sommario::{
    application::{
        error::AppError,
        manifest::{load_manifest, resolve_outline},
        toc::build_toc_view,
    },
    config::{CheckArgs, CliArgs, Command, RawSettings, RenderArgs, Settings, SettingsOverrides},
    domain::outline::{entry_count, validate_outline},
    infra::telemetry,
    presentation::views::render_toc,
};
use tracing::{dispatcher, error, info};

fn main() {
    if let Err(error) = run() {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    eprintln!("sommario: {error}");
    let mut current = error.source();
    while let Some(inner) = current {
        eprintln!("  caused by: {inner}");
        current = inner.source();
    }
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse();

    match args.command {
        Command::Render(render) => run_render(args.config_file.as_deref(), render),
        Command::Check(check) => run_check(args.config_file.as_deref(), check),
    }
}

fn load_settings(
    config_file: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<Settings, AppError> {
    let mut raw = RawSettings::load(config_file)?;
    raw.apply_overrides(overrides);
    Ok(Settings::from_raw(raw)?)
}

fn run_render(config_file: Option<&Path>, args: RenderArgs) -> Result<(), AppError> {
    let settings = load_settings(config_file, &args.overrides)?;
    telemetry::init(&settings.logging)?;

    let manifest = load_manifest(&args.manifest)?;
    let outline = resolve_outline(&manifest)?;
    info!(
        manifest = %args.manifest.display(),
        entries = entry_count(&outline),
        "rendering outline"
    );

    let view = build_toc_view(&outline);
    let html = render_toc(view, &settings.toc.label)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &html).map_err(|source| AppError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            info!(output = %path.display(), "outline written");
        }
        None => {
            io::stdout()
                .lock()
                .write_all(html.as_bytes())
                .map_err(AppError::WriteStdout)?;
        }
    }

    Ok(())
}

fn run_check(config_file: Option<&Path>, args: CheckArgs) -> Result<(), AppError> {
    let settings = load_settings(config_file, &args.overrides)?;
    telemetry::init(&settings.logging)?;

    let manifest = load_manifest(&args.manifest)?;
    let outline = resolve_outline(&manifest)?;
    validate_outline(&outline)?;

    info!(
        manifest = %args.manifest.display(),
        entries = entry_count(&outline),
        "outline is valid"
    );
    Ok(())
}
