//! `dbaviewer` terminal adapter.
//!
//! # Responsibility
//! - Resolve configuration from env and flags, then load the dataset once.
//! - Bind shell commands and one-shot subcommands to core services.
//!
//! # Invariants
//! - A dataset load failure is reported and the process exits with status 1
//!   without entering the interactive state.

mod args;
mod render;
mod shell;

use args::{CliArgs, Command};
use clap::Parser;
use dbaviewer_core::config::parse_debounce_ms;
use dbaviewer_core::db::open_db;
use dbaviewer_core::{
    default_log_level, export_to_sqlite, init_logging, load_catalog, render_sql_script, Catalog,
    CatalogService, FilterInput, JsonFileSource, ViewMode, ViewerConfig,
};
use log::info;
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let config = resolve_config(&args)?;
    let catalog = load_catalog(&JsonFileSource::new(&config.data_path)).map_err(|err| {
        format!("no se pudieron cargar los datos; verifica que el archivo JSON esté disponible ({err})")
    })?;
    info!(
        "event=cli_ready module=cli status=ok standards={} data_path={}",
        catalog.len(),
        config.data_path.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command.unwrap_or(Command::Browse) {
        Command::Browse => {
            let mut service = CatalogService::new(catalog, config);
            shell::run(&mut service, io::stdin().lock(), &mut out)?;
        }
        Command::List {
            search,
            grade,
            activities_only,
            view,
        } => {
            let input = FilterInput {
                search: search.unwrap_or_default(),
                grade,
                activities_only,
            };
            let view_mode = view.parse::<ViewMode>()?;
            list_once(catalog, config, input, view_mode, &mut out)?;
        }
        Command::ExportSql { out: Some(path) } => {
            std::fs::write(&path, render_sql_script(&catalog))?;
            writeln!(out, "Conversión completada: {}", path.display())?;
        }
        Command::ExportSql { out: None } => {
            writeln!(out, "{}", render_sql_script(&catalog))?;
        }
        Command::ExportSqlite { db } => {
            let mut conn = open_db(&db)?;
            let summary = export_to_sqlite(&catalog, &mut conn)?;
            writeln!(
                out,
                "Exportados {} estándares ({} solo ejemplo, {} omitidos) a {}",
                summary.full + summary.example_only,
                summary.example_only,
                summary.skipped,
                db.display()
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

fn resolve_config(args: &CliArgs) -> Result<ViewerConfig, Box<dyn Error>> {
    let mut config = ViewerConfig::from_env()?;
    if let Some(path) = &args.data {
        config.data_path = path.clone();
    }
    if let Some(raw) = args.debounce_ms.as_deref() {
        config.search_debounce = parse_debounce_ms(raw)?;
    }
    Ok(config)
}

fn list_once(
    catalog: Catalog,
    config: ViewerConfig,
    input: FilterInput,
    view_mode: ViewMode,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut service = CatalogService::new(catalog, config);
    service.set_view_mode(view_mode);
    service.set_grade(input.grade);
    if input.activities_only {
        service.toggle_activities_only();
    }
    service.set_search(input.search);
    render::render_page(out, &service.page())
}
