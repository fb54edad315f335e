//! Interactive shell binding typed commands to catalog service events.
//!
//! Each input line is one UI event. Search text goes through the service
//! debouncer and is flushed at end of line, the same way Enter commits a
//! search box.

use crate::render::{render_activity_modal, render_page, render_standard_modal};
use dbaviewer_core::{CatalogService, NavigationOutcome, StandardId, ViewMode};
use log::debug;
use std::io::{self, BufRead, Write};
use std::time::Instant;

const HELP: &str = "\
Comandos:
  search <texto>       buscar en enunciados, ejemplos, evidencias y actividades
  grade <grado>|all    filtrar por grado
  grades               listar grados disponibles
  activities           alternar 'solo actividades'
  view cards|list      cambiar la vista
  open <id>            ver el estándar completo
  activity <id> <n>    ver una actividad en casa
  close | esc          cerrar ventanas
  back                 volver a la vista anterior
  show                 repetir la página actual
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Grade(Option<String>),
    Grades,
    ToggleActivities,
    View(ViewMode),
    Open(StandardId),
    Activity(StandardId, usize),
    Close,
    Back,
    Show,
    Help,
    Quit,
}

/// Parses one input line; `Err` carries a user-facing message.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "grade" | "g" => match rest {
            "" | "all" => ShellCommand::Grade(None),
            grade => ShellCommand::Grade(Some(grade.to_string())),
        },
        "grades" => ShellCommand::Grades,
        "activities" | "a" => ShellCommand::ToggleActivities,
        "view" | "v" => ShellCommand::View(rest.parse().map_err(|err| format!("{err}"))?),
        "open" | "o" => ShellCommand::Open(parse_id(rest)?),
        "activity" => {
            let mut parts = rest.split_whitespace();
            let id = parse_id(parts.next().unwrap_or(""))?;
            let index = parts
                .next()
                .and_then(|value| value.parse::<usize>().ok())
                .ok_or_else(|| "uso: activity <id> <n>".to_string())?;
            ShellCommand::Activity(id, index)
        }
        "close" | "esc" => ShellCommand::Close,
        "back" => ShellCommand::Back,
        "show" | "ls" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("comando desconocido `{other}`; escribe `help`")),
    };
    Ok(Some(command))
}

fn parse_id(value: &str) -> Result<StandardId, String> {
    value
        .trim()
        .parse::<u32>()
        .map(StandardId)
        .map_err(|_| format!("id inválido `{value}`"))
}

/// Applies one command; returns `false` when the shell should exit.
pub fn execute(
    service: &mut CatalogService,
    command: ShellCommand,
    out: &mut impl Write,
) -> io::Result<bool> {
    debug!("event=shell_command module=cli command={command:?}");
    match command {
        ShellCommand::Search(text) => {
            service.on_search_input(text, Instant::now());
            service.flush_search();
            render_page(out, &service.page())?;
        }
        ShellCommand::Grade(grade) => {
            service.set_grade(grade);
            render_page(out, &service.page())?;
        }
        ShellCommand::Grades => {
            writeln!(out, "Grados: {}", service.grade_options().join(", "))?;
        }
        ShellCommand::ToggleActivities => {
            let label = if service.toggle_activities_only() {
                "Mostrando Solo Actividades"
            } else {
                "Solo Actividades: desactivado"
            };
            writeln!(out, "{label}")?;
            render_page(out, &service.page())?;
        }
        ShellCommand::View(mode) => {
            service.set_view_mode(mode);
            render_page(out, &service.page())?;
        }
        ShellCommand::Open(id) => match service.open_standard(id) {
            Ok(view) => render_standard_modal(out, &view)?,
            Err(err) => writeln!(out, "{err}")?,
        },
        ShellCommand::Activity(id, index) => match service.open_activity(id, index) {
            Ok(view) => render_activity_modal(out, &view)?,
            Err(err) => writeln!(out, "{err}")?,
        },
        ShellCommand::Close => service.close_modals(),
        ShellCommand::Back => {
            if service.back_to_previous_view() == NavigationOutcome::Fallback {
                render_page(out, &service.page())?;
            }
        }
        ShellCommand::Show => render_page(out, &service.page())?,
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Reads commands from `input` until EOF or `quit`.
pub fn run(
    service: &mut CatalogService,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    render_page(out, &service.page())?;
    writeln!(out, "Escribe `help` para ver los comandos.")?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Some(command)) => {
                if !execute(service, command, out)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(message) => writeln!(out, "{message}")?,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_command, run, ShellCommand};
    use dbaviewer_core::{
        load_catalog, CatalogService, JsonStrSource, StandardId, ViewMode, ViewerConfig,
    };

    #[test]
    fn parses_commands_and_arguments() {
        assert_eq!(
            parse_command("search  suma de fracciones "),
            Ok(Some(ShellCommand::Search("suma de fracciones".to_string())))
        );
        assert_eq!(parse_command("grade all"), Ok(Some(ShellCommand::Grade(None))));
        assert_eq!(
            parse_command("grade 3°"),
            Ok(Some(ShellCommand::Grade(Some("3°".to_string()))))
        );
        assert_eq!(
            parse_command("view list"),
            Ok(Some(ShellCommand::View(ViewMode::List)))
        );
        assert_eq!(
            parse_command("activity 4 1"),
            Ok(Some(ShellCommand::Activity(StandardId(4), 1)))
        );
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(parse_command("open x").is_err());
        assert!(parse_command("activity 1").is_err());
        assert!(parse_command("view grid").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn session_filters_and_opens_modals() {
        let raw = r#"[
            {"nivel": "1°", "enunciado": "Cuenta"},
            {"nivel": "2°", "enunciado": "Suma", "actividades_en_casa": [
                {"titulo": "Dados", "materiales": ["Dos dados"], "paso_a_paso": ["Lanzar", "Sumar"]}
            ]}
        ]"#;
        let catalog = load_catalog(&JsonStrSource::new(raw)).unwrap();
        let mut service = CatalogService::new(catalog, ViewerConfig::default());
        let input = "grade 2°\nopen 1\nactivity 1 0\nesc\nquit\nsearch ignored\n";

        let mut out = Vec::new();
        run(&mut service, input.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1 mostrados"));
        assert!(text.contains("== Matemáticas - 2° =="));
        assert!(text.contains("  2. Sumar"));
        assert!(!service.ui().scroll_locked());
        assert!(service.filter_input().search.is_empty());
    }
}
