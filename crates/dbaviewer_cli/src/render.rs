//! Terminal rendering of core view-models.
//!
//! Layout is owned here; every text decision (truncation, defaults,
//! previews) comes from the view-models.

use dbaviewer_core::{
    ActivityModalView, CardView, CatalogPage, CatalogStats, StandardModalView, ViewMode,
};
use std::io::{self, Write};

pub fn render_stats(out: &mut impl Write, stats: CatalogStats) -> io::Result<()> {
    write!(out, "{} estándares en total", stats.total)?;
    if stats.filtered_differs() {
        write!(out, " · {} mostrados", stats.filtered)?;
    }
    writeln!(out)
}

pub fn render_page(out: &mut impl Write, page: &CatalogPage) -> io::Result<()> {
    render_stats(out, page.stats)?;
    if page.is_empty() {
        return writeln!(out, "No se encontraron estándares con los filtros actuales.");
    }

    for card in &page.cards {
        match page.view_mode {
            ViewMode::Cards => render_card(out, card)?,
            ViewMode::List => render_list_row(out, card)?,
        }
    }
    Ok(())
}

fn render_list_row(out: &mut impl Write, card: &CardView) -> io::Result<()> {
    writeln!(
        out,
        "[{:>3}] {:<5} {:<12} {}",
        card.id.0, card.grade_badge, card.subject, card.title
    )
}

fn render_card(out: &mut impl Write, card: &CardView) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "#{} [{}] {}", card.id, card.grade_badge, card.subject)?;
    writeln!(out, "  {}", card.title)?;

    if let Some(example) = &card.example {
        writeln!(out, "  Ejemplo: {example}")?;
    }

    if !card.evidence_preview.is_empty() {
        writeln!(out, "  Evidencias de Aprendizaje")?;
        for evidence in &card.evidence_preview {
            writeln!(out, "    - {evidence}")?;
        }
        if card.hidden_evidence_count > 0 {
            writeln!(out, "    +{} más...", card.hidden_evidence_count)?;
        }
    }

    if !card.activity_preview.is_empty() {
        writeln!(out, "  Actividades en Casa")?;
        for activity in &card.activity_preview {
            writeln!(out, "    ({}) {}", activity.index, activity.title)?;
            writeln!(out, "        Materiales: {}", activity.materials_preview)?;
        }
        if card.show_all_activities {
            writeln!(
                out,
                "    Ver todas las {} actividades: open {}",
                card.total_activities, card.id
            )?;
        }
    }
    Ok(())
}

pub fn render_standard_modal(out: &mut impl Write, view: &StandardModalView) -> io::Result<()> {
    writeln!(out, "== {} ==", view.title)?;
    writeln!(out, "Enunciado")?;
    writeln!(out, "  {}", view.statement)?;

    if let Some(example) = &view.example {
        writeln!(out, "Ejemplo")?;
        writeln!(out, "  {example}")?;
    }

    if !view.evidences.is_empty() {
        writeln!(out, "Evidencias de Aprendizaje")?;
        for evidence in &view.evidences {
            writeln!(out, "  - {evidence}")?;
        }
    }

    if !view.activities.is_empty() {
        writeln!(out, "Actividades en Casa")?;
        for link in &view.activities {
            writeln!(out, "  ({}) {}", link.target.index(), link.title)?;
            writeln!(out, "      Materiales: {}", link.materials)?;
            writeln!(
                out,
                "      Detalles: activity {} {}",
                link.target.standard(),
                link.target.index()
            )?;
        }
    }
    Ok(())
}

pub fn render_activity_modal(out: &mut impl Write, view: &ActivityModalView) -> io::Result<()> {
    writeln!(out, "== {} ==", view.title)?;
    writeln!(out, "Materiales Necesarios")?;
    for material in &view.materials {
        writeln!(out, "  - {material}")?;
    }
    writeln!(
        out,
        "Grado: {} · Área: {} · Pasos: {}",
        view.related.level, view.related.area, view.step_count
    )?;

    if !view.steps.is_empty() {
        writeln!(out, "Instrucciones Paso a Paso")?;
        for (position, step) in view.steps.iter().enumerate() {
            writeln!(out, "  {}. {step}", position + 1)?;
        }
    }

    writeln!(out, "Estándar Relacionado")?;
    writeln!(
        out,
        "  {} - {}: {}",
        view.related.area, view.related.level, view.related.statement
    )
}
