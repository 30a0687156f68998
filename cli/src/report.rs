use std::{fs::File, io::BufWriter, path::Path, time::Instant};

use anyhow::Context;
use log::info;
use serde::Serialize;
use shared::{
    engine::{brute_force, render_with_stats, RenderStats},
    models::{
        grid::{EscapeGrid, GridSummary},
        view::ViewParameters,
    },
};

#[derive(Serialize)]
struct Report<'a> {
    view: &'a ViewParameters,
    stats: Option<RenderStats>,
    summary: GridSummary,
    grid: &'a EscapeGrid,
}

/// Renders `view`, logs a summary and optionally dumps the grid as JSON.
pub fn render_view(view: &ViewParameters, exact: bool, output: Option<&Path>) -> anyhow::Result<()> {
    let started = Instant::now();
    let (grid, stats) = if exact {
        (brute_force(view)?, None)
    } else {
        let (grid, stats) = render_with_stats(view)?;
        (grid, Some(stats))
    };
    let summary = grid.summary();
    info!(
        "{}x{} grid in {:.2?}: {} escaped, {} bounded, counts {}..={}",
        grid.resolution(),
        grid.resolution(),
        started.elapsed(),
        summary.escaped,
        summary.bounded,
        summary.min,
        summary.max
    );

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let report = Report {
            view,
            stats,
            summary,
            grid: &grid,
        };
        serde_json::to_writer(BufWriter::new(file), &report)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Grid written to {}", path.display());
    }
    Ok(())
}
