use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::seq::SliceRandom;
use shared::models::poi::PointOfInterest;

use crate::report::render_view;

#[derive(Parser, Debug)]
pub struct TourCommand {
    /// seahorse-spiral, tendrils or seahorse-valley
    #[arg(short, long)]
    pub name: Option<String>,

    /// Write the grid as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl TourCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let poi = match &self.name {
            Some(name) => PointOfInterest::find(name)?,
            None => {
                let all = PointOfInterest::all();
                all.choose(&mut rand::thread_rng())
                    .copied()
                    .ok_or_else(|| anyhow::anyhow!("The point of interest list is empty"))?
            }
        };
        info!("Touring {}", poi.name);
        render_view(&poi.view, false, self.output.as_deref())
    }
}
