use clap::Subcommand;

use self::{explore::ExploreCommand, render::RenderCommand, tour::TourCommand};

pub mod explore;
pub mod render;
pub mod tour;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🌀 Render a view
    ///
    /// Compute the escape counts of a square window of the complex plane.
    Render(RenderCommand),

    /// 🧭 Tour
    ///
    /// Render one of the known points of interest, picked at random unless named.
    Tour(TourCommand),

    /// 🔍 Explore
    ///
    /// Navigate the set from the terminal, one command per line.
    Explore(ExploreCommand),
}
