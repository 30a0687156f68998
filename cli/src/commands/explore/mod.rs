use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{error, info, warn};
use shared::{
    env,
    explorer::{Explorer, DEFAULT_ITERATIONS, DEFAULT_RESOLUTION},
};

use crate::report::render_view;

const HELP: &str = "\
in <px> <py>       zoom in around a pixel
out <px> <py>      zoom out around a pixel
center <px> <py>   recenter on a pixel
more / less        raise or lower the iteration multiplier
finer / coarser    double or halve the resolution
reset              back to the whole set
help               this list
quit               leave";

#[derive(Parser, Debug)]
pub struct ExploreCommand {
    /// Starting pixels per side
    #[arg(short, long)]
    pub resolution: Option<u32>,

    /// Base iteration count, scaled with the zoom depth
    #[arg(short, long)]
    pub iterations: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ZoomIn(f64, f64),
    ZoomOut(f64, f64),
    Center(f64, f64),
    More,
    Less,
    Finer,
    Coarser,
    Reset,
    Help,
    Quit,
}

impl Action {
    pub fn parse(line: &str) -> Option<Action> {
        let mut words = line.split_whitespace();
        let command = words.next()?;
        let mut pixel = || -> Option<(f64, f64)> {
            let px = words.next()?.parse().ok()?;
            let py = words.next()?.parse().ok()?;
            Some((px, py))
        };
        let action = match command {
            "in" => pixel().map(|(px, py)| Action::ZoomIn(px, py))?,
            "out" => pixel().map(|(px, py)| Action::ZoomOut(px, py))?,
            "center" => pixel().map(|(px, py)| Action::Center(px, py))?,
            "more" => Action::More,
            "less" => Action::Less,
            "finer" => Action::Finer,
            "coarser" => Action::Coarser,
            "reset" => Action::Reset,
            "help" => Action::Help,
            "quit" | "exit" => Action::Quit,
            _ => return None,
        };
        Some(action)
    }

    /// Applies the action, returns whether the view changed.
    pub fn apply(self, explorer: &mut Explorer, initial: &Explorer) -> bool {
        match self {
            Action::ZoomIn(px, py) => explorer.zoom_in(px, py),
            Action::ZoomOut(px, py) => explorer.zoom_out(px, py),
            Action::Center(px, py) => explorer.recenter(px, py),
            Action::More => explorer.more_iterations(),
            Action::Less => explorer.fewer_iterations(),
            Action::Finer => explorer.finer(),
            Action::Coarser => explorer.coarser(),
            Action::Reset => *explorer = *initial,
            Action::Help | Action::Quit => return false,
        }
        true
    }
}

impl ExploreCommand {
    pub fn run(self) -> anyhow::Result<()> {
        let resolution = self
            .resolution
            .unwrap_or_else(|| env::get_or(env::RESOLUTION_VAR, DEFAULT_RESOLUTION));
        let iterations = self
            .iterations
            .unwrap_or_else(|| env::get_or(env::ITERATIONS_VAR, DEFAULT_ITERATIONS));
        let initial = Explorer::new(resolution, iterations);
        let mut explorer = initial;

        println!("Input 'help' for the command list");
        render_view(&explorer.view(), false, None)?;

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!(">> ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            if line.trim().is_empty() {
                continue;
            }

            let action = match Action::parse(&line) {
                Some(action) => action,
                None => {
                    warn!("Unknown command: {}", line.trim());
                    continue;
                }
            };
            match action {
                Action::Quit => break,
                Action::Help => println!("{}", HELP),
                _ => {}
            }
            if action.apply(&mut explorer, &initial) {
                let view = explorer.view();
                info!(
                    "Center ({}, {}), size {}, {} iterations",
                    view.center.x, view.center.y, view.size, view.max_iterations
                );
                if let Err(e) = render_view(&view, false, None) {
                    error!("Failed to render the view: {}", e);
                }
            }
        }
        info!("Leaving exploration");
        Ok(())
    }
}
