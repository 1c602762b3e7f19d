//! Tool to build figure specs and dump them as JSON
//!
//! The rendering layer (or a curious developer) can use this to inspect
//! exactly what either builder produces for a given set of parameters.

use clap::{Parser, Subcommand};

use trigviz::connection::parse_symmetry_selection;
use trigviz::{build_circular_function_figure, build_trig_connection_figure, AngleUnit, Theme};

#[derive(Parser)]
#[command(name = "figure_dump", about = "Dump a trigviz figure spec as JSON")]
struct Cli {
    /// Angle unit: degrees or radians
    #[arg(short, long, default_value = "degrees")]
    unit: String,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    figure: FigureCommand,
}

#[derive(Subcommand)]
enum FigureCommand {
    /// Animated circular-function figure (361 frames)
    Circular {
        /// Color theme: light or dark
        #[arg(short, long, default_value = "light")]
        theme: String,
    },
    /// Static trig-connection figure
    Connection {
        /// Acute angle in degrees, 0 to 90
        #[arg(short, long, default_value = "30")]
        angle: String,

        /// Symmetric quadrant to include (Q2, Q3, or Q4); repeatable
        #[arg(short = 'q', long = "quadrant")]
        quadrants: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let unit: AngleUnit = cli.unit.parse()?;
    let figure = match cli.figure {
        FigureCommand::Circular { theme } => {
            let theme: Theme = theme.parse()?;
            build_circular_function_figure(unit, theme)
        }
        FigureCommand::Connection { angle, quadrants } => {
            let active = parse_symmetry_selection(&quadrants)?;
            build_trig_connection_figure(unit, &active, &angle)?
        }
    };

    let json = if cli.pretty {
        figure.to_json_pretty()?
    } else {
        figure.to_json()?
    };
    println!("{}", json);
    Ok(())
}
