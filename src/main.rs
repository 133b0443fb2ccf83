use std::{fs, path::PathBuf, process};

use clap::Parser;
use log::{LevelFilter, debug, info, warn};
use simple_logger::SimpleLogger;
use turtle_logo::{
    build_fan, build_path, build_path_3d, parse,
    render::to_svg,
    ast::InstructionList,
    turtle::{path::PointPath, point::Point2},
    view::ViewConfig,
};

/// turtle-logo validates a turtle-graphics program, expands its loops and
/// arithmetic, and prints the path the turtle walks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program file to run.
    file: PathBuf,

    /// Number of turtles fanned out evenly around the origin.
    #[arg(short, long, default_value_t = 1)]
    turtles: usize,

    /// Walk the program with a spatial turtle and project it onto XY.
    #[arg(long)]
    three_d: bool,

    /// Write the drawing to this SVG file.
    #[arg(long, value_name = "OUT")]
    svg: Option<PathBuf>,

    /// Drawing width in pixels.
    #[arg(long, default_value_t = ViewConfig::default().width)]
    width: u32,

    /// Drawing height in pixels.
    #[arg(long, default_value_t = ViewConfig::default().height)]
    height: u32,

    /// Scale each axis separately to fill the drawing.
    #[arg(long)]
    stretch: bool,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print only errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    const fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn view_config(&self) -> ViewConfig {
        ViewConfig { width: self.width,
                     height: self.height,
                     stretch_to_fit: self.stretch,
                     ..ViewConfig::default() }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = SimpleLogger::new().with_level(args.level()).env().init() {
        eprintln!("Failed to start logging: {e}");
    }

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(&args.file).map_err(|e| {
        format!("Failed to read the input file '{}': {e}", args.file.display())
    })?;

    let program = parse(&source)?;
    for warning in &program.warnings {
        warn!("{warning}");
    }
    info!("program was validated successfully");

    let paths = walk(&program.instructions, args);
    debug!("built {} paths", paths.len());

    if !args.quiet {
        println!("{}", program.instructions);
        for (index, path) in paths.iter().enumerate() {
            if paths.len() > 1 {
                println!("turtle {}:", index + 1);
            }
            for point in path {
                println!("{point}");
            }
        }
    }

    if let Some(out) = &args.svg {
        let document = to_svg(&paths, &args.view_config())?;
        svg::save(out, &document)?;
        info!("wrote {}", out.display());
    }

    Ok(())
}

fn walk(instructions: &InstructionList, args: &Args) -> Vec<PointPath<Point2>> {
    if args.three_d {
        return vec![build_path_3d(instructions).project_xy()];
    }
    match args.turtles {
        1 => vec![build_path(instructions)],
        count => build_fan(instructions, count),
    }
}
