//! geodome CLI — generate geodesic or spiral point distributions on the
//! sphere and emit them as CSV or JSON.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use geodome::{
    subdivide, spiral, BasePolyhedron, ClassPattern, EdgeDivision, PointSet, SpiralParams,
    SubdivisionParams,
};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geodome")]
#[command(about = "Geodesic and spiral point distributions on the sphere", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Subdivide a base polyhedron into a point set
    Tessellate {
        /// Base polyhedron
        #[arg(short, long, value_enum, default_value_t = BaseArg::Icosahedron)]
        base: BaseArg,
        /// Class pattern as M,N[,REPEATS]
        #[arg(short, long, default_value = "1,0,1")]
        class_pattern: String,
        /// Extra whole-pattern repeats (multiplies the frequency)
        #[arg(short, long, default_value_t = 1)]
        repeats: u32,
        /// Keep the flat-faced polyhedron instead of projecting onto the sphere
        #[arg(long)]
        flat: bool,
        /// Divide edges into equal angles instead of equal lengths
        #[arg(long)]
        equal_angle: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate a spiral point distribution
    Spiral {
        /// Number of turns around the polar axis
        #[arg(short, long, default_value_t = 10.0)]
        turns: f64,
        /// Explicit point spacing (derived from turns when omitted)
        #[arg(short, long)]
        spacing: Option<f64>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Csv)]
    format: Format,
    /// Emit longitude/latitude degrees instead of Cartesian coordinates
    #[arg(short, long)]
    angular: bool,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum BaseArg {
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Triangle,
}

impl From<BaseArg> for BasePolyhedron {
    fn from(value: BaseArg) -> Self {
        match value {
            BaseArg::Tetrahedron => BasePolyhedron::Tetrahedron,
            BaseArg::Octahedron => BasePolyhedron::Octahedron,
            BaseArg::Icosahedron => BasePolyhedron::Icosahedron,
            BaseArg::Triangle => BasePolyhedron::Triangle,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Record {
    Cartesian { x: f64, y: f64, z: f64 },
    Angular { lon: f64, lat: f64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tessellate {
            base,
            class_pattern,
            repeats,
            flat,
            equal_angle,
            output,
        } => {
            let pattern = parse_pattern(&class_pattern)?;
            let params = SubdivisionParams {
                base: base.into(),
                pattern,
                repeats,
                flat_faced: flat,
                division: if equal_angle {
                    EdgeDivision::EqualAngle
                } else {
                    EdgeDivision::EqualLength
                },
            };
            let points = subdivide(&params)?;
            emit(&points, &output)
        }
        Commands::Spiral {
            turns,
            spacing,
            output,
        } => {
            let params = SpiralParams {
                turns,
                point_spacing: spacing,
                ..SpiralParams::default()
            };
            let points = spiral(&params)?;
            emit(&points, &output)
        }
    }
}

/// Parse "M,N" or "M,N,REPEATS" into a class pattern.
fn parse_pattern(s: &str) -> Result<ClassPattern> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let nums: Vec<u32> = parts
        .iter()
        .map(|p| p.parse().with_context(|| format!("bad class pattern component '{p}'")))
        .collect::<Result<_>>()?;
    let (m, n, reps) = match nums.as_slice() {
        [m, n] => (*m, *n, 1),
        [m, n, reps] => (*m, *n, *reps),
        _ => bail!("class pattern must be M,N or M,N,REPEATS, got '{s}'"),
    };
    Ok(ClassPattern::new(m, n, reps)?)
}

fn emit(points: &PointSet, output: &OutputArgs) -> Result<()> {
    let records: Vec<Record> = if output.angular {
        points
            .to_lonlat()?
            .into_iter()
            .map(|(lon, lat)| Record::Angular { lon, lat })
            .collect()
    } else {
        points
            .points()
            .iter()
            .map(|p| Record::Cartesian {
                x: p.x,
                y: p.y,
                z: p.z,
            })
            .collect()
    };

    let text = match output.format {
        Format::Csv => render_csv(&records, output.angular),
        Format::Json => serde_json::to_string_pretty(&records)?,
    };

    match &output.out {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

fn render_csv(records: &[Record], angular: bool) -> String {
    let mut text = String::from(if angular { "lon,lat\n" } else { "x,y,z\n" });
    for r in records {
        match r {
            Record::Cartesian { x, y, z } => {
                text.push_str(&format!("{x},{y},{z}\n"));
            }
            Record::Angular { lon, lat } => {
                text.push_str(&format!("{lon},{lat}\n"));
            }
        }
    }
    text
}
