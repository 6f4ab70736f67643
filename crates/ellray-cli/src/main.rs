//! ellray CLI - ray/ellipsoid intersection
//!
//! Reads a ray direction and origin offset from the command line and prints
//! the nearest point where the ray strikes the reference ellipsoid.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use ellray_raytrace::{intersect_ellipsoid, EllipsoidShape, Intersection, Ray};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "ellray")]
#[command(about = "Intersect a ray with a reference ellipsoid", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// x-component of the ray direction
    #[arg(value_name = "D_X")]
    d_x: f64,
    /// y-component of the ray direction
    #[arg(value_name = "D_Y")]
    d_y: f64,
    /// z-component of the ray direction
    #[arg(value_name = "D_Z")]
    d_z: f64,
    /// x-component of the ray origin offset (km)
    #[arg(value_name = "C_X")]
    c_x: f64,
    /// y-component of the ray origin offset (km)
    #[arg(value_name = "C_Y")]
    c_y: f64,
    /// z-component of the ray origin offset (km)
    #[arg(value_name = "C_Z")]
    c_z: f64,

    /// Equatorial radius of the ellipsoid (km)
    #[arg(long, value_name = "KM", default_value_t = EllipsoidShape::EARTH.equatorial_radius())]
    radius: f64,

    /// First eccentricity of the ellipsoid
    #[arg(long, value_name = "E", default_value_t = EllipsoidShape::EARTH.eccentricity())]
    eccentricity: f64,

    /// Print the result as JSON (a miss becomes `{"hit":null}`)
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonHit {
    point: [f64; 3],
    distance: f64,
}

#[derive(Serialize)]
struct JsonOutput {
    hit: Option<JsonHit>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)?;
    out.flush()?;
    Ok(())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let shape = EllipsoidShape::new(cli.radius, cli.eccentricity)?;
    let ray = Ray::from_components([cli.d_x, cli.d_y, cli.d_z], [cli.c_x, cli.c_y, cli.c_z]);
    log::debug!("intersecting {ray:?} with {shape:?}");

    let result = intersect_ellipsoid(&ray, &shape)?;
    if !result.is_hit() {
        log::info!("ray does not intersect the ellipsoid");
    }

    if cli.json {
        write_json(&result, out)
    } else {
        write_plain(&result, out)
    }
}

/// One component per line, full precision. A miss prints nothing.
fn write_plain(result: &Intersection, out: &mut impl Write) -> Result<()> {
    if let Some(p) = result.point() {
        writeln!(out, "{:?}", p.x)?;
        writeln!(out, "{:?}", p.y)?;
        writeln!(out, "{:?}", p.z)?;
    }
    Ok(())
}

fn write_json(result: &Intersection, out: &mut impl Write) -> Result<()> {
    let output = JsonOutput {
        hit: result.hit().map(|h| JsonHit {
            point: [h.point.x, h.point.y, h.point.z],
            distance: h.distance,
        }),
    };
    serde_json::to_writer(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}
