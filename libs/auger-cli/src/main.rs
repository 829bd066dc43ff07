//! `auger`: writes a conveyor screw mesh to an ASCII STL file.

mod args;

use anyhow::{Context, Result};
use auger_mesh::{export::save_stl, generate_conveyor_screw};
use clap::Parser;

use crate::args::Args;

fn main() -> Result<()> {
    let env = env_logger::Env::default()
        .filter_or("AUGER_LOG", "info")
        .write_style_or("AUGER_LOG_STYLE", "auto");
    env_logger::init_from_env(env);

    let args = Args::parse();
    let params = args.screw_params()?;

    if args.print_params {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    log::debug!("Resolved parameters: {:?}", params);

    let mesh = generate_conveyor_screw(&params).context("failed to generate conveyor screw")?;

    let (min, max) = mesh.bounding_box();
    log::info!(
        "Generated {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    log::info!(
        "Bounds [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}], volume {:.3}",
        min.x,
        min.y,
        min.z,
        max.x,
        max.y,
        max.z,
        mesh.signed_volume()
    );

    save_stl(&mesh, &args.name, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
