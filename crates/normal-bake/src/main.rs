use clap::Parser;
use normal_bake::{BakeConfig, LightSetup, DEFAULT_DIFFUSE_COLOR, DEFAULT_SWEEP_Z};
use normal_lighting::{DVec3, MaterialParams, Rgb8};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "normal-bake")]
#[command(about = "Light a normal map with a diffuse map, optionally sweeping the light", long_about = None)]
#[command(version)]
struct Cli {
    /// Tangent-space normal map (RGB or RGBA)
    normal: PathBuf,

    /// Diffuse/albedo map with the same dimensions as the normal map
    #[arg(short, long)]
    diffuse: Option<PathBuf>,

    /// Output image path (sweeps write <stem>_0001.<ext>, ...)
    #[arg(short, long)]
    output: PathBuf,

    /// Number of frames in the light sweep (default: one light along +X)
    #[arg(short, long)]
    frames: Option<u32>,

    /// Z component of the sweep light before normalization
    #[arg(long, default_value_t = DEFAULT_SWEEP_Z, allow_hyphen_values = true, requires = "frames")]
    light_z: f64,

    /// Fixed light direction "x,y,z" (single frame)
    #[arg(long, value_parser = parse_triplet::<f64>, conflicts_with = "frames", allow_hyphen_values = true)]
    light: Option<[f64; 3]>,

    /// Constant diffuse color "r,g,b" used when no diffuse map is given
    #[arg(long, value_parser = parse_triplet::<u8>)]
    diffuse_color: Option<[u8; 3]>,

    /// Specular exponent
    #[arg(long, default_value = "160")]
    shininess: f64,

    /// Light specular intensity (all channels)
    #[arg(long, default_value = "0.4")]
    specular: f64,

    /// Suppress progress output (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Parse "a,b,c" into three values.
fn parse_triplet<T: FromStr>(s: &str) -> Result<[T; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected three comma-separated values, got \"{}\"", s));
    }
    let parse = |p: &str| p.parse::<T>().map_err(|_| format!("invalid value \"{}\"", p));
    Ok([parse(parts[0])?, parse(parts[1])?, parse(parts[2])?])
}

impl Cli {
    fn into_config(self) -> BakeConfig {
        let lights = match (self.light, self.frames) {
            (Some([x, y, z]), _) => LightSetup::Fixed(DVec3::new(x, y, z)),
            (None, Some(frames)) => LightSetup::Sweep {
                frames,
                z: self.light_z,
            },
            (None, None) => LightSetup::default(),
        };
        let diffuse_color: Rgb8 = self.diffuse_color.unwrap_or(DEFAULT_DIFFUSE_COLOR);
        BakeConfig {
            normal_map: self.normal,
            diffuse_map: self.diffuse,
            output: self.output,
            lights,
            material: MaterialParams {
                shininess: self.shininess,
                light_specular: DVec3::splat(self.specular),
                ..Default::default()
            },
            diffuse_color,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    // Initialize logging (suppressed if --quiet)
    if !quiet {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    match normal_bake::bake(&cli.into_config()) {
        Ok(frames) => {
            if !quiet {
                if let Some(first) = frames.first() {
                    eprintln!(
                        "Success: {} frame(s) baked ({}×{}), first: {}",
                        frames.len(),
                        first.width,
                        first.height,
                        first.path.display()
                    );
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
