use anyhow::Context;
use clap::Parser;
use penrose_core::{driver, Animation, Config, ConfigOptions, ManualScheduler};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

mod svg;

use svg::SvgSurface;

/// Render frames of the sliding Penrose triangle of cubes to SVG files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Output directory, created if missing
    #[arg(short, long)]
    out: PathBuf,

    /// Frames to write (defaults to one full loop)
    #[arg(short, long)]
    frames: Option<u32>,

    #[arg(long, default_value_t = 400.0)]
    width: f64,

    #[arg(long, default_value_t = 400.0)]
    height: f64,

    /// Fill behind the figure; transparent when unset
    #[arg(long)]
    background: Option<String>,

    #[arg(long)]
    triangle_edge: Option<f64>,

    #[arg(long)]
    cube_edge: Option<f64>,

    #[arg(long)]
    cubes_per_edge: Option<i64>,

    /// x,y
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    padding: Option<Vec<f64>>,

    #[arg(long)]
    loop_frames: Option<i64>,

    #[arg(long)]
    line_width: Option<f64>,

    #[arg(long)]
    line_color: Option<String>,

    /// Face color, repeated for the right, top and left faces
    /// (`--cube-color '#4f9bf7' --cube-color 'rgb(192,216,252)' ...`)
    #[arg(long = "cube-color")]
    cube_colors: Option<Vec<String>>,
}

impl Args {
    fn config_options(&self) -> ConfigOptions {
        ConfigOptions {
            triangle_edge: self.triangle_edge,
            cube_edge: self.cube_edge,
            cubes_per_triangle_edge: self.cubes_per_edge,
            padding: self.padding.clone(),
            loop_frames: self.loop_frames,
            line_width: self.line_width,
            line_color: self.line_color.clone(),
            cube_colors: self.cube_colors.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = Config::from_options(args.config_options()).context("invalid configuration")?;
    let frames = args.frames.unwrap_or(config.loop_frames());
    log::info!(
        "rendering {} frames ({} cubes, loop of {}) into {}",
        frames,
        config.cube_count(),
        config.loop_frames(),
        args.out.display()
    );

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let mut surface = SvgSurface::new(args.width, args.height);
    if let Some(bg) = &args.background {
        surface = surface.with_background(bg.clone());
    }
    let animation = Rc::new(RefCell::new(Animation::new(surface, config)));
    let scheduler = Rc::new(ManualScheduler::new());
    let failure: Rc<RefCell<Option<fmt::Error>>> = Rc::new(RefCell::new(None));
    let sink = failure.clone();
    driver::start(animation.clone(), scheduler.clone(), move |e| {
        *sink.borrow_mut() = Some(e);
    });

    for index in 0..frames {
        let drawn = animation.borrow().frame();
        scheduler.run_pending();
        if let Some(e) = failure.borrow_mut().take() {
            return Err(anyhow::Error::new(e).context(format!("drawing frame {drawn}")));
        }
        let path = args.out.join(format!("frame-{index:04}.svg"));
        std::fs::write(&path, animation.borrow().surface().document())
            .with_context(|| format!("writing {}", path.display()))?;
        log::debug!("frame {} -> {}", drawn, path.display());
    }

    log::info!("done");
    Ok(())
}
