use argh::FromArgs;
use std::path::PathBuf;

use lenticular::{
    image::ImageSize,
    imgproc::{
        interlace::{interlace, InterlaceLayout},
        interpolation::InterpolationMode,
    },
    io::png::write_image_png_rgb8,
    views::{load_views, SourceSpec, ViewMode},
};

#[derive(FromArgs)]
/// Interlace a set of views into a composite image for a lenticular or parallax-barrier screen
struct Args {
    /// number of interlaced views (default: 5)
    #[argh(option, short = 'n', default = "5")]
    views: usize,

    /// screen width in pixels (default: 1920)
    #[argh(option, default = "1920")]
    width: usize,

    /// screen height in pixels (default: 1080)
    #[argh(option, default = "1080")]
    height: usize,

    /// view source: calibration, alternating-color, reference-grid, sequence (default: calibration)
    #[argh(option, short = 'm', default = "String::from(\"calibration\")")]
    mode: String,

    /// directory holding the numbered source images (file-backed modes)
    #[argh(option)]
    source_dir: Option<PathBuf>,

    /// base name of the numbered source images (file-backed modes)
    #[argh(option)]
    base: Option<String>,

    /// file extension of the numbered source images (default: png)
    #[argh(option, default = "String::from(\"png\")")]
    ext: String,

    /// view index shown white in calibration mode (default: views / 2)
    #[argh(option)]
    highlight: Option<usize>,

    /// resampling filter: nearest, bilinear (default: bilinear)
    #[argh(option, default = "String::from(\"bilinear\")")]
    filter: String,

    /// directory the interlaced image is written to (default: .)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let layout = InterlaceLayout::new(
        args.views,
        ImageSize {
            width: args.width,
            height: args.height,
        },
    )?;

    let source = match (&args.source_dir, &args.base) {
        (Some(dir), Some(base)) => Some(SourceSpec {
            dir: dir.clone(),
            base: base.clone(),
            ext: args.ext.clone(),
        }),
        _ => None,
    };

    let mode = ViewMode::from_selector(&args.mode, source, args.highlight)?;

    let filter = match args.filter.as_str() {
        "nearest" => InterpolationMode::Nearest,
        _ => InterpolationMode::Bilinear,
    };

    log::info!("Loading the images to be interlaced...");
    let views = load_views(&mode, &layout)?;

    log::info!(
        "Interlacing {} views into a {}x{} composite...",
        layout.n_views,
        layout.screen_size.width,
        layout.screen_size.height
    );
    let composite = interlace(&views, &layout, filter)?;

    let file_name = format!("{}_{}view.png", mode.output_stem(), layout.n_views);
    let out_path = args.output_dir.join(file_name);
    write_image_png_rgb8(&out_path, &composite)?;
    log::info!("Wrote {}", out_path.display());

    Ok(())
}
