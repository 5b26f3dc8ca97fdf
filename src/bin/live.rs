//! Live webcam loop: calibrate once, then scan and highlight every frame.

use clap::Parser;
use log::{error, info, warn};

use skingrid::capture::{Camera, Display, select_region};
use skingrid::{BoxSpec, Error, Region, calibrate, count_boxes, draw_hot_boxes};

#[derive(Parser, Debug)]
#[command(
    name = "skingrid-live",
    about = "Highlight skin-colored grid boxes on a live webcam feed"
)]
struct Args {
    /// Capture device index
    #[arg(long, default_value_t = 0)]
    camera: i32,

    /// Width frames are resized to before processing
    #[arg(long, default_value_t = 240)]
    width: u32,

    /// Height frames are resized to before processing
    #[arg(long, default_value_t = 320)]
    height: u32,

    /// Box size as a fraction of each frame dimension
    #[arg(long, default_value_t = 0.1)]
    box_fraction: f32,

    /// Skin-pixel count a box must exceed to be highlighted
    #[arg(long, default_value_t = skingrid::DEFAULT_THRESHOLD)]
    threshold: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        error!("{err}");
        eprintln!("skingrid-live: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> skingrid::Result<()> {
    let mut camera = Camera::open(args.camera)?;

    let first = camera
        .read()?
        .ok_or_else(|| Error::FrameReadFailed("could not read the first frame".into()))?;
    let first = first.resized(args.width, args.height)?;

    let rect = select_region("Select the skin region", &first)?;
    let region = Region::new(rect, first.width(), first.height())?;
    let range = calibrate(&first, region);
    info!(
        "calibrated skin range: lower={:?} upper={:?}",
        range.lower(),
        range.upper()
    );

    let spec = BoxSpec::new(
        (args.width as f32 * args.box_fraction) as u32,
        (args.height as f32 * args.box_fraction) as u32,
    )?;

    let display = Display::new("skingrid live")?;
    // End-of-stream and mid-stream read failures both end the loop instead
    // of aborting; the camera and window are released by Drop on every exit
    // path.
    loop {
        let frame = match camera.read() {
            Ok(Some(frame)) => frame,
            Ok(None) => break,
            Err(err) if err.ends_stream() => {
                warn!("capture ended: {err}");
                break;
            }
            Err(err) => return Err(err),
        };
        let frame = frame.resized(args.width, args.height)?;
        let results = count_boxes(&frame, spec, &range);
        let annotated = draw_hot_boxes(&frame, &results, spec, args.threshold)?;
        display.show(&annotated)?;
        if display.quit_requested()? {
            break;
        }
    }
    Ok(())
}
