use accent_sheet::SheetConfig;
use chat_demo::{run, DemoOptions};
use clap::Parser;

/// Drive the accent sheet headlessly and print the sheet offset per frame.
#[derive(Parser, Debug)]
#[command(name = "chat-demo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Vertical distance to drag the open sheet (negative pulls it up)
    #[arg(long, default_value_t = 200.0, allow_hyphen_values = true)]
    drag: f32,

    /// Number of pointer moves the drag is split into
    #[arg(long, default_value_t = 12)]
    steps: usize,

    /// Palette entry to pick afterwards
    #[arg(short, long, default_value_t = 3)]
    accent: usize,

    /// Skip picking an accent
    #[arg(long)]
    no_pick: bool,

    /// Full sheet height
    #[arg(long)]
    height: Option<f32>,

    /// Maximum over-drag past the open position
    #[arg(long)]
    overdrag: Option<f32>,

    /// Pace frames against the wall clock
    #[arg(long)]
    realtime: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug)
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable verbose logging (equivalent to RUST_LOG=trace)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_logging(args: &Args) {
    #[cfg(feature = "logging")]
    {
        let default_filter = if args.verbose {
            "trace"
        } else if args.debug {
            "debug"
        } else {
            "info"
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .format_timestamp_millis()
            .init();
    }
    #[cfg(not(feature = "logging"))]
    let _ = args;
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let mut sheet = SheetConfig::default();
    if let Some(height) = args.height {
        sheet = sheet.with_height(height);
    }
    if let Some(overdrag) = args.overdrag {
        sheet = sheet.with_overdrag(overdrag);
    }

    let options = DemoOptions::default()
        .with_sheet(sheet)
        .with_drag(args.drag, args.steps)
        .with_accent((!args.no_pick).then_some(args.accent))
        .with_realtime(args.realtime);

    println!("=== Accent Chat sheet demo ===");
    println!(
        "height={} overdrag={} drag={} steps={}",
        options.sheet.height, options.sheet.overdrag, options.drag, options.drag_steps
    );
    println!();

    let stdout = std::io::stdout();
    let report = run(&options, &mut stdout.lock())?;

    println!();
    println!(
        "{} frames, sheet {}, accent {}",
        report.frames,
        if report.final_state.is_open {
            "open"
        } else {
            "closed"
        },
        report.accent.to_hex()
    );
    Ok(())
}
