use careerwheel::config;
use careerwheel::gui::app::AppModel;
use careerwheel::sys::control::{self, ControlCommand};
use careerwheel::sys::{export, runtime};
use clap::{Parser, Subcommand};
use radial::{Accents, Point, Wheel};
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "careerwheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Spin the wheel in the running window
    Spin,
    /// Make the running window reload its config
    Reload,
    /// Close the running window
    Quit,
    /// Render the configured wheel to a PNG file
    Render {
        #[arg(short, long)]
        out: PathBuf,
        /// Device pixel ratio of the output image
        #[arg(short, long, default_value_t = 1.0)]
        scale: f64,
    },
    /// Print the slice under a point in wheel coordinates
    Hit { x: f64, y: f64 },
    /// Spin without a window and print where it lands
    Pick {
        /// Overrides the configured seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the default config file and print its path
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            run_gui();
            Ok(())
        }
        Some(Commands::Spin) => control::send_command(ControlCommand::Spin),
        Some(Commands::Reload) => control::send_command(ControlCommand::Reload),
        Some(Commands::Quit) => control::send_command(ControlCommand::Quit),
        Some(Commands::Render { out, scale }) => render(out, scale),
        Some(Commands::Hit { x, y }) => {
            hit(x, y);
            Ok(())
        }
        Some(Commands::Pick { seed }) => pick(seed),
        Some(Commands::Init) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_gui() {
    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    if let Err(e) = runtime::start_background_services(runtime::ServicePaths::resolve(), tx) {
        log::error!("Failed to start background services: {}", e);
    }

    let app = RelmApp::new("org.careerwheel.CareerWheel").with_args(Vec::new());

    app.run::<AppModel>((config, rx));
}

fn render(out: PathBuf, scale: f64) -> anyhow::Result<()> {
    let wheel = Wheel::new(config::load_or_default().wheel);
    if !export::render_png(&wheel, &out, scale, &Accents::default())? {
        anyhow::bail!("Could not create a drawing surface for {}", out.display());
    }
    println!("{}", out.display());
    Ok(())
}

fn hit(x: f64, y: f64) {
    let wheel = Wheel::new(config::load_or_default().wheel);
    match wheel.hit_test(Point::new(x, y)) {
        Some(index) => println!("{}\t{}", index, wheel.label(index)),
        None => println!("none"),
    }
}

fn pick(seed: Option<u64>) -> anyhow::Result<()> {
    let mut config = config::load_or_default();
    if seed.is_some() {
        config.spin.seed = seed;
    }
    let wheel = Wheel::new(config.wheel);

    let mut spinner = config.spin.spinner(wheel.slice_count());
    spinner.start(&mut config.spin.rng());
    let index = spinner
        .tick(config.spin.duration())
        .ok_or_else(|| anyhow::anyhow!("Spin did not complete"))?;

    println!("{}\t{}", index, wheel.label(index));
    Ok(())
}
