use clap::{Parser, Subcommand};
use pie_progress::{Color, ColorPair, LayerTree, PieRenderer};
use pie_view::config;
use pie_view::dump;
use pie_view::events::{AppEvent, cap_total};
use pie_view::gui::app::AppModel;
use pie_view::sys::runtime;
use pie_view::sys::server::SOCKET_PATH;
use relm4::prelude::*;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pie-view", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wedges already passed when the viewer opens
    #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
    passed: i64,

    /// Number of wedges when the viewer opens
    #[arg(short, long, default_value_t = 1, allow_hyphen_values = true)]
    total: i64,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Set the progress of a running viewer
    Set {
        #[arg(allow_hyphen_values = true)]
        passed: i64,
        #[arg(allow_hyphen_values = true)]
        total: i64,
        /// Animate the change
        #[arg(short, long)]
        animated: bool,
    },
    /// Move the passed count of a running viewer
    Step {
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Change the colors of passed wedges (#rgb, #rrggbb or #rrggbbaa)
    Colors { fill: Color, stroke: Color },
    /// Make a running viewer re-read its config file
    Reload,
    /// Close a running viewer
    Quit,
    /// Lay out a pie without a window and print its wedges as JSON
    Dump {
        #[arg(allow_hyphen_values = true)]
        passed: i64,
        #[arg(allow_hyphen_values = true)]
        total: i64,
        /// Side of the square bounds
        #[arg(short, long, default_value_t = 200.0)]
        size: f64,
        /// Also paint the pie into this PNG file
        #[arg(long)]
        png: Option<PathBuf>,
    },
    /// Write the default config file if there is none and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            run_viewer(cli.passed, cli.total);
            Ok(())
        }
        Some(Commands::Set {
            passed,
            total,
            animated,
        }) => send_event(&AppEvent::SetProgress {
            passed,
            total,
            animated,
        }),
        Some(Commands::Step { delta }) => send_event(&AppEvent::Step(delta)),
        Some(Commands::Colors { fill, stroke }) => {
            send_event(&AppEvent::SetActiveColors(ColorPair::new(fill, stroke)))
        }
        Some(Commands::Reload) => send_event(&AppEvent::ConfigReload),
        Some(Commands::Quit) => send_event(&AppEvent::Quit),
        Some(Commands::Dump {
            passed,
            total,
            size,
            png,
        }) => run_dump(passed, total, size, png),
        Some(Commands::InitConfig) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_viewer(passed: i64, total: i64) {
    let configuration = config::load_or_default();
    let mut renderer = PieRenderer::new(LayerTree::default(), configuration);
    // no bounds yet, the first resize draws it
    renderer.update_state(passed, cap_total(total), false);

    let (tx, rx) = async_channel::bounded(32);
    if let Err(e) = runtime::start_background_services(tx) {
        log::error!("Failed to start background services: {}", e);
    }

    let app = RelmApp::new("org.pie.view").with_args(Vec::new());

    app.run::<AppModel>((renderer, rx));
}

fn run_dump(passed: i64, total: i64, size: f64, png: Option<PathBuf>) -> anyhow::Result<()> {
    let configuration = config::load_or_default();
    let layers = dump::shape_layers(&configuration, passed, total, size);
    println!("{}", dump::to_json(&layers)?);

    if let Some(path) = png {
        let mut file = fs_err::File::create(&path)?;
        dump::write_png(&mut file, &configuration, passed, total, size)?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn send_event(event: &AppEvent) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to pie-view at {}: {}. Is pie-view running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", event)?;
    Ok(())
}
