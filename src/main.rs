mod error;
mod report;
mod script;
mod session;

use std::fs;
use std::io::{self, Read};

use canvas::config::EditorConfig;
use canvas::engine::EditorCore;
use canvas::viewport::{Point, Vec2};
use clap::Parser;

use crate::error::HostError;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "shapeforge", about = "Replay a shape-editing session against the canvas editor")]
struct Cli {
    #[arg(default_value = "-", help = "Session script path, or - for stdin")]
    script: String,

    #[arg(long, env = "SHAPEFORGE_WIDTH", default_value_t = 700.0, help = "Canvas width")]
    width: f64,

    #[arg(long, env = "SHAPEFORGE_HEIGHT", default_value_t = 560.0, help = "Canvas height")]
    height: f64,

    #[arg(long, env = "SHAPEFORGE_PASTE_OFFSET", default_value_t = 20.0, help = "Paste offset on both axes")]
    paste_offset: f64,

    #[arg(long, env = "SHAPEFORGE_ROTATION_SPEED_X", default_value_t = 0.010)]
    rotation_speed_x: f64,

    #[arg(long, env = "SHAPEFORGE_ROTATION_SPEED_Y", default_value_t = 0.015)]
    rotation_speed_y: f64,

    #[arg(long, help = "Start with the two demo shapes")]
    demo: bool,

    #[arg(long, default_value_t = 0, help = "Extra idle frames after the script")]
    frames: u32,
}

fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let text = read_script(&cli.script)?;
    let events = script::parse_script(&text)?;

    let config = EditorConfig {
        paste_offset: Vec2::splat(cli.paste_offset),
        rotation_speed_x: cli.rotation_speed_x,
        rotation_speed_y: cli.rotation_speed_y,
        ..EditorConfig::default()
    };
    let mut core = EditorCore::with_config(config)?;
    if cli.demo {
        core = core.with_demo_scene();
    }

    let mut session = Session::new(core, Point::default(), Vec2::new(cli.width, cli.height));
    tracing::info!(events = events.len(), "replaying session");
    session.run(&events);
    for _ in 0..cli.frames {
        session.frame();
    }

    tracing::info!(shapes = session.core().shapes().len(), "session finished");
    print!("{}", session.report());
    Ok(())
}

fn read_script(path: &str) -> Result<String, HostError> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| HostError::Io { path: "<stdin>".to_owned(), source })?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|source| HostError::Io { path: path.to_owned(), source })
}
