use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use side_scroller::engine::assets::{AssetLoader, GraphicsLibrary, SheetSlicer};
use side_scroller::engine::game_loop::{GameLoop, TARGET_FPS};
use side_scroller::engine::input::InputManager;
use side_scroller::game::player::{Player, BASE_CONFIG};

const WINDOW_TITLE: &str = "Side Scroller";
const DEFAULT_ASSET_ROOT: &str = "resources";

fn main() -> Result<()> {
    // Initialize logger; RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting {}...", WINDOW_TITLE);

    let asset_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_ROOT));

    // Load sprite sheets and build the player before opening a window
    let loader = AssetLoader::new(&asset_root);
    let library = GraphicsLibrary::load(&loader)
        .with_context(|| format!("Failed to load graphics from {}", asset_root.display()))?;
    let mut player = Player::from_library(&SheetSlicer, &library, BASE_CONFIG)
        .context("Failed to build the player")?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(800, 600))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created, targeting {} FPS", TARGET_FPS);

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    let mut last_state = player.state();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are not delivered while unfocused
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let time = game_loop.begin_frame();
                player.update(&input.snapshot(), time.current_time, time.dt);

                if player.state() != last_state {
                    last_state = player.state();
                    window.set_title(&format!("{} - {}", WINDOW_TITLE, last_state.name()));
                }

                if game_loop.frame_count() % (TARGET_FPS as u64 * 10) == 0 {
                    debug!(
                        "{:.1} FPS, frame {:?}, rect {:?}",
                        game_loop.fps(),
                        player.pose(),
                        player.rect()
                    );
                }
            }
            Event::AboutToWait => {
                let deadline = game_loop.next_frame_deadline();
                if Instant::now() >= deadline {
                    window.request_redraw();
                } else {
                    elwt.set_control_flow(ControlFlow::WaitUntil(deadline));
                }
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
