//! Glint palette driver - main entry point.
//!
//! Builds the registry, index, and palette controller, wires the key
//! router and the star badge, and runs a line-oriented driver loop so the
//! whole palette can be exercised from a terminal without any UI toolkit.

mod stars;

use std::io::{BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use glint_core::AppConfig;
use glint_index::{Registry, SearchIndex};
use glint_palette::{
    Key, KeyEvent, KeyRouter, Navigator, PaletteController, PaletteSnapshot,
};
use stars::{GithubStars, StarBadge};

// =============================================================================
// Navigator
// =============================================================================

/// Navigator for a headless session: navigation requests are printed.
struct PrintingNavigator;

impl Navigator for PrintingNavigator {
    fn navigate_to(&self, path: &str) {
        println!("-> navigate {}", path);
    }
}

// =============================================================================
// Initialization
// =============================================================================

/// Build the registry, index, and controller from the config.
fn create_controller(config: &AppConfig) -> Result<Arc<Mutex<PaletteController>>, String> {
    let registry = Arc::new(Registry::builtin());
    tracing::info!("Registry: {} components", registry.len());

    let index = Arc::new(SearchIndex::new(registry));
    let navigator = Arc::new(PrintingNavigator);

    let controller = PaletteController::from_config(index, navigator, config)
        .map_err(|e| format!("Invalid configuration: {}", e))?;
    tracing::info!(
        "Palette controller created (toggle: {}, max results: {})",
        config.hotkey.toggle,
        config.search.max_results
    );

    Ok(Arc::new(Mutex::new(controller)))
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a snapshot for the terminal, cursor row marked with '>'.
fn render_snapshot(snapshot: &PaletteSnapshot) -> String {
    if !snapshot.is_open {
        return "palette: closed".to_string();
    }

    let mut out = format!(
        "palette: open  query: {:?}  ({} results)",
        snapshot.query,
        snapshot.results.len()
    );

    if snapshot.query.trim().is_empty() {
        out.push_str("\n  (type to search components and docs)");
    } else if snapshot.results.is_empty() {
        out.push_str(&format!("\n  (no results for {:?})", snapshot.query));
    }

    for (i, entry) in snapshot.results.iter().enumerate() {
        let marker = if i == snapshot.cursor_index { '>' } else { ' ' };
        out.push_str(&format!(
            "\n{} {}  [{}]  {}",
            marker, entry.title, entry.category, entry.path
        ));
    }

    out
}

// =============================================================================
// Driver Loop
// =============================================================================

const HELP: &str = "\
commands:
  toggle        toggle the palette (the mod+k hotkey)
  type <text>   set the search query
  down / up     move the cursor (wraps)
  enter         activate the highlighted result
  esc           dismiss the palette
  hover <i>     hover result row i
  click <i>     click result row i
  stars         show the star badge value
  quit          exit";

/// Read commands from stdin until EOF or `quit`.
fn run_driver(
    router: &KeyRouter,
    controller: &Arc<Mutex<PaletteController>>,
    badge: &StarBadge,
) {
    println!("{}", HELP);

    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("glint> ");
        let _ = std::io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("stdin error: {}", e);
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "quit" | "q" => break,
            "help" | "?" => {
                println!("{}", HELP);
                continue;
            }
            "toggle" => controller.lock().toggle(),
            "type" => controller.lock().set_query(rest),
            "down" => {
                let _ = router.dispatch(&KeyEvent::plain(Key::ArrowDown));
            }
            "up" => {
                let _ = router.dispatch(&KeyEvent::plain(Key::ArrowUp));
            }
            "enter" => {
                let _ = router.dispatch(&KeyEvent::plain(Key::Enter));
            }
            "esc" => {
                let _ = router.dispatch(&KeyEvent::plain(Key::Escape));
            }
            "hover" | "click" => {
                let index: usize = match rest.parse() {
                    Ok(index) => index,
                    Err(_) => {
                        println!("usage: {} <index>", command);
                        continue;
                    }
                };
                if command == "hover" {
                    controller.lock().set_cursor(index);
                } else {
                    controller.lock().activate(index);
                }
            }
            "stars" => {
                println!("stars: {}", badge.value());
                continue;
            }
            _ => {
                println!("unknown command '{}'; try 'help'", command);
                continue;
            }
        }

        println!("{}", render_snapshot(&controller.lock().snapshot()));
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Glint palette driver starting...");

    // The star fetch runs on this runtime while the driver loop blocks on
    // stdin, so it needs at least one worker thread of its own.
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let _guard = rt.enter();

    let config = AppConfig::load();

    let controller = match create_controller(&config) {
        Ok(controller) => controller,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // The subscription guard keeps the palette's key handler registered
    // for exactly as long as this scope lives.
    let router = KeyRouter::new();
    let handler = controller.clone();
    let _subscription = router.subscribe(move |event| handler.lock().handle_key(event));

    let badge = StarBadge::new(config.github.star_placeholder.as_str());
    match GithubStars::new() {
        Ok(source) => badge.spawn_fetch(Arc::new(source), config.github.repo.clone()),
        Err(e) => tracing::warn!("Star fetch disabled: {}", e),
    }

    run_driver(&router, &controller, &badge);
    tracing::info!("Glint palette driver exiting");
}

// =============================================================================
// Tests
// =============================================================================
