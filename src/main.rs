use rand::Rng;

use gridpath::app::App;
use gridpath::{
    Algorithm, Grid, Heuristic, NeighborMode, Pattern, TileFrame, generate_pattern, search,
};

/// Margin kept free below the grid for the status line.
const RESERVED_ROWS: u16 = 2;

fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "gridpath.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .init();
    guard
}

fn prompt(question: &str) -> std::io::Result<String> {
    println!("{question}");
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    // Derive the grid dimensions from the terminal size, like the tile size
    // derives from the viewport in a graphical front-end.
    let (term_width, term_height) = crossterm::terminal::size()?;
    let width = term_width / TileFrame::CELL_WIDTH;
    let height = term_height.saturating_sub(RESERVED_ROWS);
    if width < 4 || height < 4 {
        eprintln!("Terminal is too small for a grid: need at least 4x4 tiles.");
        return Ok(());
    }
    tracing::info!("[main] starting with a {}x{} grid", width, height);

    let start = (1, 1);
    let goal = (height - 2, width - 2);

    // Select the obstacle pattern and what it places
    let mut options = String::from("Select a grid pattern (or leave empty for an open grid):");
    for pattern in Pattern::ALL {
        options.push_str(&format!("\n  {:<20} {}", pattern.id(), pattern));
    }
    let pattern_input = prompt(&options)?;
    let pattern = if pattern_input.is_empty() {
        None
    } else {
        match pattern_input.parse::<Pattern>() {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                eprintln!("{e}");
                return Ok(());
            }
        }
    };

    let mut walls = Grid::new(width, height, false);
    let mut weights = Grid::new(width, height, 1u32);

    if let Some(pattern) = pattern {
        let place_walls = match prompt("Place the pattern as walls or weights? (wall/weight):")?
            .as_str()
        {
            "weight" => false,
            _ => true,
        };
        let mut rng = rand::rng();
        generate_pattern(pattern, width, height, None, &mut |coord| {
            // The start and goal tiles are never obstructed
            if coord == start || coord == goal {
                return;
            }
            if place_walls {
                walls[coord] = true;
            } else {
                weights[coord] = rng.random_range(10..100);
            }
        });
    }

    // Select the algorithm, heuristic and neighbor mode
    let mut options = String::from("Select a pathfinding algorithm:");
    for algorithm in Algorithm::ALL {
        options.push_str(&format!("\n  {:<24} {}", algorithm.id(), algorithm));
    }
    let algorithm = match prompt(&options)?.parse::<Algorithm>() {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let mut options = String::from("Select a heuristic (ignored by algorithms without one):");
    for heuristic in Heuristic::ALL {
        options.push_str(&format!("\n  {:<12} {}", heuristic.id(), heuristic));
    }
    let heuristic = match prompt(&options)?.parse::<Heuristic>() {
        Ok(heuristic) => heuristic,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    let mut options = String::from("Select which neighbors a step may reach:");
    for mode in NeighborMode::ALL {
        options.push_str(&format!("\n  {:<16} {}", mode.id(), mode));
    }
    let mode = match prompt(&options)?.parse::<NeighborMode>() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    // The whole search is computed up front; playback only steps through
    // the recorded frames.
    let frames = search(start, goal, &walls, mode, &weights, algorithm, heuristic);
    let goal_reached = frames
        .last()
        .is_some_and(|frame| frame.coords().any(|coord| frame[coord] == TileFrame::Path));

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let mut app = App::default();
    let completed = app.animate(&frames, &walls, start, goal)?;
    if completed {
        App::wait_for_key()?;
    }
    App::restore_terminal(&mut stdout)?;

    if goal_reached {
        println!("Goal reached! Animated {} frames.", frames.len());
    } else {
        println!("No path found to the goal.");
    }
    Ok(())
}
