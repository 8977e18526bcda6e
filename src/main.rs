use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use varnamala::audio::{apply_tick_events, Pronouncer};
use varnamala::build_info;
use varnamala::constants::{DEFAULT_SERVER_URL, INPUT_POLL_MS};
use varnamala::core::{advance, flap, load_word_list, reset_round, start_round};
use varnamala::core::{GameConfig, Phase, WordGame};
use varnamala::source::{HttpSource, WordSource};
use varnamala::ui::{game_scene, menu_scene};
use varnamala::words::BUILTIN_CATEGORIES;

enum Screen {
    CategorySelect,
    Game,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut server_url = DEFAULT_SERVER_URL.to_string();

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--server" | "-s" => {
                i += 1;
                match args.get(i) {
                    Some(url) => server_url = url.clone(),
                    None => {
                        eprintln!("--server requires a URL");
                        std::process::exit(1);
                    }
                }
            }
            "--version" | "-v" => {
                println!(
                    "varnamala {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Varnamala - Devanagari letter-catching game\n");
                println!("Usage: varnamala [options]\n");
                println!("Options:");
                println!("  --server <url>  Word/audio service URL (default {})", DEFAULT_SERVER_URL);
                println!("  --version       Show version information");
                println!("  --help          Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'varnamala --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let source = Arc::new(HttpSource::new(&server_url));
    let pronouncer = Pronouncer::new(source.clone());

    // Categories come from the service when it is reachable; otherwise fall
    // back to the builtin list and let word-list fetches report errors.
    let categories: Vec<String> = match source.categories() {
        Ok(list) if !list.is_empty() => list,
        Ok(_) | Err(_) => BUILTIN_CATEGORIES.iter().map(|s| s.to_string()).collect(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, source.as_ref(), &pronouncer, &categories);

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    source: &HttpSource,
    pronouncer: &Pronouncer,
    categories: &[String],
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut screen = Screen::CategorySelect;
    let mut selected: usize = 0;
    let mut menu_status: Option<String> = None;
    let mut game: Option<WordGame> = None;
    let mut last_frame = Instant::now();

    loop {
        match screen {
            Screen::CategorySelect => {
                terminal.draw(|frame| {
                    menu_scene::render_menu(
                        frame,
                        frame.size(),
                        categories,
                        selected,
                        menu_status.as_deref(),
                    );
                })?;

                if event::poll(Duration::from_millis(50))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key.code {
                            KeyCode::Up => selected = selected.saturating_sub(1),
                            KeyCode::Down => {
                                selected =
                                    (selected + 1).min(categories.len().saturating_sub(1));
                            }
                            KeyCode::Enter => {
                                let category = &categories[selected];
                                match start_game(source, category, &mut rng) {
                                    Ok(new_game) => {
                                        game = Some(new_game);
                                        menu_status = None;
                                        last_frame = Instant::now();
                                        screen = Screen::Game;
                                    }
                                    Err(message) => menu_status = Some(message),
                                }
                            }
                            KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                            _ => {}
                        }
                    }
                }
            }

            Screen::Game => {
                let current = match game.as_mut() {
                    Some(current) => current,
                    None => {
                        screen = Screen::CategorySelect;
                        continue;
                    }
                };

                terminal.draw(|frame| {
                    game_scene::render_game(frame, frame.size(), &current.snapshot());
                })?;

                if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press {
                            match key.code {
                                KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                                    if matches!(current.phase, Phase::Ended(_)) {
                                        // New word, straight back into play.
                                        if reset_round(current, &mut rng).is_ok() {
                                            flap(current);
                                            last_frame = Instant::now();
                                        }
                                    } else {
                                        flap(current);
                                    }
                                }
                                KeyCode::Esc | KeyCode::Char('q') => {
                                    game = None;
                                    screen = Screen::CategorySelect;
                                    continue;
                                }
                                _ => {}
                            }
                        }
                    }
                }

                // Drive the fixed-step core with wall-clock deltas.
                let now = Instant::now();
                let delta_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
                last_frame = now;

                let events = advance(current, delta_ms, &mut rng);
                apply_tick_events(pronouncer, &events);
            }
        }
    }
}

/// Fetch the category's word list and lay out a fresh round. Any failure is
/// reported as a menu status message; the game never starts with zero words.
fn start_game<R: rand::Rng>(
    source: &HttpSource,
    category: &str,
    rng: &mut R,
) -> Result<WordGame, String> {
    let list = source
        .word_list(category)
        .map_err(|err| format!("Could not load '{}': {}", category, err))?;

    let mut game = WordGame::new(GameConfig::default());
    load_word_list(&mut game, category, list).map_err(|err| err.to_string())?;
    start_round(&mut game, rng).map_err(|err| err.to_string())?;
    Ok(game)
}
