//! Campus Frenzy entry point
//!
//! Headless terminal front end. The menu reads one key per line from stdin
//! (`w`/`s` to move, empty line to confirm, `esc` to go back) and levels are
//! played by the autopilot, printing a HUD line every second of game time.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use campus_frenzy::consts::{SIM_DT, WORLD_WIDTH};
use campus_frenzy::menu::{Menu, MenuAction, MenuInput, MenuState};
use campus_frenzy::sim::{FrameClock, GameEvent, GameState, RunOutcome, autopilot, snapshot, step};
use campus_frenzy::{ConfigError, LevelsFile, Scoreboard, Settings};

const HELP_LINES: [&str; 6] = [
    "How to Play:",
    "- Left-click to shoot classmates",
    "- Small classmates are worth more points",
    "- Missing costs points; empty magazines need a reload",
    "- Rest the pointer on a screen edge to look around",
    "- Reach the required score before time runs out",
];

/// Command line options
struct Args {
    config_dir: PathBuf,
    seed: Option<u64>,
    /// Play this level immediately and exit
    autoplay: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config_dir: PathBuf::from("assets/config"),
        seed: None,
        autoplay: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config-dir" => {
                let dir = iter.next().ok_or("--config-dir needs a path")?;
                args.config_dir = PathBuf::from(dir);
            }
            "--seed" => {
                let seed = iter.next().ok_or("--seed needs a number")?;
                args.seed = Some(seed.parse().map_err(|_| format!("bad seed '{}'", seed))?);
            }
            "--autoplay" => {
                args.autoplay = Some(iter.next().ok_or("--autoplay needs a level name")?);
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(args)
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Loaded configuration plus the shared scoreboard
struct Game {
    levels: LevelsFile,
    settings: Settings,
    scoreboard: Scoreboard,
    seed: Option<u64>,
}

impl Game {
    fn load(args: &Args) -> Result<Self, ConfigError> {
        let levels = LevelsFile::load(&args.config_dir.join("levels.json"))?;
        let settings = Settings::load(&args.config_dir.join("settings.json"));
        let scoreboard = Scoreboard::load(args.config_dir.join("scores.json"));
        Ok(Self {
            levels,
            settings,
            scoreboard,
            seed: args.seed,
        })
    }

    /// Play one level to the end, then offer the score to the scoreboard
    fn play(&mut self, level_name: &str) -> Result<(), ConfigError> {
        let level = self.levels.find(level_name)?.clone();
        let seed = self.seed.unwrap_or_else(time_seed);

        let mut state = GameState::with_dimensions(
            level,
            seed,
            self.settings.screen_width,
            self.settings.screen_height,
            WORLD_WIDTH,
        );
        let mut clock = FrameClock::new(SIM_DT);
        let frame_dt = self.settings.frame_dt();
        let mut next_hud = 0.0;

        while state.running() {
            for _ in 0..clock.advance(frame_dt) {
                let input = autopilot(&state);
                step(&mut state, SIM_DT, &input);
                report_events(&state.events);
                if !state.running() {
                    break;
                }
            }

            if state.clock >= next_hud {
                next_hud += 1.0;
                let frame = snapshot(&state);
                println!(
                    "[{}] time {:>3}  score {:>4}  ammo {}/{}{}  targets {}  camera {:.0}",
                    frame.level_name,
                    frame.time_left.ceil() as u32,
                    frame.score,
                    frame.ammo,
                    frame.max_ammo,
                    if frame.reloading { " (reloading)" } else { "" },
                    frame.targets.len(),
                    frame.camera_offset_x,
                );
            }
        }

        let frame = snapshot(&state);
        println!();
        println!(
            "{}  final score {}  accuracy {:.0}%",
            if frame.victory { "VICTORY!" } else { "GAME OVER" },
            frame.score,
            state.stats.accuracy() * 100.0
        );

        if state.outcome != Some(RunOutcome::Aborted) {
            if let Some(position) = self.scoreboard.potential_rank(state.score) {
                println!("Score would rank #{} on the leaderboard", position);
            }
            let name = self.settings.player_name.clone();
            if let Some(rank) = self.scoreboard.record_run(&name, state.score) {
                println!("New high score! {} is #{}", name, rank);
            }
        }
        Ok(())
    }

    fn show_scoreboard(&self) {
        println!("High Scores");
        if self.scoreboard.is_empty() {
            println!("  (no scores yet)");
        }
        for (idx, entry) in self.scoreboard.entries().iter().enumerate() {
            println!("  {}. {} - {}", idx + 1, entry.name, entry.score);
        }
    }
}

fn report_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Hit { id, points } => println!("  hit #{} +{}", id, points),
            GameEvent::Miss { penalty } => println!("  miss -{}", penalty),
            GameEvent::ReloadStarted => println!("  reloading..."),
            _ => {}
        }
    }
}

fn draw_menu(menu: &Menu) {
    let title = match menu.state {
        MenuState::Main { .. } => "Campus Frenzy",
        MenuState::LevelSelect { .. } => "Select Level",
    };
    println!();
    println!("== {} ==", title);
    for (index, option) in menu.options().iter().enumerate() {
        let marker = if index == menu.state.selected() { ">" } else { " " };
        println!("{} {}", marker, option);
    }
    print!("[w/s/enter/esc] ");
    let _ = io::stdout().flush();
}

fn parse_key(line: &str) -> Option<MenuInput> {
    match line.trim().to_lowercase().as_str() {
        "w" | "up" | "k" => Some(MenuInput::Up),
        "s" | "down" | "j" => Some(MenuInput::Down),
        "" | "enter" => Some(MenuInput::Confirm),
        "esc" | "q" | "back" => Some(MenuInput::Back),
        _ => None,
    }
}

fn run_menu(game: &mut Game) -> Result<(), ConfigError> {
    let mut menu = Menu::new(game.levels.names());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        draw_menu(&menu);
        let Some(Ok(line)) = lines.next() else {
            // stdin closed
            return Ok(());
        };
        let Some(input) = parse_key(&line) else {
            continue;
        };

        match menu.handle(input) {
            Some(MenuAction::StartGame(index)) => {
                if let Some(name) = menu.level_name(index).map(str::to_string) {
                    game.play(&name)?;
                }
            }
            Some(MenuAction::ShowScoreboard) => game.show_scoreboard(),
            Some(MenuAction::ShowHelp) => {
                for line in HELP_LINES {
                    println!("{}", line);
                }
            }
            Some(MenuAction::Quit) => return Ok(()),
            None => {}
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Campus Frenzy starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("usage: campus-frenzy [--config-dir DIR] [--seed N] [--autoplay LEVEL]");
            return ExitCode::from(2);
        }
    };

    let result = Game::load(&args).and_then(|mut game| match args.autoplay.as_deref() {
        Some(level) => game.play(level),
        None => run_menu(&mut game),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
