//! Headless Galaxy Wars runner

use anyhow::{Context, Result};
use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use arcade_engine::input::ScriptedInput;
use arcade_engine::render::HeadlessSurface;
use clap::{value_parser, Arg, ArgAction, Command};
use galaxy_wars::{Game, GameConfig};
use std::path::PathBuf;

const DEFAULT_FRAMES: u64 = 3600;

fn main() -> Result<()> {
    let matches = cli().get_matches();

    logging::init_with_default("info");

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let input = match matches.get_one::<PathBuf>("script") {
        Some(path) => ScriptedInput::load(path)
            .with_context(|| format!("Failed to load input script {}", path.display()))?,
        None => ScriptedInput::empty(),
    };

    let frame_limit = if matches.get_flag("unlimited") {
        0
    } else {
        config.window.frame_limit
    };
    let surface =
        HeadlessSurface::new(config.window.width, config.window.height).with_frame_limit(frame_limit);

    let seed = matches
        .get_one::<u64>("seed")
        .copied()
        .unwrap_or_else(clock_seed);
    let frames = matches
        .get_one::<u64>("frames")
        .copied()
        .unwrap_or(DEFAULT_FRAMES);

    let mut game = Game::new(config, surface, input, seed)
        .context("Failed to start game")?
        .with_max_frames(frames);
    game.run();

    println!("{}", game.score_text());
    Ok(())
}

fn cli() -> Command {
    Command::new("galaxy_wars")
        .about("Runs Galaxy Wars on a headless surface and prints the final score")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Game configuration (.toml, .ron, or legacy .txt/.cfg)"),
        )
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .value_name("COUNT")
                .value_parser(value_parser!(u64))
                .help("Stop after this many frames [default: 3600]"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Random seed (defaults to the current time)"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("RON input script to replay"),
        )
        .arg(
            Arg::new("unlimited")
                .long("unlimited")
                .action(ArgAction::SetTrue)
                .help("Ignore the configured frame limit"),
        )
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_cli_parses_run_options() {
        let matches = cli()
            .try_get_matches_from(["galaxy_wars", "-c", "game.toml", "--seed", "42", "--unlimited"])
            .unwrap();

        assert_eq!(matches.get_one::<PathBuf>("config"), Some(&PathBuf::from("game.toml")));
        assert_eq!(matches.get_one::<u64>("seed"), Some(&42));
        assert_eq!(matches.get_one::<u64>("frames"), None);
        assert!(matches.get_flag("unlimited"));

        assert!(cli().try_get_matches_from(["galaxy_wars", "--frames", "many"]).is_err());
    }
}
