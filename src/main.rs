mod app;
mod config;
mod input;
mod theme;
mod util;
mod view;
use crate::app::App;
use crate::config::Config;
use crate::theme::Theme;
use anyhow::Context;
use gridsnake::game::Game;
use lexopt::{Arg, Parser, ValueExt};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [options]

Play Snake in the terminal.  Steer with the arrow keys, WASD, or HJKL; quit
with q or Ctrl-C.

Options:
  -c, --config <PATH>     Read configuration from the given file
      --log-file <PATH>   Write log messages to the given file
      --seed <N>          Seed the placement of the snake & food
  -h, --help              Display this help message and exit
  -V, --version           Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    seed: Option<u64>,
}

fn main() -> ExitCode {
    match Command::from_parser(Parser::from_env()) {
        Ok(Command::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Ok(Command::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;
    if let Some(path) = args.log_file.as_deref().or(config.logging.file.as_deref()) {
        init_logging(path, config.logging.level())?;
    }
    let seed = args.seed.or(config.seed);
    info!(
        "Starting gridsnake {} (seed: {seed:?})",
        env!("CARGO_PKG_VERSION")
    );
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let app = App::new(Game::new_with_rng(rng), Theme::from(&config.display));
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    io_ok(r).context("terminal I/O failed")
}

/// Send log messages to the file at `path`, filtered by `RUST_LOG` or, if that
/// is unset, by `level`
fn init_logging(path: &Path, level: &str) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")
}

fn io_ok(r: io::Result<()>) -> io::Result<()> {
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], Command::Run(Arguments::default()))]
    #[case(&["--seed", "42"], Command::Run(Arguments {
        seed: Some(42),
        ..Arguments::default()
    }))]
    #[case(&["-c", "snake.toml", "--log-file=snake.log"], Command::Run(Arguments {
        config: Some(PathBuf::from("snake.toml")),
        log_file: Some(PathBuf::from("snake.log")),
        seed: None,
    }))]
    #[case(&["--help"], Command::Help)]
    #[case(&["--seed", "7", "-h"], Command::Help)]
    #[case(&["-V"], Command::Version)]
    fn parse_args(#[case] argv: &[&str], #[case] cmd: Command) {
        let parser = Parser::from_iter(std::iter::once("gridsnake").chain(argv.iter().copied()));
        assert_eq!(Command::from_parser(parser).expect("arguments should parse"), cmd);
    }

    #[rstest]
    #[case(&["--seed", "forty-two"])]
    #[case(&["--seed"])]
    #[case(&["--walls"])]
    #[case(&["extra"])]
    fn bad_args(#[case] argv: &[&str]) {
        let parser = Parser::from_iter(std::iter::once("gridsnake").chain(argv.iter().copied()));
        assert!(Command::from_parser(parser).is_err());
    }

    #[test]
    fn broken_pipe_is_ok() {
        assert!(io_ok(Err(io::Error::from(ErrorKind::BrokenPipe))).is_ok());
        assert!(io_ok(Err(io::Error::from(ErrorKind::Other))).is_err());
    }
}
