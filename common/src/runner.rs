use anyhow::{bail, Context};
use tracing::{info, info_span, warn};

use crate::cli::Cli;
use crate::client::AocClient;
use crate::config::Config;
use crate::error::AocError;
use crate::log::{self, Verbosity};
use crate::template::{Answers, Day};

pub type Runner = fn(&Cli) -> anyhow::Result<()>;

/// Picks the day's runner out of a year's table and runs it.
pub fn dispatch(days: &[Runner], cli: &Cli) -> anyhow::Result<()> {
    let runner = (cli.day as usize).checked_sub(1)
        .and_then(|ix| days.get(ix))
        .ok_or(AocError::UnknownDay(cli.day))?;
    runner(cli)
}

fn load_input<D: Day>(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    if cli.example {
        return Ok(D::EXAMPLE.to_owned());
    }
    let path = config.input_path(D::YEAR, D::DAY);
    if cli.local || path.exists() {
        return std::fs::read_to_string(&path).with_context(|| format!("cannot read {}", path.display()));
    }
    let input = AocClient::from_config(config)?.fetch_input(D::YEAR, D::DAY)?;
    if let Err(e) = std::fs::create_dir_all(&config.data_dir).and_then(|_| std::fs::write(&path, &input)) {
        warn!("could not cache input at {}: {e}", path.display());
        eprintln!("warning: could not cache input at {}: {e}", path.display());
    }
    Ok(input)
}

/// Runs one day start to finish: logging, input, solving, checking or submitting.
pub fn run<D: Day>(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load()?;
    let verbosity = Verbosity::from_flags(cli.verbose || cli.example, cli.quiet);
    log::init(&format!("day{}", D::DAY), &config.log_dir, verbosity)?;
    run_with::<D>(cli, &config)
}

fn run_with<D: Day>(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let day = if cli.example {D::for_example()} else {D::default()};
    let input = load_input::<D>(cli, config)?;

    let answers = {
        let _span = info_span!("solve", year = D::YEAR, day = D::DAY, parts = %cli.parts).entered();
        day.solve(&input, cli.parts)?
    };
    println!("{answers}");

    if cli.example {
        let wrong = answers.mismatches(D::EXAMPLE_ANSWERS);
        for (part, want, got) in &wrong {
            eprintln!("part {part}: expected {want}, got {got}");
        }
        if !wrong.is_empty() {
            bail!("example answers do not match for {} day {}", D::YEAR, D::DAY);
        }
        return Ok(());
    }
    if cli.no_submit {
        return Ok(());
    }
    submit::<D>(&answers, cli, config)
}

fn submit<D: Day>(answers: &Answers, cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let client = AocClient::from_config(config)?;
    for part in [1, 2] {
        if !cli.parts.contains(part) {continue}
        let Some(answer) = answers.get(part) else {continue};
        if !answer.is_submittable() {
            warn!("part {part} answer needs reading by eye, not submitting");
            eprintln!("part {part}: answer needs reading by eye, submit it by hand");
            continue;
        }
        let verdict = client.submit(D::YEAR, D::DAY, part, answer.as_str())?;
        info!("part {part}: {verdict}");
        println!("part {part}: {verdict}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::template::Answer;
    use clap::Parser;
    use httpmock::prelude::*;

    fn sum(input: &str) -> anyhow::Result<Vec<u32>> {
        Ok(input.lines().map(|l| l.parse::<u32>()).collect::<Result<Vec<_>, _>>()?)
    }

    #[derive(Default)]
    struct Adding;

    impl Day for Adding {
        const YEAR: u16 = 2000;
        const DAY: u8 = 3;
        const EXAMPLE: &'static str = "1\n2";
        const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("3"), Some("2")];
        type Data = Vec<u32>;

        fn parse(&self, input: &str) -> anyhow::Result<Vec<u32>> {sum(input)}
        fn part1(&self, data: &Vec<u32>) -> anyhow::Result<Answer> {Ok(data.iter().sum::<u32>().into())}
        fn part2(&self, data: &Vec<u32>) -> anyhow::Result<Answer> {Ok(data.len().into())}
    }

    #[derive(Default)]
    struct Miscounting;

    impl Day for Miscounting {
        const YEAR: u16 = 2000;
        const DAY: u8 = 4;
        const EXAMPLE: &'static str = "1\n2";
        const EXAMPLE_ANSWERS: [Option<&'static str>; 2] = [Some("4"), None];
        type Data = Vec<u32>;

        fn parse(&self, input: &str) -> anyhow::Result<Vec<u32>> {sum(input)}
        fn part1(&self, data: &Vec<u32>) -> anyhow::Result<Answer> {Ok(data.iter().sum::<u32>().into())}
        fn part2(&self, data: &Vec<u32>) -> anyhow::Result<Answer> {Ok(data.len().into())}
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["aoc2000"].iter().chain(args)).unwrap()
    }

    #[test]
    fn unknown_days_rejected() {
        let days: [Runner; 1] = [|_| Ok(())];
        for day in ["0", "2"] {
            let err = dispatch(&days, &cli(&[day])).unwrap_err();
            assert!(matches!(err.downcast_ref::<AocError>(), Some(AocError::UnknownDay(_))));
        }
        assert!(dispatch(&days, &cli(&["1"])).is_ok());
    }

    #[test]
    fn example_mismatch_fails() {
        let config = Config::default();
        assert!(run_with::<Adding>(&cli(&["3", "--example"]), &config).is_ok());
        assert!(run_with::<Miscounting>(&cli(&["4", "--example"]), &config).is_err());
    }

    #[test]
    fn local_input_read_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {data_dir: dir.path().to_owned(), ..Config::default()};
        assert!(load_input::<Adding>(&cli(&["3", "--local"]), &config).is_err());

        std::fs::write(config.input_path(2000, 3), "5\n6\n").unwrap();
        assert_eq!(load_input::<Adding>(&cli(&["3", "--local"]), &config).unwrap(), "5\n6\n");
        assert_eq!(load_input::<Adding>(&cli(&["3", "--example"]), &config).unwrap(), Adding::EXAMPLE);
    }

    #[test]
    fn fetched_input_cached() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/2000/day/3/input").header("cookie", "session=abc123");
            then.status(200).body("7\n8\n");
        });
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            session: Some("abc123".to_owned()),
            data_dir: dir.path().join("data"),
            base_url: server.base_url(),
            ..Config::default()
        };

        assert_eq!(load_input::<Adding>(&cli(&["3"]), &config).unwrap(), "7\n8\n");
        assert_eq!(std::fs::read_to_string(config.input_path(2000, 3)).unwrap(), "7\n8\n");
        assert_eq!(load_input::<Adding>(&cli(&["3"]), &config).unwrap(), "7\n8\n");
        mock.assert_hits(1);
    }

    #[test]
    fn fetch_needs_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {data_dir: dir.path().to_owned(), ..Config::default()};
        let err = load_input::<Adding>(&cli(&["3"]), &config).unwrap_err();
        assert!(matches!(err.downcast_ref::<ClientError>(), Some(ClientError::MissingSession)));
    }
}
