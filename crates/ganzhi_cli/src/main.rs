mod logger;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ganzhi_rs::{
    BirthMoment, CalendarType, Engine, EngineConfig, GanzhiError, Gender, MonthBoundary,
    ReadingContext, ZiHourMode,
};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary (BaZi) chart CLI")]
struct Cli {
    /// JSON engine config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override month boundary
    #[arg(long, global = true, value_enum)]
    boundary: Option<BoundaryArg>,
    /// Override Zi-hour handling
    #[arg(long, global = true, value_enum)]
    zi_hour: Option<ZiHourArg>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct BirthArgs {
    /// Birth date YYYY-MM-DD (lunar date with --lunar)
    #[arg(long, value_parser = parse_ymd)]
    date: (i32, u32, u32),
    /// Local standard-time hour 0-23
    #[arg(long, default_value = "12")]
    hour: u32,
    /// IANA zone name or offset such as +09:00
    #[arg(long, default_value = "UTC")]
    tz: String,
    /// Date is in the Chinese lunar calendar
    #[arg(long)]
    lunar: bool,
    /// Lunar date falls in the leap month
    #[arg(long, requires = "lunar")]
    leap: bool,
    #[arg(long, value_enum)]
    gender: Option<GenderArg>,
}

#[derive(Args, Clone)]
struct ContextArgs {
    /// Reading date YYYY-MM-DD (default: today)
    #[arg(long)]
    as_of: Option<NaiveDate>,
    /// Topic to interpret; repeatable (default: all)
    #[arg(long = "topic")]
    topics: Vec<String>,
    /// Name used in the report summary
    #[arg(long)]
    name: Option<String>,
    /// Show Chinese characters in the report
    #[arg(long)]
    hanzi: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars of a birth moment
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Five-element balance, ten gods and favorable elements
    Elements {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Decade luck timeline
    Luck {
        #[command(flatten)]
        birth: BirthArgs,
        /// Reading date YYYY-MM-DD (default: today)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Topic interpretations
    Reading {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        ctx: ContextArgs,
    },
    /// Full report
    Report {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        ctx: ContextArgs,
    },
    /// Convert a Gregorian date to the Chinese lunar calendar
    Lunar {
        /// Gregorian date YYYY-MM-DD
        date: NaiveDate,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

#[derive(Clone, Copy, ValueEnum)]
enum BoundaryArg {
    SolarTerm,
    CalendarMonth,
}

#[derive(Clone, Copy, ValueEnum)]
enum ZiHourArg {
    SameDay,
    Traditional,
    LateZi,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Ganzhi(#[from] GanzhiError),
    #[error(transparent)]
    Time(#[from] ganzhi_time::TimeError),
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_ymd(s: &str) -> Result<(i32, u32, u32), String> {
    let mut parts = s.splitn(3, '-');
    let mut next = |what: &str| {
        parts
            .next()
            .ok_or_else(|| format!("missing {what} in {s:?}, expected YYYY-MM-DD"))
    };
    let year = next("year")?;
    let month = next("month")?;
    let day = next("day")?;
    Ok((
        year.parse().map_err(|_| format!("bad year {year:?}"))?,
        month.parse().map_err(|_| format!("bad month {month:?}"))?,
        day.parse().map_err(|_| format!("bad day {day:?}"))?,
    ))
}

impl BirthArgs {
    fn to_birth(&self) -> BirthMoment {
        let (year, month, day) = self.date;
        BirthMoment {
            year,
            month,
            day,
            hour: self.hour,
            calendar: if self.lunar {
                CalendarType::Lunar
            } else {
                CalendarType::Solar
            },
            timezone: self.tz.clone(),
            leap_month: self.leap,
            gender: self.gender.map(|g| match g {
                GenderArg::Male => Gender::Male,
                GenderArg::Female => Gender::Female,
            }),
        }
    }
}

impl ContextArgs {
    fn to_context(&self) -> ReadingContext {
        let mut ctx = ReadingContext::new(self.as_of.unwrap_or_else(today));
        if !self.topics.is_empty() {
            ctx = ctx.with_topics(self.topics.iter().cloned());
        }
        ctx.display.subject = self.name.clone();
        ctx.display.show_hanzi = self.hanzi;
        ctx
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn load_config(cli: &Cli) -> Result<EngineConfig, GanzhiError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(b) = cli.boundary {
        config.calendar.month_boundary = match b {
            BoundaryArg::SolarTerm => MonthBoundary::SolarTerm,
            BoundaryArg::CalendarMonth => MonthBoundary::CalendarMonth,
        };
    }
    if let Some(z) = cli.zi_hour {
        config.calendar.zi_hour = match z {
            ZiHourArg::SameDay => ZiHourMode::SameDay,
            ZiHourArg::Traditional => ZiHourMode::Traditional,
            ZiHourArg::LateZi => ZiHourMode::LateZi,
        };
    }
    log::debug!("engine config: {config:?}");
    Ok(config)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let engine = Engine::new(load_config(cli)?);

    match &cli.command {
        Commands::Pillars { birth } => {
            let p = engine.compute(&birth.to_birth())?;
            if cli.json {
                return print_json(&p);
            }
            for (pos, pillar) in p.iter() {
                println!(
                    "{:<6} {:<10} {}  {}/{}",
                    pos.name(),
                    pillar.to_string(),
                    pillar.hanzi(),
                    pillar.stem().element(),
                    pillar.branch().element()
                );
            }
            println!("day master: {}", p.day_master());
        }

        Commands::Elements { birth } => {
            let p = engine.compute(&birth.to_birth())?;
            let balance = engine.analyze_elements(&p);
            let gods = engine.resolve_ten_gods(&p);
            let strength = engine.classify_strength(&balance, p.day_master());
            let favorable = engine.select_favorable_elements(&balance, &strength);
            if cli.json {
                return print_json(&serde_json::json!({
                    "balance": balance,
                    "ten_gods": gods,
                    "strength": strength,
                    "favorable": favorable,
                }));
            }
            let c = balance.counts;
            println!(
                "wood {} fire {} earth {} metal {} water {}",
                c.wood, c.fire, c.earth, c.metal, c.water
            );
            println!(
                "dominant {}  weakest {}  score {}/100",
                balance.dominant, balance.weakest, balance.score
            );
            println!(
                "ten gods: year {}  month {}  hour {}",
                gods.year, gods.month, gods.hour
            );
            println!(
                "day master {:?} ({} of {}); reinforce {:?}; restrain {:?}",
                strength.class, strength.support, strength.total, favorable.reinforce,
                favorable.restrain
            );
        }

        Commands::Luck { birth, as_of } => {
            let birth = birth.to_birth();
            let p = engine.compute(&birth)?;
            let t = engine.project_luck_timeline(&p, &birth, as_of.unwrap_or_else(today))?;
            if cli.json {
                return print_json(&t);
            }
            println!(
                "{:?} from age {}, now {} ({})",
                t.direction, t.start_age, t.current_age, t.as_of
            );
            let current = t.window_index(t.current_age);
            for (i, w) in t.windows.iter().enumerate() {
                let marker = if i as u32 == current { "*" } else { " " };
                println!("{marker} {w}");
            }
        }

        Commands::Reading { birth, ctx } => {
            let reading = engine.reading(&birth.to_birth(), &ctx.to_context())?;
            if cli.json {
                return print_json(&reading.answers);
            }
            for a in &reading.answers {
                println!("[{}] {}", a.topic, a.one_liner);
                println!("  {}", a.rationale);
                for item in &a.action_items {
                    println!("  - {item}");
                }
            }
        }

        Commands::Report { birth, ctx } => {
            let reading = engine.reading(&birth.to_birth(), &ctx.to_context())?;
            if cli.json {
                return print_json(&reading.report);
            }
            println!("{}\n", reading.report.summary);
            for s in &reading.report.sections {
                println!("== {} ==\n{}\n", s.title, s.body);
            }
        }

        Commands::Lunar { date } => {
            let lunar = ganzhi_time::solar_to_lunar(*date)?;
            if cli.json {
                return print_json(&lunar);
            }
            let leap = if lunar.leap { " (leap)" } else { "" };
            println!(
                "lunar {}-{:02}-{:02}{leap}",
                lunar.year, lunar.month, lunar.day
            );
            match ganzhi_time::leap_month(lunar.year)? {
                Some(m) => println!("leap month in {}: {m}", lunar.year),
                None => println!("no leap month in {}", lunar.year),
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ymd_accepts_lunar_days() {
        assert_eq!(parse_ymd("2023-2-30"), Ok((2023, 2, 30)));
        assert!(parse_ymd("2023-02").is_err());
        assert!(parse_ymd("x-1-1").is_err());
    }

    #[test]
    fn cli_parses_report_command() {
        let cli = Cli::try_parse_from([
            "ganzhi",
            "report",
            "--date",
            "1990-05-15",
            "--hour",
            "12",
            "--tz",
            "Asia/Seoul",
            "--gender",
            "male",
            "--as-of",
            "2024-06-01",
            "--topic",
            "career",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        let Commands::Report { birth, ctx } = cli.command else {
            panic!("expected report");
        };
        let b = birth.to_birth();
        assert_eq!((b.year, b.month, b.day, b.hour), (1990, 5, 15, 12));
        assert_eq!(b.gender, Some(Gender::Male));
        let c = ctx.to_context();
        assert_eq!(c.topics, vec!["career".to_string()]);
        assert_eq!(c.as_of, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn leap_requires_lunar() {
        assert!(
            Cli::try_parse_from(["ganzhi", "pillars", "--date", "1990-05-15", "--leap"]).is_err()
        );
    }
}
