use crate::report::Roster;
use crate::schedule::{Planner, PlannerConfig};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

mod aircraft;
mod airport;
mod error;
mod flight;
mod loader;
mod report;
mod schedule;
mod time;

#[derive(Parser)]
#[command(about = "Assigns a fleet to a day of flights, ferrying aircraft where needed")]
struct Args {
    /// Flights CSV: departure,origin,destination,duration
    #[arg(short, long, value_name = "FILE", default_value = "data/flights.csv")]
    flights: PathBuf,

    /// Home bases CSV: model,airport,registration
    #[arg(short = 'b', long, value_name = "FILE", default_value = "data/homebases.csv")]
    homebases: PathBuf,

    /// Never estimate ferry times from the opposite direction of a known route
    #[arg(long)]
    no_reverse_estimate: bool,

    /// Disable memoization of infeasible search states
    #[arg(long)]
    no_memo: bool,

    /// Print the flight plan and exit instead of starting the prompt
    #[arg(long)]
    print: bool,

    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            reverse_route_estimate: !self.no_reverse_estimate,
            memoize: !self.no_memo,
        }
    }
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();
        Ok((0, candidates))
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("FLEETPLAN_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {e}"))?;
    Ok(())
}

fn paginate(content: &str) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(pager) => pager,
        Err(_) => {
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn show<T: Tabled>(rows: &[T], empty: &str) {
    if rows.is_empty() {
        println!("{}", empty.yellow());
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        paginate(&table.to_string());
    } else {
        println!("{}", table);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let home_bases = loader::load_home_bases(&args.homebases)?;
    let flights = loader::load_flights(&args.flights)?;
    println!(
        "Loaded {} flights and {} aircraft.",
        flights.len(),
        home_bases.len()
    );

    let solution = match Planner::new(args.planner_config()).build(home_bases, flights) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{}", format!("Cannot build a valid schedule: {}", e).red());
            return Err(e.into());
        }
    };
    let roster = Roster::new(solution.assignments, solution.stats);
    println!(
        "{}",
        format!(
            "Schedule ready: {} assignments, {} ferry legs.",
            roster.assignments().len(),
            roster.assignments().iter().filter(|a| a.is_ferry()).count()
        )
        .green()
    );

    if args.print {
        show(&roster.flight_plan(None), "No flights scheduled.");
        return Ok(());
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["plan", "ops", "export", "stats", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "plan" => {
                        show(&roster.flight_plan(parts.get(1).copied()), "No matching flights found.");
                    },
                    "ops" => {
                        if let Some(registration) = parts.get(1) {
                            show(
                                &roster.operating_instructions(registration),
                                "No flights found for that aircraft.",
                            );
                        } else {
                            println!("Usage: ops <registration>");
                        }
                    },
                    "export" => {
                        if let Some(file) = parts.get(1) {
                            match roster.export_flight_plan(Path::new(file), parts.get(2).copied()) {
                                Ok(count) => println!("{}", format!("Wrote {} entries to {}.", count, file).green()),
                                Err(e) => println!("{}", format!("Export failed: {}", e).red()),
                            }
                        } else {
                            println!("Usage: export <file> [airport]");
                        }
                    },
                    "stats" => println!("Search: {}", roster.stats()),
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  plan [airport]           - Show the flight plan, optionally only departures from <airport>");
                        println!("  ops <registration>       - Show the operating instructions of one aircraft");
                        println!("  export <file> [airport]  - Write the flight plan as JSON");
                        println!("  stats                    - Show search statistics");
                        println!("  help / ?                 - Show this help menu");
                        println!("  exit / quit              - Exit\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
