mod config;
mod script;

use algorithms::{ArrayQueue, subset_sum_distinct, subset_sum_with_repetition};
use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use config::{DemoConfig, OutputFormat};
use script::{QueueReport, parse_ops, run_script};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SubsetSumReport {
    nums: Vec<i32>,
    target: i32,
    distinct: bool,
    subsets: Vec<Vec<i32>>,
}

fn cli() -> Command {
    Command::new("hello-algo")
        .version("0.1")
        .about("Runs the hello-algo queue and backtracking demos")
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .help("Output format, text or json (falls back to HELLO_ALGO_FORMAT)"),
        )
        .subcommand(
            Command::new("queue")
                .about("Apply operations to a bounded circular queue")
                .arg(
                    Arg::new("capacity")
                        .long("capacity")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Fixed queue capacity"),
                )
                .arg(
                    Arg::new("ops")
                        .num_args(0..)
                        .help("Operations: push:<int>, pop, peek, clear"),
                ),
        )
        .subcommand(
            Command::new("subset-sum")
                .about("List subsets of positive integers summing to a target")
                .arg(
                    Arg::new("target")
                        .long("target")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("nums")
                        .long("nums")
                        .required(true)
                        .value_delimiter(',')
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32))
                        .help("Comma separated candidates, e.g. 3,4,5"),
                )
                .arg(
                    Arg::new("distinct")
                        .long("distinct")
                        .action(ArgAction::SetTrue)
                        .help("Use each candidate at most once"),
                ),
        )
}

fn run_queue(config: &DemoConfig, matches: &ArgMatches) -> Result<()> {
    let capacity = *matches
        .get_one::<usize>("capacity")
        .ok_or_else(|| anyhow!("--capacity is required"))?;
    let ops = parse_ops(
        matches
            .get_many::<String>("ops")
            .unwrap_or_default()
            .map(String::as_str),
    )?;

    let mut queue = ArrayQueue::new(capacity)?;
    let steps = run_script(&mut queue, &ops);

    match config.format {
        OutputFormat::Json => {
            let report = QueueReport {
                steps,
                queue: queue.snapshot(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("queue capacity = {}", capacity);
            for step in &steps {
                match (&step.error, step.returned) {
                    (Some(e), _) => eprintln!("{:<10} failed: {}", step.op, e),
                    (None, Some(value)) => println!(
                        "{:<10} -> {:<6} queue = {:?}",
                        step.op,
                        value,
                        step.items
                    ),
                    (None, None) => println!(
                        "{:<10}           queue = {:?}",
                        step.op,
                        step.items
                    ),
                }
            }
            println!("size = {}, empty = {}", queue.len(), queue.is_empty());
            println!("queue = {:?}", queue.to_vec());
        }
    }
    Ok(())
}

fn run_subset_sum(config: &DemoConfig, matches: &ArgMatches) -> Result<()> {
    let target = *matches
        .get_one::<i32>("target")
        .ok_or_else(|| anyhow!("--target is required"))?;
    let nums: Vec<i32> = matches
        .get_many::<i32>("nums")
        .unwrap_or_default()
        .copied()
        .collect();
    let distinct = matches.get_flag("distinct");

    let subsets = if distinct {
        subset_sum_distinct(&nums, target)?
    } else {
        subset_sum_with_repetition(&nums, target)?
    };

    match config.format {
        OutputFormat::Json => {
            let report = SubsetSumReport {
                nums,
                target,
                distinct,
                subsets,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("target = {}, nums = {:?}", target, nums);
            println!("subsets summing to {} ({} found):", target, subsets.len());
            for subset in &subsets {
                println!("  {:?}", subset);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let config = DemoConfig::from_env(matches.get_one::<String>("format").map(String::as_str))?;

    match matches.subcommand() {
        Some(("queue", sub_matches)) => run_queue(&config, sub_matches)?,
        Some(("subset-sum", sub_matches)) => run_subset_sum(&config, sub_matches)?,
        _ => {
            println!("Use --help for usage.");
        }
    }
    Ok(())
}
