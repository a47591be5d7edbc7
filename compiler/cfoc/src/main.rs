//! Control-flow oracle CLI.

use cfoc::commands::{
    parse_budget, parse_run_args, run_construct, sample_lines, UsageError, DEFAULT_SAMPLE_BUDGET,
};

const RUN_USAGE: &str = "cfoc run <branch|conditional|loop> <subject> [--budget=N]";
const SAMPLES_USAGE: &str = "cfoc samples [--budget=N | --unbounded]";

fn main() {
    cfoc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            let run_args = match parse_run_args(&args[2..]) {
                Ok(run_args) => run_args,
                Err(err) => usage_error(RUN_USAGE, &err),
            };
            match run_construct(run_args) {
                Ok(line) => println!("{line}"),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "samples" => {
            let mut budget = Some(DEFAULT_SAMPLE_BUDGET);
            for arg in args.iter().skip(2) {
                if let Some(raw) = arg.strip_prefix("--budget=") {
                    match parse_budget(raw) {
                        Ok(value) => budget = Some(value),
                        Err(err) => usage_error(SAMPLES_USAGE, &err),
                    }
                } else if arg == "--unbounded" {
                    budget = None;
                } else {
                    usage_error(SAMPLES_USAGE, &UsageError::UnexpectedArgument(arg.clone()));
                }
            }
            match sample_lines(budget) {
                Ok(lines) => {
                    for line in lines {
                        println!("{line}");
                    }
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn usage_error(usage: &str, err: &UsageError) -> ! {
    eprintln!("error: {err}");
    eprintln!("Usage: {usage}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Control-flow oracle");
    println!();
    println!("Usage: cfoc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <construct> <subject>   Evaluate one construct for one subject");
    println!("  samples                     Replay the sample program's run");
    println!("  help                        Show this message");
    println!();
    println!("Constructs:");
    println!("  branch        switch dispatch with fallthrough (sample_switch)");
    println!("  conditional   if / else-if / else chain (sample_if)");
    println!("  loop          for, do-while and while loops (sample_loop)");
    println!();
    println!("Options:");
    println!("  --budget=N    Stop loops after N steps and report divergence");
    println!("  --unbounded   (samples) Run the loop sample without a budget");
    println!();
    println!("Environment:");
    println!("  CFO_LOG       Tracing filter, e.g. CFO_LOG=cfo_eval=trace");
}
