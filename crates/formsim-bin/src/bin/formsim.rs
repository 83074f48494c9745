use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formsim::{
    approximate_match, compile_pattern, convert_to_dfa, recognize_balanced_run, ErrorBudget,
};
use log::info;

#[derive(Parser)]
#[command(name = "formsim", about = "Finite automata, approximate matching and a^n b^n recognition")]
struct Cli {
    /// Log at debug level when RUST_LOG is not set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a pattern and run every recognizer over the given strings
    Run {
        #[arg(long)]
        pattern: String,
        /// String tested for an exact match against the pattern
        #[arg(long)]
        input: String,
        /// Sequence searched for an approximate occurrence of the pattern
        #[arg(long)]
        sequence: Option<String>,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        max_errors: i64,
        /// String checked by the a^n b^n stack recognizer
        #[arg(long)]
        pda: Option<String>,
    },
    /// Report NFA and DFA verdicts for each input
    Accept {
        #[arg(long)]
        pattern: String,
        inputs: Vec<String>,
    },
    /// Search for the pattern in the sequence within an edit budget
    Approx {
        #[arg(long)]
        sequence: String,
        #[arg(long)]
        pattern: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        max_errors: i64,
    },
    /// Check each input against a^n b^n
    Balanced { inputs: Vec<String> },
}

fn verdict(accepted: bool) -> &'static str {
    if accepted {
        "ACCEPT"
    } else {
        "REJECT"
    }
}

fn accept(pattern: &str, inputs: &[String]) {
    let nfa = compile_pattern(pattern);
    let dfa = convert_to_dfa(&nfa);
    info!(
        "pattern {:?}: {} nfa states, {} dfa states",
        pattern,
        nfa.state_count(),
        dfa.state_count()
    );

    for input in inputs {
        println!(
            "{:?}: NFA {}, DFA {}",
            input,
            verdict(nfa.simulate(input)),
            verdict(dfa.simulate(input))
        );
    }
}

fn approx(sequence: &str, pattern: &str, max_errors: i64) -> Result<()> {
    let budget = ErrorBudget::try_from(max_errors).context("invalid --max-errors")?;
    let found = approximate_match(sequence, pattern, budget.get());
    println!(
        "{:?} in {:?} with at most {} error(s): {}",
        pattern,
        sequence,
        budget.get(),
        if found { "found" } else { "not found" }
    );
    Ok(())
}

fn balanced(inputs: &[String]) {
    for input in inputs {
        println!("{:?}: PDA {}", input, verdict(recognize_balanced_run(input)));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Command::Run {
            pattern,
            input,
            sequence,
            max_errors,
            pda,
        } => {
            // validate up front so nothing is printed for a bad budget
            ErrorBudget::try_from(max_errors).context("invalid --max-errors")?;
            accept(&pattern, std::slice::from_ref(&input));
            if let Some(sequence) = sequence {
                approx(&sequence, &pattern, max_errors)?;
            }
            if let Some(pda) = pda {
                balanced(std::slice::from_ref(&pda));
            }
        }
        Command::Accept { pattern, inputs } => accept(&pattern, &inputs),
        Command::Approx {
            sequence,
            pattern,
            max_errors,
        } => approx(&sequence, &pattern, max_errors)?,
        Command::Balanced { inputs } => balanced(&inputs),
    }

    Ok(())
}
