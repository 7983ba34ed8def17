/*!
A simple CLI interface to the library.

# Use

```sh
resolute_cli -f problem.json [--option(=value)]*
```

The problem file is JSON with two keys, `knowledge_base` and `negated_theorem_predicates`, each an array of clause strings.

The stored given clauses are listed first, then either the refutation or a note that none exists.
The exit code is zero whichever way the question settles; a file, decode, or clause error exits non-zero with a message on stderr.
*/

use clap::Parser;

use resolute::{
    builder::Problem, config::Config, context::Context, reports::Report, types::err::ErrorKind,
};

/// Establishes whether a conjecture follows from a knowledge base by resolution refutation.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The JSON problem file to read
    #[arg(short = 'f', long = "file")]
    problem_file: std::path::PathBuf,

    /// Suppress the listing of the given clauses
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// An upper bound on the number of saturation levels
    #[arg(long)]
    level_limit: Option<usize>,

    /// An upper bound on the number of stored clauses
    #[arg(long)]
    clause_limit: Option<usize>,

    /// Fail unification of a variable against a term containing that variable
    #[arg(long, default_value_t = false)]
    occurs_check: bool,
}

/// Entrypoint to the CLI.
fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = Config {
        occurs_check: args.occurs_check,
        level_limit: args.level_limit,
        clause_limit: args.clause_limit,
    };

    let problem = match Problem::from_path(&args.problem_file) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let mut ctx = match Context::from_problem(&problem, config) {
        Ok(ctx) => ctx,
        Err(ErrorKind::Build(e)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Unexpected error while loading the problem: {e:?}");
            std::process::exit(1);
        }
    };

    if !args.quiet {
        println!("Initial knowledge base clauses are:");
        for stored in ctx.clause_db.original_clauses() {
            println!("Clause {}\t| {}", stored.id(), stored.clause());
        }
    }

    let result = match ctx.saturate() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Unexpected error during the search: {e:?}");
            std::process::exit(2);
        }
    };

    match result {
        Report::Contradiction => {
            println!(
                "Knowledge base contradicts, so inverse of the negated target clause is provable."
            );
            println!("Prove by refutation resolution order will be shown.");

            match ctx.refutation() {
                Some(trace) => println!("{trace}"),
                None => {
                    eprintln!("Unexpected error reconstructing the refutation");
                    std::process::exit(2);
                }
            }
        }

        Report::Consistent | Report::Unknown => {
            println!("Knowledge base does not contradict.");
        }
    }
}
