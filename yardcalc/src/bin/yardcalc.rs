use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use yardcalc::{EvalConfig, Evaluator, Notation, RpnCheck, ShuntingParser, DEFAULT_CAPACITY};

const EXIT_USAGE: u8 = 64;

/// Evaluate integer arithmetic written in infix or reverse polish notation
#[derive(Parser, Debug)]
#[command(name = "yardcalc", version)]
#[command(about = "Evaluate integer arithmetic in infix or RPN notation", long_about = None)]
struct Args {
    /// Read the expression as RPN
    #[arg(short, long)]
    rpn: bool,

    /// Print the RPN translation of an infix expression instead of its value
    #[arg(long, conflicts_with = "rpn")]
    show_rpn: bool,

    /// Accept RPN input that leaves more than one value on the stack
    #[arg(long)]
    lenient_rpn: bool,

    /// Depth limit for the operator and operand stacks
    #[arg(long, env = "YARDCALC_STACK_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Start an interactive session
    #[arg(short, long)]
    interactive: bool,

    /// The expression, or `rpn` followed by an RPN expression
    #[arg(
        value_name = "EXPR",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        allow_negative_numbers = true
    )]
    words: Vec<String>,
}

fn report(result: yardcalc::Result<String>) -> ExitCode {
    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() { ExitCode::from(EXIT_USAGE) } else { ExitCode::SUCCESS };
        }
    };

    let rpn_check = if args.lenient_rpn { RpnCheck::Lenient } else { RpnCheck::Strict };
    let config = EvalConfig::default()
        .with_capacity(args.capacity)
        .with_rpn_check(rpn_check);
    let mut evaluator = Evaluator::with_config(config);

    if args.interactive {
        return repl::run(&mut evaluator);
    }

    let (notation, expr) = match args.words.split_first() {
        None => {
            eprintln!("{}", Args::command().render_usage());
            return ExitCode::from(EXIT_USAGE);
        }
        Some((first, rest)) if first == "rpn" && !rest.is_empty() => (Notation::Rpn, rest.join(" ")),
        Some(_) if args.rpn => (Notation::Rpn, args.words.join(" ")),
        Some(_) => (Notation::Infix, args.words.join(" ")),
    };

    if args.show_rpn {
        if notation == Notation::Rpn {
            eprintln!("{}", Args::command().render_usage());
            return ExitCode::from(EXIT_USAGE);
        }
        return report(ShuntingParser::parse_with_capacity(&expr, args.capacity).map(|rpn| rpn.to_string()));
    }
    report(evaluator.eval(&expr, notation).map(|n| n.to_string()))
}

mod repl {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use rustyline::error::ReadlineError;
    use yardcalc::{Evaluator, Notation, ShuntingParser};

    enum Command<'a> {
        Quit,
        Skip,
        Eval(Notation, &'a str),
        Show(&'a str),
    }

    fn command(line: &str) -> Command {
        let line = line.trim();
        if line.is_empty() {
            Command::Skip
        } else if line == ":quit" || line == ":q" {
            Command::Quit
        } else if let Some(expr) = line.strip_prefix(":rpn") {
            Command::Eval(Notation::Rpn, expr)
        } else if let Some(expr) = line.strip_prefix(":show") {
            Command::Show(expr)
        } else {
            Command::Eval(Notation::Infix, line)
        }
    }

    fn history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".yardcalc_history"))
    }

    pub fn run(evaluator: &mut Evaluator) -> ExitCode {
        let mut rl = match rustyline::DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Readline err: {:?}", e);
                return ExitCode::FAILURE;
            }
        };
        let histpath = history_path();
        if let Some(path) = &histpath {
            if rl.load_history(path).is_err() {
                log::info!("no history at {}", path.display());
            }
        }

        let status = loop {
            let line = match rl.readline(">> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Readline err: {:?}", e);
                    break ExitCode::FAILURE;
                }
            };
            let _ = rl.add_history_entry(line.as_str());
            match command(&line) {
                Command::Quit => break ExitCode::SUCCESS,
                Command::Skip => (),
                Command::Eval(notation, expr) => match evaluator.eval(expr, notation) {
                    Ok(result) => println!("{}", result),
                    Err(e) => println!("error: {}", e),
                },
                Command::Show(expr) => {
                    match ShuntingParser::parse_with_capacity(expr, evaluator.config().capacity) {
                        Ok(rpn) => println!("{}", rpn),
                        Err(e) => println!("error: {}", e),
                    }
                }
            }
        };

        if let Some(path) = &histpath {
            if let Err(e) = rl.save_history(path) {
                log::warn!("could not save history to {}: {}", path.display(), e);
            }
        }
        status
    }
}
