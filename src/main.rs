use std::{fs, sync::Once};

use cinder::{
    config::{CoercionPolicy, Config, MAX_CALL_DEPTH, MAX_NESTING_DEPTH},
    error::CinderError,
    interpreter::{
        analyzer::core::SemanticAnalyzer, evaluator::core::Interpreter, lexer::Lexer,
        parser::core::Parser as SourceParser,
    },
    report::format_diagnostic,
};
use clap::Parser;

static TRACING_INIT: Once = Once::new();

/// cinder runs programs written in a small, statically checked imperative
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells cinder to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Allows an `int` value wherever a `float` is declared, converting it.
    #[arg(short, long)]
    widen: bool,

    /// Prints the token stream instead of running the program.
    #[arg(short, long)]
    tokens: bool,

    /// How deep function calls may nest before execution aborts.
    #[arg(long, default_value_t = MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// How deep expressions and blocks may nest before parsing fails.
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_nesting_depth: usize,

    contents: String,
}

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                            .with_target(true)
                                                            .with_level(true))
                                          .with(EnvFilter::from_default_env())
                                          .init();
        }
    });
}

fn fail(script: &str, error: &CinderError) -> ! {
    eprintln!("{}", format_diagnostic(script, &error.to_string(), error.line()));
    std::process::exit(1);
}

fn print_tokens(script: &str) {
    for token in Lexer::new(script) {
        match token {
            Ok(token) => println!("{:>4}  {}", token.line, token.kind),
            Err(e) => fail(script, &CinderError::from(e)),
        }
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.tokens {
        print_tokens(&script);
        return;
    }

    let config = Config { coercion:          if args.widen {
                                                 CoercionPolicy::WidenIntToFloat
                                             } else {
                                                 CoercionPolicy::Strict
                                             },
                          max_call_depth:    args.max_call_depth,
                          max_nesting_depth: args.max_nesting_depth, };

    let program = SourceParser::new(&script).and_then(|parser| {
                                                parser.with_max_depth(config.max_nesting_depth)
                                                      .parse()
                                            })
                                            .unwrap_or_else(|e| fail(&script, &CinderError::from(e)));

    if let Err(e) = SemanticAnalyzer::new(config).analyze(&program) {
        fail(&script, &CinderError::from(e));
    }

    let mut interpreter = Interpreter::new(config);
    let result = interpreter.interpret(&program);
    print!("{}", interpreter.output());

    if let Err(e) = result {
        fail(&script, &CinderError::from(e));
    }
}
