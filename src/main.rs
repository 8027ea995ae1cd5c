use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use tac_compiler::{
    ast::interchange::{to_json, to_json_pretty},
    backend::riscv,
    lexer::lexer::LexPolicy,
    pipeline::{compile_source, tokenize_source, Compilation, PipelineOptions},
    render_error,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Stop at the first unrecognised character
    Abort,
    /// Report unrecognised characters and keep going
    Continue,
}

impl From<PolicyArg> for LexPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Abort => LexPolicy::AbortOnFirst,
            PolicyArg::Continue => LexPolicy::ContinueAndReport,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    Symbols,
    Tac,
    Riscv,
}

/// Compiles a source file of the toy language down to three-address code.
#[derive(Parser, Debug)]
#[command(name = "tacc", version, about, long_about = None)]
struct Args {
    /// Source file to compile
    input: PathBuf,
    /// What to do with unrecognised characters
    #[arg(long, value_enum, default_value = "abort")]
    lex_policy: PolicyArg,
    /// Stage output to print
    #[arg(short, long, value_enum, default_value = "tac")]
    emit: Emit,
    /// Print symbols and TAC as JSON
    #[arg(long)]
    json: bool,
    /// Also write the syntax tree as JSON to this path
    #[arg(long)]
    ast_out: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let source = match fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", args.input.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.to_string_lossy().into_owned());

    let options = PipelineOptions {
        lex_policy: args.lex_policy.into(),
        file: file_name,
    };

    if let Emit::Tokens = args.emit {
        return emit_tokens(&source, &options);
    }

    let start = Instant::now();
    let compilation = match compile_source(&source, &options) {
        Ok(compilation) => compilation,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };
    info!("compiled in {:?}", start.elapsed());

    for message in compilation.analysis.messages() {
        eprintln!("warning: {}", message);
    }
    for warning in &compilation.lowered.warnings {
        eprintln!("warning: {}", warning);
    }

    if let Some(path) = &args.ast_out {
        if let Err(error) = write_tree(&compilation, path) {
            eprintln!("Failed to write {}: {}", path.display(), error);
            return ExitCode::FAILURE;
        }
    }

    match emit(&compilation, args.emit, args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Failed to emit output: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn emit_tokens(source: &str, options: &PipelineOptions) -> ExitCode {
    let tokenized = match tokenize_source(source, options) {
        Ok(tokenized) => tokenized,
        Err(error) => {
            eprint!("{}", render_error(&error, source));
            return ExitCode::FAILURE;
        }
    };

    for token in &tokenized.tokens {
        println!("{}", token);
    }
    for error in &tokenized.unrecognised {
        eprint!("{}", render_error(error, source));
    }

    if tokenized.unrecognised.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_tree(compilation: &Compilation, path: &Path) -> Result<(), String> {
    let document = to_json_pretty(&compilation.tree).map_err(|error| error.to_string())?;
    fs::write(path, document).map_err(|error| error.to_string())
}

fn emit(compilation: &Compilation, emit: Emit, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match emit {
        Emit::Tokens => {
            for token in &compilation.tokens {
                println!("{}", token);
            }
        }
        Emit::Ast => println!("{}", to_json(&compilation.tree)?),
        Emit::Symbols if json => {
            println!("{}", serde_json::to_string_pretty(compilation.analysis.symbols.entries())?)
        }
        Emit::Symbols => {
            for entry in compilation.analysis.symbols.iter() {
                println!("{}", entry);
            }
        }
        Emit::Tac if json => println!("{}", serde_json::to_string_pretty(&compilation.tac_lines())?),
        Emit::Tac => {
            for line in compilation.tac_lines() {
                println!("{}", line);
            }
        }
        Emit::Riscv => {
            for line in riscv::translate(&compilation.tac_lines()) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
