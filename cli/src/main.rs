mod highlighter;
mod lexer;
mod output;

use bumpalo::Bump;
use clap::Parser;
use miette::Result;
use output::{Radix, format_value};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, Reedline, ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;
use tally::{
    CompilationOptions, Engine, EngineOptions, Error, ExecutionOptions, render_error,
};
use tally_core::parser;
use tracing::{debug, warn};

const HISTORY_SIZE: usize = 1000;

/// tally - evaluate boolean and integer expressions
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Evaluate tally expressions", long_about = None)]
struct Args {
    /// Print the parse tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Print the typed expression (for debugging)
    #[arg(long)]
    debug_type: bool,

    /// Output radix for results
    #[arg(long, value_enum, default_value_t = Radix::Dec)]
    format: Radix,

    /// Print results in binary (same as `--format bin`)
    #[arg(short = 'b', conflicts_with_all = ["format", "hex"])]
    binary: bool,

    /// Print results in hexadecimal (same as `--format hex`)
    #[arg(short = 'x', conflicts_with = "format")]
    hex: bool,

    /// Maximum evaluation depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum nesting depth of an expression
    #[arg(long)]
    max_parse_depth: Option<usize>,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

impl Args {
    fn radix(&self) -> Radix {
        if self.binary {
            Radix::Bin
        } else if self.hex {
            Radix::Hex
        } else {
            self.format
        }
    }

    fn engine_options(&self) -> EngineOptions {
        let mut options = EngineOptions::default();
        if let Some(max_depth) = self.max_depth {
            options.default_execution_options = ExecutionOptions { max_depth };
        }
        if let Some(max_depth) = self.max_parse_depth {
            options.default_compilation_options = CompilationOptions { max_depth };
        }
        options
    }
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_validator(Box::new(lexer::ParenValidator))
        .with_edit_mode(edit_mode);

    if let Some(path) = dirs::data_dir().map(|dir| dir.join("tally").join("history.txt")) {
        match FileBackedHistory::with_file(HISTORY_SIZE, path) {
            Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
            Err(e) => warn!("history disabled: {e}"),
        }
    }

    let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

    (line_editor, prompt)
}

/// Compile and run one line. Errors are rendered and never end the session.
fn interpret_input(engine: &Engine, input: &str, args: &Args) {
    if args.debug_parse {
        let arena = Bump::new();
        let max_depth = engine.options().default_compilation_options.max_depth;
        match parser::parse_line_with_max_depth(&arena, input, max_depth) {
            Ok(line) => {
                println!("=== Parse Tree ===");
                for expr in line.exprs {
                    println!("{:#?}", expr);
                }
                println!();
            }
            Err(e) => {
                render_error(&Error::from(e));
                return;
            }
        }
    }

    let exprs = match engine.compile_line(input) {
        Ok(exprs) => exprs,
        Err(e) => {
            render_error(&e);
            return;
        }
    };
    debug!(statements = exprs.len(), "compiled line");

    if args.debug_type {
        println!("=== Typed Expression ===");
        for expr in &exprs {
            println!("{} : {}", expr.expr(), expr.return_type());
        }
        println!();
    }

    for expr in &exprs {
        match expr.run() {
            Ok(value) => println!("{}", format_value(value, args.radix())),
            Err(e) => {
                render_error(&e);
                return;
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use TALLY_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("TALLY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(args.engine_options());

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&engine, expr, &args);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline();

        println!("tally REPL - Type expressions to evaluate (Ctrl+D or Ctrl+C to exit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => interpret_input(&engine, &buffer, &args),
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            interpret_input(&engine, &line, &args);
        }
    }

    Ok(())
}
