use clap::{Parser, Subcommand};

// The fixed inputs the `demo` subcommand replays, valid patterns first,
// then the error cases.
const DEMO_PATTERNS: &[&str] = &[
    "ab*",
    "(ab)*",
    "ab|a",
    "a(b|a)",
    "a|b*",
    "(a|b)*",
    "a|b",
    "a",
    "ab",
    "a.*",
    "(a.*)|(bb)",
    "",
    ")(",
    "*",
    "a(",
    "()",
    "a**",
];

#[derive(Parser)]
#[command(name = "rgx")]
#[command(about = "rgx — toy regular-expression parser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a pattern and print its AST
    Parse {
        /// Regex pattern
        pattern: String,
    },

    /// Check a pattern for syntax errors without printing the tree
    Check {
        /// Regex pattern
        pattern: String,
    },

    /// Parse a fixed set of demonstration patterns
    Demo,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { pattern } => cmd_parse(&pattern),
        Command::Check { pattern } => cmd_check(&pattern),
        Command::Demo => cmd_demo(),
    }
}

fn cmd_parse(pattern: &str) {
    let (ast, diagnostics) = rgx_parser::Parser::parse_with_diagnostics(pattern);
    for diagnostic in &diagnostics {
        eprintln!("{diagnostic}");
    }

    match ast {
        Some(ast) => {
            println!("Input: {pattern}");
            println!("AST: {ast:?}");
            println!("RegEx: {ast}");
        }
        None => std::process::exit(1),
    }
}

fn cmd_check(pattern: &str) {
    if let Err(e) = rgx_parser::Parser::parse(pattern) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    eprintln!("OK: {pattern}");
}

fn cmd_demo() {
    for pattern in DEMO_PATTERNS {
        let (ast, diagnostics) = rgx_parser::Parser::parse_with_diagnostics(pattern);
        for diagnostic in &diagnostics {
            eprintln!("{diagnostic}");
        }

        println!("Input: {pattern}");
        if let Some(ast) = &ast {
            println!("AST: {ast:?}");
            println!("RegEx: {ast}");
        }
        println!("===");
    }
}
