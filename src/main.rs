use clap::Parser as ClapParser;
use jsonexpr::{
    Mode,
    cli::{self, CliError, QueryOptions, QueryResult},
};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(ClapParser)]
#[command(name = "jsonexpr")]
#[command(about = "Evaluate a path expression against a JSON document")]
#[command(version)]
struct Cli {
    /// JSON file to query ('-' reads from stdin)
    file: PathBuf,

    /// Expression to evaluate, e.g. 'a.b[1]' or 'max(a.b[0], 10)'
    expression: String,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Only validate syntax, don't evaluate
    #[arg(long)]
    syntax_only: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let document = read_document(&cli.file)?;

    let options = QueryOptions {
        expression: cli.expression,
        document,
        mode: if cli.pretty { Mode::Pretty } else { Mode::Compact },
        syntax_only: cli.syntax_only,
    };

    match cli::execute(&options)? {
        QueryResult::SyntaxValid => println!("Syntax is valid"),
        QueryResult::Success(output) => println!("{}", output),
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<Option<String>, CliError> {
    if path.as_os_str() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Ok(None);
        }
        log::debug!("reading document from stdin");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(Some(buffer));
    }

    log::debug!("reading document from {}", path.display());
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })
}
