use clap::Parser;
use inject_monaco::injection_code;
use inject_monaco::InjectOptions;
use inject_monaco::MonacoInjectPlugin;
use std::fs;
use std::fs::File;
use std::io::stdin;
use std::io::stdout;
use std::io::Read;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "inject-monaco",
  about = "Prepend the Monaco worker bootstrap to an entry module"
)]
struct Cli {
  /// File to transform; omit for stdin.
  #[arg(short, long)]
  input: Option<PathBuf>,

  /// Output destination; omit for stdout.
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Module path matched against the configured entry; defaults to the input
  /// path, or to the entry itself when reading stdin.
  #[arg(long)]
  id: Option<String>,

  /// Entry path the injection targets (suffix match).
  #[arg(long)]
  entry: Option<String>,

  /// Language to wire a worker for; repeat for several.
  #[arg(short, long)]
  language: Vec<String>,

  /// JSON options file (entry/languages/debug); explicit flags win over it.
  #[arg(long, value_name = "PATH")]
  options: Option<PathBuf>,

  /// Log the matched file on successful injection.
  #[arg(long)]
  debug: bool,

  /// Print only the synthesized prologue and exit.
  #[arg(long)]
  print_prologue: bool,

  /// Print the dependency pre-resolution include list, one module per line,
  /// and exit.
  #[arg(long)]
  include: bool,
}

fn exit_with_error(message: impl Into<String>) -> ! {
  eprintln!("error: {}", message.into());
  process::exit(1);
}

fn install_subscriber(debug: bool) {
  if !debug {
    return;
  }

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn resolve_options(args: &Cli) -> InjectOptions {
  let mut options = match args.options.as_ref() {
    Some(path) => {
      let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => exit_with_error(format!("failed to read {}: {err}", path.display())),
      };
      match serde_json::from_str(&text) {
        Ok(options) => options,
        Err(err) => exit_with_error(format!("failed to parse {}: {err}", path.display())),
      }
    }
    None => InjectOptions::default(),
  };

  if let Some(entry) = args.entry.as_ref() {
    options.entry = entry.clone();
  }
  if !args.language.is_empty() {
    options.languages = args.language.clone();
  }
  if args.debug {
    options.debug = true;
  }
  options
}

fn main() {
  let args = Cli::parse();
  install_subscriber(args.debug);
  let options = resolve_options(&args);

  if args.include {
    let plugin = MonacoInjectPlugin::new(options);
    let mut out = String::new();
    for module in plugin.config().optimize_deps_include {
      out.push_str(module);
      out.push('\n');
    }
    if let Err(err) = stdout().write_all(out.as_bytes()) {
      exit_with_error(format!("failed to write output: {err}"));
    }
    return;
  }

  if args.print_prologue {
    if let Err(err) = stdout().write_all(injection_code(&options.languages).as_bytes()) {
      exit_with_error(format!("failed to write output: {err}"));
    }
    return;
  }

  let mut input = Vec::new();
  let mut input_file: Box<dyn Read> = match args.input.as_ref() {
    Some(path) => match File::open(path) {
      Ok(file) => Box::new(file),
      Err(err) => exit_with_error(format!("failed to open {}: {err}", path.display())),
    },
    None => Box::new(stdin()),
  };
  if let Err(err) = input_file.read_to_end(&mut input) {
    exit_with_error(format!("failed to read input: {err}"));
  }
  let source = match std::str::from_utf8(&input) {
    Ok(source) => source,
    Err(err) => exit_with_error(format!("input is not valid UTF-8: {err}")),
  };

  let id = args
    .id
    .clone()
    .or_else(|| {
      args
        .input
        .as_ref()
        .map(|path| path.to_string_lossy().into_owned())
    })
    .unwrap_or_else(|| options.entry.clone());

  let plugin = MonacoInjectPlugin::new(options);
  let code = match plugin.transform(source, &id) {
    Some(result) => result.code,
    // Non-entry modules pass through untouched, as the host pipeline would
    // treat them.
    None => source.to_string(),
  };

  let write_result = match args.output.as_ref() {
    Some(path) => File::create(path)
      .and_then(|mut file| file.write_all(code.as_bytes()))
      .map_err(|err| (path.display().to_string(), err)),
    None => stdout()
      .write_all(code.as_bytes())
      .map_err(|err| ("<stdout>".to_string(), err)),
  };
  if let Err((dest, err)) = write_result {
    exit_with_error(format!("failed to write {dest}: {err}"));
  }
}
