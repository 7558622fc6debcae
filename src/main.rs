mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use mood_engine::{
    format_float, format_percent, AnalysisResult, EngineConfig, MoodEngine, Sensitivity,
};

#[derive(Parser)]
#[command(name = "mood-engine", about = "Mood inference for journal entries")]
struct Cli {
    /// TOML config file (defaults to $MOOD_CONFIG_PATH or config/mood.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Analyze(AnalyzeArgs),
    Batch(FileArgs),
    Stats(FileArgs),
    InitConfig(InitConfigArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct AnalyzeArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    sensitivity: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct FileArgs {
    /// One entry per line; blank lines are skipped
    #[arg(long)]
    file: PathBuf,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/mood.toml")]
    path: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Analyze(AnalyzeArgs::default()));

    if let Command::InitConfig(args) = &command {
        return run_init_config(&args.path);
    }

    let (config, _) = EngineConfig::load(cli.config).map_err(|err| err.to_string())?;

    match command {
        Command::Analyze(args) => run_analyze(args, config),
        Command::Batch(args) => run_batch(args, config),
        Command::Stats(args) => run_stats(args, config),
        Command::Serve(args) => server::serve(args, config).await,
        Command::InitConfig(_) => Ok(()),
    }
}

fn run_analyze(args: AnalyzeArgs, config: EngineConfig) -> Result<(), String> {
    let engine = MoodEngine::new(config);
    let sensitivity = match args.sensitivity.as_deref() {
        Some(value) => {
            Sensitivity::parse(value).ok_or_else(|| format!("invalid sensitivity: {}", value))?
        }
        None => engine.config().sensitivity.level,
    };

    let text = read_text(args.text)?;
    let result = engine.analyze(&text);

    if args.json {
        return print_json(&result);
    }

    print_result(&result);
    let threshold = engine.config().sensitivity.threshold(sensitivity);
    let verdict = if result.confidence >= threshold {
        "apply"
    } else {
        "keep current mood"
    };
    println!(
        "Sensitivity {} (threshold {}): {}",
        sensitivity.label(),
        format_float(threshold, 2),
        verdict
    );
    Ok(())
}

fn run_batch(args: FileArgs, config: EngineConfig) -> Result<(), String> {
    let engine = MoodEngine::new(config);
    let entries = read_entries(&args.file)?;
    let items = engine.analyze_batch(&entries);

    if args.json {
        return print_json(&items);
    }

    for item in items {
        println!(
            "{} {:>7}  {}",
            item.result.mood.emoji(),
            format_float(item.result.score, 3),
            item.text
        );
    }
    Ok(())
}

fn run_stats(args: FileArgs, config: EngineConfig) -> Result<(), String> {
    let engine = MoodEngine::new(config);
    let entries = read_entries(&args.file)?;
    let stats = engine.get_statistics(&entries);

    if args.json {
        return print_json(&stats);
    }

    println!("Entries: {}", stats.total);
    println!("Average score: {}", format_float(stats.average_score, 3));
    if let Some(mood) = stats.most_common_sentiment {
        println!("Most common mood: {} ({})", mood.emoji(), mood.label());
    }
    println!("Distribution:");
    for (mood, count) in &stats.sentiment_distribution {
        println!("  {} {}: {}", mood.emoji(), mood.label(), count);
    }
    Ok(())
}

fn run_init_config(path: &Path) -> Result<(), String> {
    EngineConfig::default()
        .write(path)
        .map_err(|err| err.to_string())?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn print_result(result: &AnalysisResult) {
    println!("Mood: {} ({})", result.mood.emoji(), result.mood.label());
    println!(
        "Score: {} | confidence {} | words {}",
        format_float(result.score, 3),
        format_float(result.confidence, 3),
        result.word_count
    );
    println!(
        "Heuristic {} | Bayes {} (positive {} | negative {} | neutral {})",
        format_float(result.details.heuristic_score, 3),
        format_float(result.details.bayes_score, 3),
        format_percent(result.details.bayes_probs.positive),
        format_percent(result.details.bayes_probs.negative),
        format_percent(result.details.bayes_probs.neutral)
    );

    let emotions: Vec<String> = result
        .emotions
        .iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(emotion, value)| format!("{} {}", emotion.label(), format_percent(value)))
        .collect();
    if !emotions.is_empty() {
        println!("Emotions: {}", emotions.join(" | "));
    }
    if let Some(emotion) = result.emotions.dominant() {
        println!("Dominant emotion: {}", emotion.label());
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing entry text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn read_entries(path: &Path) -> Result<Vec<String>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
