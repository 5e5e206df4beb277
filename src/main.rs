//! tender-classify 命令行工具
//! 对后端招标列表导出的 JSON 文件执行分类、过滤、统计与重新分类
//!
//! 运行命令：
//! cargo run --features cli -- classify "Sunucu ve switch alımı"

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use tender_classifier::{
    category_stats, filter_by_category, parse_tenders, recategorize, retain_allowed,
    ClassifierConfig, RuleVerdict, TenderClassifier, TenderRecord,
};

#[derive(Parser)]
#[command(name = "tender-classify", version)]
#[command(about = "Keyword-based category classifier for tender listings")]
struct Cli {
    /// Category catalog JSON file (built-in tables when omitted)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Allowed category key, repeatable (all categories when omitted)
    #[arg(long = "allow", global = true)]
    allow: Vec<String>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single tender title
    Classify {
        title: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Print matched keywords per category
        #[arg(long)]
        explain: bool,
    },
    /// List configured categories
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Classify every tender in a JSON listing export
    Batch {
        file: PathBuf,
        /// Only keep tenders of this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only keep tenders in allowed categories
        #[arg(long)]
        allowed_only: bool,
    },
    /// Per-category counts and last update
    Stats { file: PathBuf },
    /// Recompute stored categories and report changes
    Recategorize {
        file: PathBuf,
        /// Write updated records here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let classifier = build_classifier(cli.catalog, cli.allow)?;

    match cli.command {
        Commands::Classify {
            title,
            description,
            explain,
        } => classify(&classifier, &title, description.as_deref(), explain),
        Commands::Categories { json } => categories(&classifier, json),
        Commands::Batch {
            file,
            category,
            allowed_only,
        } => batch(&classifier, &file, category.as_deref(), allowed_only),
        Commands::Stats { file } => stats(&classifier, &file),
        Commands::Recategorize { file, output } => {
            recategorize_file(&classifier, &file, output.as_deref())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .init();
}

fn build_classifier(catalog: Option<PathBuf>, allow: Vec<String>) -> Result<TenderClassifier> {
    let mut builder = ClassifierConfig::custom();
    if let Some(path) = catalog {
        builder = builder.catalog_file(path);
    }
    if !allow.is_empty() {
        builder = builder.allowed_categories(allow);
    }
    TenderClassifier::new(builder.build()).context("failed to build classifier")
}

fn read_tenders(file: &Path) -> Result<Vec<TenderRecord>> {
    let content =
        fs::read_to_string(file).with_context(|| format!("cannot read {}", file.display()))?;
    parse_tenders(&content).with_context(|| format!("invalid tender listing in {}", file.display()))
}

fn classify(
    classifier: &TenderClassifier,
    title: &str,
    description: Option<&str>,
    explain: bool,
) -> Result<()> {
    if !explain {
        println!("{}", classifier.classify(title, description));
        return Ok(());
    }

    let result = classifier.classify_detailed(title, description);
    println!("{} ({})", result.key, result.name);
    for verdict in &result.verdicts {
        let marker = match verdict.verdict {
            RuleVerdict::Accepted(_) => "+",
            RuleVerdict::Rejected(_) => "-",
            RuleVerdict::Excluded { .. } => "x",
        };
        println!("  {} {}: {}", marker, verdict.key, verdict.verdict.describe());
    }
    Ok(())
}

fn categories(classifier: &TenderClassifier, json: bool) -> Result<()> {
    let options = tender_classifier::category_options(classifier.catalog(), std::iter::empty());
    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        for option in options {
            println!("{}\t{}", option.key, option.name);
        }
    }
    Ok(())
}

fn batch(
    classifier: &TenderClassifier,
    file: &Path,
    category: Option<&str>,
    allowed_only: bool,
) -> Result<()> {
    let tenders = read_tenders(file)?;
    let tenders: Vec<TenderRecord> = filter_by_category(classifier, &tenders, category)
        .into_iter()
        .cloned()
        .collect();

    let tenders = if allowed_only {
        retain_allowed(classifier, tenders)
    } else {
        tenders
            .into_iter()
            .map(|mut t| {
                t.category = Some(classifier.classify(&t.title, t.description()).to_string());
                t
            })
            .collect()
    };

    println!("{}", serde_json::to_string_pretty(&tenders)?);
    Ok(())
}

fn stats(classifier: &TenderClassifier, file: &Path) -> Result<()> {
    let tenders = read_tenders(file)?;
    let stats = category_stats(classifier, &tenders);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn recategorize_file(classifier: &TenderClassifier, file: &Path, output: Option<&Path>) -> Result<()> {
    let mut tenders = read_tenders(file)?;
    let changes = recategorize(classifier, &mut tenders);

    for change in &changes {
        println!(
            "ID: {} - {} -> {}\n  {}",
            change.id,
            change.old.as_deref().unwrap_or("-"),
            change.new,
            change.title
        );
    }
    println!("{} of {} tenders changed", changes.len(), tenders.len());

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&tenders)?;
        fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
    }
    Ok(())
}
