use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use trustrank::menu::run_menu;
use trustrank::report::render_report;
use trustrank_api::{Checker, CheckerConfig, RestApi, REST_PREVIEW_CHARS};
use trustrank_extract::ExtractorConfig;
use trustrank_similarity::{AnalysisReport, DEFAULT_PREVIEW_CHARS};
use trustrank_storage::{AddOutcome, CorpusManager, TrustedDomains};

/// News credibility checker backed by a corpus of trusted articles
#[derive(Parser, Debug)]
#[command(name = "trustrank", version)]
#[command(about = "Check news against trusted sources", long_about = None)]
struct Args {
    /// Trusted articles database
    #[arg(long, global = true, default_value = "trusted_articles.json")]
    articles: PathBuf,

    /// Trusted sources (domain allowlist) file
    #[arg(long, global = true, default_value = "trusted_sources.json")]
    sources: PathBuf,

    /// Characters of article text shown in reports [default: 500, 300 for serve]
    #[arg(long, global = true)]
    preview_chars: Option<usize>,

    /// Timeout for fetching article pages
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP API
    Serve {
        /// HTTP API port
        #[arg(long, default_value_t = 5000)]
        http_port: u16,
    },
    /// Check the article at a URL
    CheckUrl { url: String },
    /// Check a text; read from stdin when omitted
    CheckText { text: Option<String> },
    /// Fetch an article and add it to the trusted database
    Add { url: String },
    /// List the trusted articles
    List,
    /// Interactive menu (default)
    Menu,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let command = args.command.unwrap_or(Command::Menu);
    let default_preview = match command {
        Command::Serve { .. } => REST_PREVIEW_CHARS,
        _ => DEFAULT_PREVIEW_CHARS,
    };
    let config = CheckerConfig {
        preview_chars: args.preview_chars.unwrap_or(default_preview),
        extractor: ExtractorConfig {
            timeout: Duration::from_secs(args.timeout_secs),
            ..ExtractorConfig::default()
        },
        ..CheckerConfig::default()
    };

    let allowlist = TrustedDomains::load(&args.sources);
    if allowlist.is_empty() {
        warn!("No trusted sources loaded, no URL will be reported as trusted");
    }

    let corpus = Arc::new(CorpusManager::open(&args.articles));
    if corpus.is_empty() {
        warn!("Trusted article database is empty, every text will be rated HIGHLY_SUSPICIOUS");
    } else {
        info!("Loaded {} trusted articles", corpus.len());
    }

    let checker = Arc::new(Checker::from_config(corpus, allowlist, &config)?);

    match command {
        Command::Serve { http_port } => serve(checker, http_port).await?,
        Command::CheckUrl { url } => {
            let report = checker.check_url(&url).await?;
            print_report(&report, args.json)?;
        }
        Command::CheckText { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let report = checker.check_text(&text)?;
            print_report(&report, args.json)?;
        }
        Command::Add { url } => {
            let added = checker.add_article(&url).await?;
            if args.json {
                let result = match added.outcome {
                    AddOutcome::Added => "added",
                    AddOutcome::AlreadyExists => "exists",
                };
                println!("{}", serde_json::json!({ "result": result, "title": added.title }));
            } else {
                match added.outcome {
                    AddOutcome::Added => println!("Article added: {}", added.title),
                    AddOutcome::AlreadyExists => println!("Article already in the database: {}", added.title),
                }
            }
        }
        Command::List => {
            let articles = checker.articles();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "result": articles }))?);
            } else {
                for article in &articles {
                    println!("{}\t{}", article.url, article.title);
                }
            }
        }
        Command::Menu => {
            println!("TrustRank v{}", env!("CARGO_PKG_VERSION"));
            println!("Loaded {} trusted articles", checker.corpus().len());
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_menu(&checker, &mut stdin.lock(), &mut stdout.lock()).await?;
        }
    }

    Ok(())
}

fn print_report(report: &AnalysisReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", render_report(report));
    }
    Ok(())
}

async fn serve(checker: Arc<Checker>, http_port: u16) -> anyhow::Result<()> {
    info!("Starting TrustRank v{}", env!("CARGO_PKG_VERSION"));

    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(checker, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
