use anyhow::{bail, Context};
use bookmatch_catalog::{CatalogConfig, CatalogError, GoogleBooksClient};
use bookmatch_core::Book;
use bookmatch_corpus::{genres, to_books, CorpusLoader};
use bookmatch_similarity::{Ranked, SimilarityConfig, SimilarityEngine};
use bookmatch_tone::{analyze, ToneReport};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dotenv::dotenv;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Book recommendations from your reading history
#[derive(Parser, Debug)]
#[command(name = "bookmatch")]
#[command(about = "Find books similar to the ones you like", long_about = None)]
struct Args {
    /// Log level (ignored when RUST_LOG is set)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// JSON file with similarity weights
    #[arg(long)]
    config: Option<PathBuf>,

    /// Google Books API key
    #[arg(long, env = "GOOGLE_BOOKS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the catalog
    Search {
        query: String,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Recommend books for the reading history stored in a folder
    Recommend {
        dir: PathBuf,
        #[arg(long, default_value_t = 5)]
        limit: usize,
        /// Candidates fetched per genre of the history
        #[arg(long, default_value_t = 20)]
        per_genre: usize,
    },
    /// Find books similar to a search hit
    Similar {
        query: String,
        /// 1-based index of the search hit to use; prompts when omitted
        #[arg(long)]
        pick: Option<usize>,
        #[arg(long, default_value_t = 5)]
        limit: usize,
        /// Reorder the catalog's suggestions by local similarity
        #[arg(long)]
        rerank: bool,
    },
    /// Tag the tone and style of a text file ("-" for stdin)
    Analyze { input: String },
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        return Ok(());
    }

    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

struct App {
    engine: SimilarityEngine,
    catalog: Option<GoogleBooksClient>,
}

impl App {
    fn new(config: Option<&Path>, api_key: Option<String>) -> anyhow::Result<Self> {
        let similarity = match config {
            Some(path) => SimilarityConfig::from_json_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => SimilarityConfig::default(),
        };
        let engine = SimilarityEngine::new(similarity).context("invalid similarity config")?;

        let catalog = match api_key.filter(|k| !k.trim().is_empty()) {
            Some(key) => Some(GoogleBooksClient::new(CatalogConfig::default(), key)?),
            None => {
                debug!("No API key configured, catalog commands are disabled");
                None
            }
        };

        Ok(Self { engine, catalog })
    }

    fn catalog(&self) -> anyhow::Result<&GoogleBooksClient> {
        self.catalog
            .as_ref()
            .ok_or(CatalogError::MissingApiKey)
            .context("set GOOGLE_BOOKS_API_KEY or pass --api-key")
    }

    async fn search(&self, query: &str, limit: usize) -> anyhow::Result<()> {
        let books = self
            .catalog()?
            .search(query, limit)
            .await
            .with_context(|| format!("search for {:?} failed", query))?;

        if books.is_empty() {
            println!("No books found!");
            return Ok(());
        }
        println!("\n{}", "Search Results:".bold());
        for (i, book) in books.iter().enumerate() {
            print_book(i + 1, book);
        }
        Ok(())
    }

    async fn recommend(&self, dir: &Path, limit: usize, per_genre: usize) -> anyhow::Result<()> {
        let corpus = CorpusLoader::new()
            .load_dir(dir)
            .with_context(|| format!("failed to load reading history from {}", dir.display()))?;
        if corpus.is_empty() {
            println!("No readable books found in {}", dir.display());
            return Ok(());
        }
        let history = to_books(&corpus);
        info!("Reading history holds {} books", history.len());

        let queries: Vec<String> = {
            let genres = genres(&corpus);
            if genres.is_empty() {
                corpus.iter().map(|b| format!("inauthor:{}", b.author.trim())).collect()
            } else {
                genres.iter().map(|g| format!("subject:{}", g)).collect()
            }
        };

        println!("Fetching potential recommendations...");
        let catalog = self.catalog()?;
        let mut candidates = Vec::new();
        for query in &queries {
            match catalog.search(query, per_genre).await {
                Ok(mut books) => candidates.append(&mut books),
                Err(e) => warn!("Candidate search {:?} failed: {}", query, e),
            }
        }

        // Books already in the history are not worth recommending
        candidates.retain(|c| {
            !history
                .iter()
                .any(|h| h.title.eq_ignore_ascii_case(&c.title))
        });
        if candidates.is_empty() {
            println!("No candidate books found.");
            return Ok(());
        }

        let picks = self.engine.recommend(&history, &candidates, limit)?;
        println!("\n{}", "Recommended Books:".bold());
        for (i, pick) in picks.iter().enumerate() {
            print_book(i + 1, pick.book);
            println!("   Score: {}", format!("{:.3}", pick.score).green());
        }
        Ok(())
    }

    async fn similar(
        &self,
        query: &str,
        pick: Option<usize>,
        limit: usize,
        rerank: bool,
    ) -> anyhow::Result<()> {
        let catalog = self.catalog()?;
        let books = catalog
            .search(query, 5)
            .await
            .with_context(|| format!("search for {:?} failed", query))?;
        if books.is_empty() {
            println!("No books found!");
            return Ok(());
        }

        let choice = match pick {
            Some(n) => n,
            None => {
                println!("\n{}", "Select a book:".bold());
                for (i, book) in books.iter().enumerate() {
                    println!("{}. {} by {}", i + 1, book.title, book.authors_display());
                }
                match prompt("\nEnter number: ")? {
                    Some(line) => line.trim().parse().unwrap_or(0),
                    None => return Ok(()),
                }
            }
        };
        let Some(target) = choice.checked_sub(1).and_then(|i| books.get(i)) else {
            bail!("choice {} is out of range 1-{}", choice, books.len());
        };

        let similar = catalog
            .similar_books(&target.id, limit)
            .await
            .with_context(|| format!("similar books lookup for {:?} failed", target.title))?;
        if similar.is_empty() {
            println!("No similar books found.");
            return Ok(());
        }

        println!("\n{} {}", "Similar Books to".bold(), target.title.bold());
        if rerank {
            let ranked = self.engine.find_similar(target, &similar, limit);
            for (i, hit) in ranked.iter().enumerate() {
                print_book(i + 1, hit.book);
                print_breakdown(hit);
            }
        } else {
            for (i, book) in similar.iter().enumerate() {
                print_book(i + 1, book);
            }
        }
        Ok(())
    }

    fn analyze(&self, input: &str) -> anyhow::Result<()> {
        let text = if input == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        } else {
            std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?
        };
        print_tone(&analyze(&text));
        Ok(())
    }

    async fn run(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Search { query, limit } => self.search(&query, limit).await,
            Command::Recommend {
                dir,
                limit,
                per_genre,
            } => self.recommend(&dir, limit, per_genre).await,
            Command::Similar {
                query,
                pick,
                limit,
                rerank,
            } => self.similar(&query, pick, limit, rerank).await,
            Command::Analyze { input } => self.analyze(&input),
        }
    }

    async fn interactive(&self) -> anyhow::Result<()> {
        loop {
            println!("\n{}", "Book Recommendation System".bold());
            println!("1. Search for books");
            println!("2. Get recommendations from your reading history (PDF/CSV)");
            println!("3. Get similar books to a specific book");
            println!("4. Analyze the tone of a text file");
            println!("5. Exit");

            let Some(choice) = prompt("\nEnter your choice (1-5): ")? else {
                break;
            };
            let command = match choice.trim() {
                "1" => match prompt("Enter search term: ")? {
                    Some(query) => Command::Search {
                        query: query.trim().to_string(),
                        limit: 5,
                    },
                    None => break,
                },
                "2" => match prompt("Enter the path of the folder: ")? {
                    Some(dir) => Command::Recommend {
                        dir: PathBuf::from(dir.trim()),
                        limit: 5,
                        per_genre: 20,
                    },
                    None => break,
                },
                "3" => match prompt("Enter book title to find similar books: ")? {
                    Some(query) => Command::Similar {
                        query: query.trim().to_string(),
                        pick: None,
                        limit: 5,
                        rerank: false,
                    },
                    None => break,
                },
                "4" => match prompt("Enter the path of the text file: ")? {
                    Some(path) => Command::Analyze {
                        input: path.trim().to_string(),
                    },
                    None => break,
                },
                "5" => break,
                _ => {
                    println!("Invalid choice. Please try again.");
                    continue;
                }
            };

            if let Err(e) = self.run(command).await {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
            }
        }
        println!("Goodbye!");
        Ok(())
    }
}

/// Print `message` and read one line; `None` on end of input
fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn print_book(position: usize, book: &Book) {
    println!("\n{}. {}", position, book.title.bold());
    println!("   Author(s): {}", book.authors_display());
    println!("   Categories: {}", book.categories_display());
}

fn print_breakdown(hit: &Ranked<'_>) {
    let b = &hit.breakdown;
    println!(
        "   Score: {} (content {:.3}, metadata {:.3})",
        format!("{:.3}", hit.score).green(),
        b.content,
        b.metadata
    );
    if let Some(field) = b.metadata_fields.top_field() {
        println!("   {}", format!("Strongest match: {}", field).dimmed());
    }
}

fn print_tone(report: &ToneReport) {
    println!("{} {} ({:+.2})", "Tone:".bold(), report.tone, report.polarity);
    println!(
        "{} {} ({} sentences)",
        "Style:".bold(),
        report.style,
        report.sentence_count
    );
    let keywords = if report.keywords.is_empty() {
        "N/A".to_string()
    } else {
        report.keywords.join(", ")
    };
    println!("{} {}", "Keywords:".bold(), keywords);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    info!("Starting BookMatch v{}", env!("CARGO_PKG_VERSION"));
    let app = App::new(args.config.as_deref(), args.api_key)?;

    match args.command {
        Some(command) => app.run(command).await,
        None => app.interactive().await,
    }
}
