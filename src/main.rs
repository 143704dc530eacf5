//! Geo Domains - geo-targeted domain name generation and availability estimation
//!
//! Combines bulk keywords with the cities of a selected country or state,
//! estimates availability for every combination, and renders paginated,
//! exportable results.

use std::env;
use std::path::PathBuf;
use std::process;

use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Select, Text};
use tracing_subscriber::EnvFilter;

use geo_domains::{
    catalog, present,
    present::{ExternalTool, Paginator},
    CancelToken, CheckConfig, GeoDomainError, KeywordMode, KeywordPosition, Result, SearchEngine,
    SearchOutcome, SearchRequest, Strategy, SwapRule,
};

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = geo_domains::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("geo-domains {}", geo_domains::VERSION);
        return;
    }

    let mut options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    if let Err(e) = fill_missing(&mut options) {
        eprintln!("{}", e.user_message());
        process::exit(2);
    }

    if let Err(e) = run_search(options).await {
        tracing::error!(error = %e, "search failed");
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Parsed command line options
struct CliOptions {
    keywords: Option<String>,
    country: Option<String>,
    state: Option<String>,
    extension: String,
    position: KeywordPosition,
    swap: bool,
    swap_rule: SwapRule,
    keyword_mode: KeywordMode,
    strategy: Strategy,
    min_length: Option<usize>,
    max_length: Option<usize>,
    page: usize,
    page_size: usize,
    seed: Option<u64>,
    csv: Option<PathBuf>,
    copy: bool,
    links: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            keywords: None,
            country: None,
            state: None,
            extension: ".com".to_string(),
            position: KeywordPosition::Beginning,
            swap: false,
            swap_rule: SwapRule::default(),
            keyword_mode: KeywordMode::default(),
            strategy: Strategy::default(),
            min_length: None,
            max_length: None,
            page: 1,
            page_size: 20,
            seed: None,
            csv: None,
            copy: false,
            links: false,
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut positional: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--country" | "-c" => options.country = Some(flag_value(&mut iter, arg)?),
            "--state" | "-s" => options.state = Some(flag_value(&mut iter, arg)?),
            "--tld" | "--extension" => options.extension = flag_value(&mut iter, arg)?,
            "--position" => {
                options.position = match flag_value(&mut iter, arg)?.as_str() {
                    "beginning" => KeywordPosition::Beginning,
                    "end" => KeywordPosition::End,
                    other => {
                        return Err(GeoDomainError::cli(format!(
                            "Invalid --position '{}': use 'beginning' or 'end'",
                            other
                        )))
                    }
                }
            }
            "--swap" => options.swap = true,
            "--swap-rule" => {
                options.swap_rule = match flag_value(&mut iter, arg)?.as_str() {
                    "invert" => SwapRule::Invert,
                    "end-only" => SwapRule::EndOnly,
                    other => {
                        return Err(GeoDomainError::cli(format!(
                            "Invalid --swap-rule '{}': use 'invert' or 'end-only'",
                            other
                        )))
                    }
                }
            }
            "--keyword-mode" => {
                options.keyword_mode = match flag_value(&mut iter, arg)?.as_str() {
                    "split" => KeywordMode::Split,
                    "literal" => KeywordMode::Literal,
                    other => {
                        return Err(GeoDomainError::cli(format!(
                            "Invalid --keyword-mode '{}': use 'split' or 'literal'",
                            other
                        )))
                    }
                }
            }
            "--strategy" => {
                options.strategy = match flag_value(&mut iter, arg)?.as_str() {
                    "heuristic" => Strategy::Heuristic,
                    "probe" => Strategy::Probe,
                    "prober" => Strategy::Prober,
                    other => {
                        return Err(GeoDomainError::cli(format!(
                            "Invalid --strategy '{}': use 'heuristic', 'probe', or 'prober'",
                            other
                        )))
                    }
                }
            }
            "--min-len" => options.min_length = Some(numeric_value(&mut iter, arg)?),
            "--max-len" => options.max_length = Some(numeric_value(&mut iter, arg)?),
            "--page" => options.page = numeric_value(&mut iter, arg)?,
            "--page-size" => options.page_size = numeric_value(&mut iter, arg)?,
            "--seed" => options.seed = Some(numeric_value(&mut iter, arg)?),
            "--csv" => options.csv = Some(PathBuf::from(flag_value(&mut iter, arg)?)),
            "--copy" => options.copy = true,
            "--links" => options.links = true,
            flag if flag.starts_with('-') => {
                return Err(GeoDomainError::cli(format!("Unknown flag: {}", flag)))
            }
            keyword => positional.push(keyword.to_string()),
        }
    }

    if !positional.is_empty() {
        options.keywords = Some(positional.join(" "));
    }

    Ok(options)
}

fn flag_value(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| GeoDomainError::cli(format!("Missing value for {}", flag)))
}

fn numeric_value<T: std::str::FromStr>(
    iter: &mut std::slice::Iter<'_, String>,
    flag: &str,
) -> Result<T> {
    let raw = flag_value(iter, flag)?;
    raw.parse()
        .map_err(|_| GeoDomainError::cli(format!("Invalid number '{}' for {}", raw, flag)))
}

/// Prompt interactively for anything required that the flags left out
fn fill_missing(options: &mut CliOptions) -> Result<()> {
    if options.keywords.is_none() {
        let input = Text::new("Keywords (comma or newline separated):")
            .with_placeholder("lawyer, attorney, legal services")
            .prompt()
            .map_err(|e| GeoDomainError::cli(e.to_string()))?;
        options.keywords = Some(input);
    }

    if options.country.is_none() {
        let labels: Vec<String> = catalog::countries()
            .iter()
            .map(|c| format!("{} ({})", c.name, c.code))
            .collect();
        let choice = Select::new("Country:", labels)
            .prompt()
            .map_err(|e| GeoDomainError::cli(e.to_string()))?;
        options.country = catalog::countries()
            .iter()
            .find(|c| choice.ends_with(&format!("({})", c.code)))
            .map(|c| c.code.to_string());
    }

    Ok(())
}

/// Run the search and render everything the flags asked for
async fn run_search(options: CliOptions) -> Result<()> {
    let request = SearchRequest {
        keywords: options.keywords.clone().unwrap_or_default(),
        keyword_mode: options.keyword_mode,
        country: options.country.clone().unwrap_or_default(),
        state: options.state.clone(),
        keyword_position: options.position,
        extension: options.extension.clone(),
        swap_words: options.swap,
        swap_rule: options.swap_rule,
        min_length: options.min_length,
        max_length: options.max_length,
    };

    let config = CheckConfig::default();
    let strategy = geo_domains::build_strategy(options.strategy, &config, options.seed);
    let engine = SearchEngine::new(strategy, config);
    let cancel = CancelToken::new();

    println!("🌍 Geo Domains - keyword × city domain generator");
    println!("═════════════════════════════════════════════════");
    println!();

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::with_template("🔍 {pos}/{len} checked  [{bar:30}]  {msg} available")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let outcome = engine
        .search_with_progress(&request, &cancel, |p| {
            progress.set_length(p.total as u64);
            progress.set_position(p.checked as u64);
            progress.set_message(p.available_count.to_string());
        })
        .await?;
    progress.finish_and_clear();

    display_outcome(&outcome, &options);

    if let Some(path) = &options.csv {
        present::export_csv(path, &outcome.candidates)?;
        println!();
        println!("💾 Exported {} rows to {}", outcome.candidates.len(), path.display());
    }

    if options.copy {
        // Newline-joined domain list for the terminal/pipe to hand to the
        // system clipboard (e.g. `geo-domains ... --copy | pbcopy`)
        println!();
        println!("{}", present::clipboard_text(&outcome.candidates));
    }

    Ok(())
}

fn display_outcome(outcome: &SearchOutcome, options: &CliOptions) {
    if outcome.cancelled {
        println!("⚠️  Search cancelled; unchecked domains are marked taken");
    }

    println!(
        "📊 {} keyword(s) × {} cities → {} domains",
        outcome.summary.keyword_count, outcome.summary.city_count, outcome.summary.domain_count
    );
    println!();

    if outcome.candidates.is_empty() {
        println!("😔 No domains matched your criteria. Try different keywords or location.");
        return;
    }

    let available = outcome.candidates.iter().filter(|c| c.available).count();
    let paginator = Paginator::new(options.page_size);
    let page = paginator.page(&outcome.candidates, options.page);

    println!(
        "📄 Page {} of {} (domains {}-{} of {})",
        page.number, page.total_pages, page.start, page.end, page.total
    );
    println!();
    println!(
        "{:<34} {:<16} {:<16} {:>12}  {:<16} STATUS",
        "DOMAIN", "KEYWORD", "CITY", "POPULATION", "STATE"
    );
    println!("{}", "─".repeat(110));

    for candidate in page.items {
        let status = if candidate.available { "✅ available" } else { "❌ taken" };
        let trademark = if candidate.trademark { " ⚠️ ™" } else { "" };
        println!(
            "{:<34} {:<16} {:<16} {:>12}  {:<16} {}{}",
            candidate.domain,
            candidate.keyword,
            candidate.city,
            candidate.population,
            candidate.state,
            status,
            trademark
        );

        if options.links {
            for tool in ExternalTool::ALL {
                println!("     ↳ {:<10} {}", tool.label(), tool.url(candidate));
            }
        }
    }

    println!();
    println!("📈 Summary:");
    println!("   ✅ Available: {}", available);
    println!("   ❌ Taken: {}", outcome.candidates.len() - available);
    println!("   📊 Total checked: {}", outcome.candidates.len());
}

/// Print help information
fn print_help() {
    println!("🌍 Geo Domains - geo-targeted domain name generation");
    println!("═════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    geo-domains [KEYWORDS] [OPTIONS]");
    println!();
    println!("EXAMPLES:");
    println!("    geo-domains \"lawyer, attorney\" --country US --state Texas");
    println!("    geo-domains pizza --country CA --tld .co --position beginning");
    println!("    geo-domains lawyer -c US --strategy heuristic --seed 42 --csv out.csv");
    println!();
    println!("OPTIONS:");
    println!("    -c, --country CODE      Country code (US or CA)");
    println!("    -s, --state NAME        Restrict to one state/province (exact name)");
    println!("    --tld EXT               Domain extension (default .com)");
    println!("    --position POS          Keyword position: beginning|end (default beginning)");
    println!("    --swap                  Toggle the word order swap");
    println!("    --swap-rule RULE        Swap semantics: invert|end-only (default invert)");
    println!("    --keyword-mode MODE     Keyword parsing: split|literal (default split)");
    println!("    --strategy NAME         heuristic|probe|prober (default heuristic)");
    println!("    --min-len N             Minimum domain length (inclusive)");
    println!("    --max-len N             Maximum domain length (inclusive)");
    println!("    --page N                Result page to display (default 1)");
    println!("    --page-size N           Rows per page: e.g. 10, 20, 50 (default 20)");
    println!("    --seed N                Fix the heuristic RNG for reproducible runs");
    println!("    --csv PATH              Export all results as CSV");
    println!("    --copy                  Print the newline-joined domain list (pipe to clipboard)");
    println!("    --links                 Show external research links per domain");
    println!("    -h, --help              Show this help");
    println!("    -V, --version           Show version");
    println!();
    println!("STRATEGIES:");
    println!("    heuristic  Offline simulation from population tiers (no network)");
    println!("    probe      Single HTTPS probe per domain (response ⇒ taken)");
    println!("    prober     Cached WHOIS → DNS → HTTP chain (5 min TTL)");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
