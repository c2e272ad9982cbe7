//! CarbonCredX CLI
//!
//! Terminal front end for the demo:
//! - Browse every page's data
//! - Run the document verification simulation on local files
//! - Chat with the assistant
//! - Walk through the KYC wizard

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carboncredx::assistant::ChatSession;
use carboncredx::clipboard::TerminalClipboard;
use carboncredx::clock::{Clock, SystemClock};
use carboncredx::config::{generate_default_config, Config, LoggingConfig};
use carboncredx::format::{inr, percent_change};
use carboncredx::kyc::{KycForm, KycStep};
use carboncredx::navigation::Section;
use carboncredx::runtime::{await_reply, drive_uploads};
use carboncredx::upload::{DocumentStatus, FileMeta, RandomAssessor, UploadPipeline};
use carboncredx::views::{dashboard, defi, explorer, market, rwa, wallet};

#[derive(Parser)]
#[command(name = "carboncredx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Carbon credit tokenization demo")]
#[command(long_about = "CarbonCredX simulates verifying, tokenizing and trading carbon credits.\nAll data is mock data and nothing leaves your machine.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the navigable sections
    Sections,

    /// Ask the assistant; starts an interactive session without text
    Chat {
        /// Message to send
        text: Vec<String>,
    },

    /// Verify carbon credit documents
    Upload {
        /// Files to upload (.pdf, .jpg, .jpeg, .png)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Walk through the KYC wizard
    Kyc {
        /// Only list the steps
        #[arg(long)]
        steps: bool,
        /// Full name
        #[arg(long)]
        name: Option<String>,
        /// PAN number
        #[arg(long)]
        pan: Option<String>,
        /// Aadhaar number
        #[arg(long)]
        aadhaar: Option<String>,
    },

    /// Search carbon credit projects
    Explore {
        /// Matches project name, token id or location
        #[arg(short, long, default_value = "")]
        query: String,
        /// Project type (all, forest, redd, afforestation)
        #[arg(long, default_value = "all")]
        filter: explorer::ProjectFilter,
    },

    /// Token prices and the CCX chart
    Market {
        /// Chart timeframe (1h, 24h, 7d, 30d, 1y)
        #[arg(short, long, default_value = "24h")]
        timeframe: market::Timeframe,
    },

    /// Wallet balances and history
    Wallet {
        /// Mask balances
        #[arg(long)]
        hide_balance: bool,
        /// Copy the wallet address to the terminal clipboard
        #[arg(long)]
        copy_address: bool,
    },

    /// Real-world asset portfolio
    Portfolio {
        /// Asset type (all, carbon, realestate, commodity)
        #[arg(short, long, default_value = "carbon")]
        asset_type: rwa::AssetFilter,
    },

    /// DeFi opportunities and positions
    Defi {
        /// Highlight a strategy (staking, liquidity, lending, farming)
        #[arg(short, long, default_value = "staking")]
        strategy: defi::Strategy,
    },

    /// Dashboard overview
    Dashboard,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    tracing::debug!("CarbonCredX v{}", env!("CARGO_PKG_VERSION"));

    let json = cli.format == OutputFormat::Json;

    match cli.command {
        Commands::Sections => {
            if json {
                let sections: Vec<_> = Section::all()
                    .iter()
                    .map(|s| serde_json::json!({ "id": s.id(), "label": s.label() }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&sections)?);
            } else {
                println!("{:<12} {}", "ID", "Label");
                println!("{}", "-".repeat(24));
                for section in Section::all() {
                    println!("{:<12} {}", section.id(), section.label());
                }
            }
        }

        Commands::Chat { text } => {
            let clock = SystemClock;
            let mut session = ChatSession::new(&config.simulation, clock.now());
            if text.is_empty() {
                chat_repl(&mut session, &clock, json).await?;
            } else {
                session.send(&text.join(" "), clock.now())?;
                if let Some(reply) = await_reply(&mut session, &clock).await {
                    print_message(&reply, json)?;
                }
            }
        }

        Commands::Upload { files } => {
            let clock = SystemClock;
            let mut metas = Vec::with_capacity(files.len());
            for path in &files {
                let meta = FileMeta::from_path(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                metas.push(meta);
            }

            let mut pipeline =
                UploadPipeline::new(RandomAssessor::new(&config.simulation), &config.simulation);
            pipeline.select_files(metas, clock.now());

            if !json {
                for doc in pipeline.documents() {
                    println!("{} {} ({}) - {}", doc.id, doc.name, doc.size_label(), doc.status.label());
                }
                if let Some(banner) = pipeline.banner() {
                    println!("{}", banner.message());
                }
            }

            drive_uploads(&mut pipeline, &clock, |change| {
                if !json {
                    println!("{} {} - {}", change.id, change.name, change.status.label());
                }
            })
            .await;

            if json {
                println!("{}", serde_json::to_string_pretty(pipeline.documents())?);
            } else {
                println!();
                println!(
                    "{:<5} {:<30} {:<10} {:<10} {}",
                    "ID", "File", "Size", "Status", "Credits"
                );
                println!("{}", "-".repeat(70));
                for doc in pipeline.documents() {
                    let credits = match &doc.status {
                        DocumentStatus::Verified { credits } => credits.to_string(),
                        DocumentStatus::Rejected { reason } => reason.to_string(),
                        _ => "-".to_string(),
                    };
                    println!(
                        "{:<5} {:<30} {:<10} {:<10} {}",
                        doc.id.to_string(),
                        doc.name,
                        doc.size_label(),
                        doc.status.label(),
                        credits
                    );
                }
                println!("\nTotal credits: {}", pipeline.total_credits());
            }
        }

        Commands::Kyc {
            steps,
            name,
            pan,
            aadhaar,
        } => {
            if steps {
                for step in KycStep::all() {
                    println!("{}. {}", step.number(), step.title());
                }
                return Ok(());
            }

            let mut form = KycForm::new();
            if let Some(name) = name {
                form.set_full_name(&name);
            }
            if let Some(pan) = pan {
                form.set_pan_number(&pan);
            }
            if let Some(aadhaar) = aadhaar {
                form.set_aadhaar_number(&aadhaar);
            }

            for hint in [form.pan_hint(), form.aadhaar_hint()].into_iter().flatten() {
                eprintln!("hint: {}", hint);
            }

            while let Some(label) = form.primary_label() {
                println!("Step {}: {} [{}]", form.step().number(), form.step().title(), label);
                form.next();
            }
            println!("Step {}: {}", form.step().number(), form.step().title());

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "status": form.status(),
                        "details": form.details(),
                        "aadhaar": form.aadhaar_display(),
                    }))?
                );
            } else {
                println!("KYC status: {}", form.status());
            }
        }

        Commands::Explore { query, filter } => {
            let mut view = explorer::ExplorerView::new();
            view.set_query(&query);
            view.set_filter(filter);
            let results = view.results();

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No tokens found");
                println!("Try adjusting your search criteria or filters.");
            } else {
                println!(
                    "{:<10} {:<36} {:<22} {:>8} {:>8}",
                    "ID", "Project", "Type", "Credits", "Price"
                );
                println!("{}", "-".repeat(88));
                for token in results {
                    println!(
                        "{:<10} {:<36} {:<22} {:>8} {:>8}",
                        token.id,
                        token.name,
                        token.project_type,
                        token.credits_label(),
                        format!("₹{:.2}", token.price)
                    );
                }
            }
        }

        Commands::Market { timeframe } => {
            let mut view = market::MarketView::new(&config.simulation);
            view.select_timeframe(timeframe);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "timeframe": view.timeframe(),
                        "tokens": &market::TOKENS,
                        "series": view.series(),
                    }))?
                );
            } else {
                println!(
                    "{:<8} {:<24} {:>10} {:>8} {:>10} {:>12} {:>8}",
                    "Token", "Name", "Price", "24h", "Volume", "Market Cap", "Supply"
                );
                println!("{}", "-".repeat(86));
                for token in market::TOKENS.iter() {
                    println!(
                        "{:<8} {:<24} {:>10} {:>8} {:>10} {:>12} {:>8}",
                        token.symbol,
                        token.name,
                        token.price_label(),
                        token.change_label(),
                        token.volume_label(),
                        token.market_cap_label(),
                        token.supply_label()
                    );
                }
                println!("\nCCX ({})", view.timeframe());
                for point in view.series() {
                    println!("{:>8}  ₹{:.2}", point.label, point.price);
                }
            }
        }

        Commands::Wallet {
            hide_balance,
            copy_address,
        } => {
            let mut view = wallet::WalletView::new(config.wallet.address.clone());
            if hide_balance {
                view.toggle_balance();
            }
            if copy_address {
                view.copy_address(&TerminalClipboard::stdout())?;
                eprintln!("Copied {} to clipboard", view.address());
            }

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "address": view.address(),
                        "total_value": view.total_value_label(),
                        "total_tokens": view.total_tokens_label(),
                        "holdings": wallet::HOLDINGS.iter().map(|t| serde_json::json!({
                            "symbol": t.symbol,
                            "name": t.name,
                            "balance": view.balance_label(t),
                            "value": view.value_label(t),
                            "change": t.change,
                        })).collect::<Vec<_>>(),
                        "transactions": &wallet::TRANSACTIONS,
                    }))?
                );
            } else {
                println!("Wallet {}", view.short_address());
                println!(
                    "Total: {} ({} tokens) {}",
                    view.total_value_label(),
                    view.total_tokens_label(),
                    wallet::MONTHLY_CHANGE
                );
                println!();
                for token in wallet::HOLDINGS.iter() {
                    println!(
                        "{:<6} {:<22} {:>14} {:>12} {:>7}",
                        token.symbol,
                        token.name,
                        view.balance_label(token),
                        view.value_label(token),
                        token.change
                    );
                }
                println!();
                for tx in wallet::TRANSACTIONS.iter() {
                    println!(
                        "{:<9} {:>4} {:<6} {:<32} {:>8} {:<14} {}",
                        tx.direction.to_string(),
                        tx.amount,
                        tx.token,
                        tx.description(),
                        inr(tx.value),
                        tx.hash,
                        tx.when
                    );
                }
            }
        }

        Commands::Portfolio { asset_type } => {
            let mut view = rwa::RwaView::new();
            view.set_filter(asset_type);

            if json {
                println!("{}", serde_json::to_string_pretty(&view.assets())?);
            } else {
                println!(
                    "Portfolio: {} across {} tokens ({})",
                    view.total_value_label(),
                    view.total_tokens_label(),
                    rwa::MONTHLY_CHANGE
                );
                for filter in rwa::AssetFilter::all() {
                    println!("  {:<16} {}", filter.label(), filter.count());
                }
                println!();
                for asset in view.assets() {
                    println!(
                        "{:<10} {:<34} {:>10} {:>6} {:<18} {}",
                        asset.symbol,
                        asset.name,
                        asset.value_label(),
                        asset.change,
                        asset.details.size(),
                        asset.details.highlight()
                    );
                }
            }
        }

        Commands::Defi { strategy } => {
            let mut view = defi::DefiView::new();
            view.select(strategy);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "selected": view.selected(),
                        "opportunities": &defi::OPPORTUNITIES,
                        "positions": &defi::POSITIONS,
                    }))?
                );
            } else {
                for o in defi::OPPORTUNITIES.iter() {
                    let marker = if view.is_selected(o.strategy) { ">" } else { " " };
                    println!(
                        "{} {:<26} {:>6} APY  {:<11} TVL {:<8} min {}",
                        marker,
                        o.title,
                        o.apy,
                        o.risk.label(),
                        o.tvl,
                        o.min_amount
                    );
                }
                let selected = view.selected_opportunity();
                println!("\n{}: {}", selected.title, selected.description);
                println!("{}", selected.risk.guidance());
                println!();
                for p in defi::POSITIONS.iter() {
                    println!(
                        "{:<14} {:<26} {:>9} {:>6} earned {:>7} {}",
                        p.protocol, p.amount, p.value, p.apy, p.earned, p.time_left
                    );
                }
            }
        }

        Commands::Dashboard => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "stats": &dashboard::STATS,
                        "activity": &dashboard::RECENT_ACTIVITY,
                        "insights": &dashboard::MARKET_INSIGHTS,
                        "achievements": &dashboard::ACHIEVEMENTS,
                    }))?
                );
            } else {
                for stat in dashboard::STATS.iter() {
                    println!("{:<22} {:>10} {:>7}", stat.title, stat.value, stat.change);
                }
                println!();
                for item in dashboard::RECENT_ACTIVITY.iter() {
                    println!(
                        "{:<9} {:<9} {:<34} {:>7} {}",
                        item.direction.to_string(),
                        item.amount,
                        item.description(),
                        item.value,
                        item.when
                    );
                }
                println!(
                    "\nAchievements: {}/{}",
                    dashboard::earned_count(),
                    dashboard::ACHIEVEMENTS.len()
                );
                for insight in dashboard::MARKET_INSIGHTS.iter() {
                    println!("{:<16} {:>8} {:>7}", insight.title, insight.value, insight.change);
                }
                println!("\nCCX 24h: {}", percent_change(market::TOKENS[0].change_24h));
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                std::fs::write(&path, &content)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                println!("Config written to {}", path.display());
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("carboncredx={}", logging.level)),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_message(message: &carboncredx::ChatMessage, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(message)?);
        return Ok(());
    }
    println!("{}", message.content.replace("**", ""));
    if !message.actions.is_empty() {
        let actions: Vec<_> = message
            .actions
            .iter()
            .map(|a| format!("/{} ({})", a.action, a.label))
            .collect();
        println!("\n  {}", actions.join("  "));
    }
    Ok(())
}

/// Read prompts from stdin until EOF or `/quit`; `/<action>` clicks a suggested action
async fn chat_repl(
    session: &mut ChatSession,
    clock: &SystemClock,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(greeting) = session.messages().first() {
        print_message(greeting, json)?;
    }

    let stdin = std::io::stdin();
    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        let sent = match line.strip_prefix('/') {
            Some("quit") | Some("exit") => break,
            Some(action) => session.trigger_action(action, clock.now()),
            None => session.send(line, clock.now()),
        };
        match sent {
            Ok(_) => {}
            Err(carboncredx::AssistantError::EmptyMessage) => continue,
            Err(e) => bail!(e),
        }

        println!("AI is thinking...");
        if let Some(reply) = await_reply(session, clock).await {
            print_message(&reply, json)?;
        }
    }
    Ok(())
}
