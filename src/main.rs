use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::sync::{broadcast, watch};

use hubview::activity::{BusyTracker, TrackedFailure};
use hubview::config::Config;
use hubview::error::ErrorTranslator;
use hubview::logging::init_tracing;
use hubview::model::{Repository, User};
use hubview::presentation::{event_channel, EventSink, Transform};
use hubview::provider::{FixtureProvider, SharedProvider};
use hubview::screens::branches::{BranchesInput, BranchesViewModel};
use hubview::screens::users::{UsersInput, UsersMode, UsersViewModel};

#[derive(Parser, Debug)]
#[command(name = "hubview", version, about = "Drive list screens against a provider fixture")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON fixture served as the data provider
    #[arg(long)]
    fixture: PathBuf,

    /// Pages to load: the activation refresh plus one footer refresh per extra page
    #[arg(long, default_value_t = 1)]
    pages: u32,

    #[command(subcommand)]
    screen: Screen,
}

#[derive(Subcommand, Debug)]
enum Screen {
    /// Users related to a user or a repository
    Users {
        #[arg(value_enum)]
        mode: UsersModeArg,
        /// Login for followers/following, `owner/name` otherwise
        target: String,
    },
    /// Branches of a repository
    Branches {
        /// `owner/name`
        repository: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum UsersModeArg {
    Followers,
    Following,
    Watchers,
    Stars,
    Contributors,
}

impl UsersModeArg {
    fn into_mode(self, target: String) -> UsersMode {
        match self {
            UsersModeArg::Followers => UsersMode::Followers(User::new(target)),
            UsersModeArg::Following => UsersMode::Following(User::new(target)),
            UsersModeArg::Watchers => UsersMode::Watchers(Repository::new(target)),
            UsersModeArg::Stars => UsersMode::Stars(Repository::new(target)),
            UsersModeArg::Contributors => UsersMode::Contributors(Repository::new(target)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let provider: SharedProvider = Arc::new(FixtureProvider::load(&cli.fixture)?);
    let pages = cli.pages.max(1);

    match cli.screen {
        Screen::Users { mode, target } => {
            let view_model =
                UsersViewModel::with_config(mode.into_mode(target), provider, &config.channels);
            let mut failures = view_model.core().failures().subscribe();

            let (header_tx, header_refresh) = event_channel();
            let (footer_tx, footer_refresh) = event_channel();
            let (_editing_tx, text_did_begin_editing) = event_channel();
            let (_selection_tx, selection) = event_channel();
            let output = view_model.transform(UsersInput {
                header_refresh,
                footer_refresh,
                text_did_begin_editing,
                selection,
            });

            let core = view_model.core();
            load_pages(
                pages,
                (&header_tx, core.header_loading()),
                (&footer_tx, core.footer_loading()),
            )
            .await?;

            println!("{}", output.navigation_title.borrow().as_str());
            for cell in output.items.borrow().iter() {
                match &cell.stats {
                    Some(stats) => println!("  {:<24} {:<24} {}", cell.title, cell.detail, stats),
                    None => println!("  {:<24} {}", cell.title, cell.detail),
                }
            }
            report_failures(&mut failures);
        }
        Screen::Branches { repository } => {
            let view_model = BranchesViewModel::with_config(
                Repository::new(repository),
                provider,
                &config.channels,
            );
            let mut failures = view_model.core().failures().subscribe();

            let (header_tx, header_refresh) = event_channel();
            let (footer_tx, footer_refresh) = event_channel();
            let (_selection_tx, selection) = event_channel();
            let output = view_model.transform(BranchesInput {
                header_refresh,
                footer_refresh,
                selection,
            });

            let core = view_model.core();
            load_pages(
                pages,
                (&header_tx, core.header_loading()),
                (&footer_tx, core.footer_loading()),
            )
            .await?;

            println!("{}", output.navigation_title.borrow().as_str());
            for cell in output.items.borrow().iter() {
                match &cell.detail {
                    Some(sha) => println!("  {:<32} {}", cell.title, sha),
                    None => println!("  {}", cell.title),
                }
            }
            report_failures(&mut failures);
        }
    }

    Ok(())
}

/// One header refresh, then a footer refresh per further page, each
/// awaited until its result has been applied.
async fn load_pages(
    pages: u32,
    header: (&EventSink<()>, &BusyTracker),
    footer: (&EventSink<()>, &BusyTracker),
) -> Result<()> {
    refresh(header.0, header.1).await?;
    for _ in 1..pages {
        refresh(footer.0, footer.1).await?;
    }
    Ok(())
}

async fn refresh(trigger: &EventSink<()>, tracker: &BusyTracker) -> Result<()> {
    let mut busy: watch::Receiver<bool> = tracker.subscribe();
    busy.borrow_and_update();
    trigger.send(()).context("list engine stopped")?;
    // The flag may already be back to false; the version bump still counts.
    busy.changed().await?;
    busy.wait_for(|busy| !*busy).await?;
    Ok(())
}

fn report_failures(failures: &mut broadcast::Receiver<TrackedFailure>) {
    while let Ok(tracked) = failures.try_recv() {
        match ErrorTranslator::translate(&tracked.failure) {
            Some(error) => eprintln!("{}: {}", tracked.operation.name, error),
            None => eprintln!("{}: {}", tracked.operation.name, tracked.failure),
        }
    }
}
