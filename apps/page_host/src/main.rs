//! Demo host: loads the page definition, resolves bindings, then replays a
//! recorded viewport scenario through the controller while the background
//! runtime drives timers and the simulated submission transport.

use std::{
    fs,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::{bounded, RecvTimeoutError, TrySendError};
use document::{resolve_bindings, Document, PageDefinition};
use page_core::{
    PageConfig, PageController, SimulatedTransport, SubmissionTransport, TokioScheduler,
};
use shared::events::ViewportEvent;

mod config;
mod scenario;

#[derive(Parser, Debug)]
struct Args {
    /// JSON page definition describing the fixed layout.
    #[arg(long, default_value = "apps/page_host/fixtures/page.json")]
    page: PathBuf,
    /// Recorded viewport events to replay against the page.
    #[arg(long, default_value = "apps/page_host/fixtures/scenario.json")]
    scenario: PathBuf,
    /// Optional TOML settings file (falls back to page_host.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref());
    tracing::info!(?settings, "page host starting");

    let raw_page = fs::read_to_string(&args.page)
        .with_context(|| format!("reading page definition {}", args.page.display()))?;
    let definition = PageDefinition::from_json(&raw_page).context("parsing page definition")?;
    let mut document = Document::from_definition(&definition).context("building document")?;
    let bindings = resolve_bindings(&definition, &document).context("binding page elements")?;
    let steps = scenario::load(&args.scenario)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building background runtime")?;

    let (event_tx, event_rx) = bounded::<ViewportEvent>(256);
    let scheduler = TokioScheduler::new(runtime.handle().clone(), event_tx.clone());
    let transport = Arc::new(SimulatedTransport::new(Duration::from_millis(
        settings.submission_delay_ms,
    )));
    let pending_submissions = Arc::new(AtomicUsize::new(0));

    let mut controller = PageController::new(
        bindings,
        PageConfig {
            autoplay_interval: Duration::from_millis(settings.autoplay_interval_ms),
            scroll_threshold: settings.scroll_threshold,
            stagger_step: Duration::from_millis(settings.stagger_step_ms),
        },
    );

    let replay_tx = event_tx.clone();
    let replay = thread::spawn(move || scenario::replay(steps, &replay_tx));

    loop {
        match event_rx.recv_timeout(Duration::from_millis(settings.idle_shutdown_ms)) {
            Ok(event) => {
                tracing::debug!(event = ?event, "viewport event");
                let update = controller.handle(event, &scheduler);
                for op in &update.ops {
                    tracing::debug!(op = ?op, "render");
                }
                document
                    .apply_all(&update.ops)
                    .context("applying render ops")?;
                if let Some(submission) = update.submission {
                    pending_submissions.fetch_add(1, Ordering::SeqCst);
                    let transport = Arc::clone(&transport);
                    let pending = Arc::clone(&pending_submissions);
                    let done_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let outcome = transport.deliver(submission).await;
                        pending.fetch_sub(1, Ordering::SeqCst);
                        match outcome {
                            Ok(()) => match done_tx.try_send(ViewportEvent::SubmissionCompleted) {
                                Ok(()) => {}
                                Err(TrySendError::Full(_)) => {
                                    tracing::warn!("event queue full; completion dropped");
                                }
                                Err(TrySendError::Disconnected(_)) => {}
                            },
                            Err(err) => {
                                tracing::error!(error = %err, "submission transport failed");
                            }
                        }
                    });
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if replay.is_finished() && pending_submissions.load(Ordering::SeqCst) == 0 {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    if replay.join().is_err() {
        tracing::warn!("scenario replay thread panicked");
    }

    tracing::info!(
        active_slide = controller.active_slide(),
        announcements = document.announcements().len(),
        "scenario complete"
    );
    for message in document.announcements() {
        println!("{message}");
    }

    Ok(())
}
