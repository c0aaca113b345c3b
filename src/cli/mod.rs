//! Command-line interface.
//!
//! Every command reads API snapshots from JSON files and evaluates them as of
//! `--date` (today when omitted). Permission and validation outcomes are
//! printed, not signalled through the exit status.

use crate::report::{admin_board, render_board, render_decision};
use crate::snapshot::{load_admins, load_identity, load_record};
use crate::validator::describe_event_form;
use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clubdesk_access::evaluator::Decision;
use clubdesk_access::listing::{AdminFilter, FounderOrdering};
use clubdesk_access::{BatchClock, PermissionEvaluator, batch_options};
use clubdesk_config::AppConfig;
use clubdesk_core::{Action, RecordKind};
use clubdesk_models::{AdminAccount, ClubRole, Course, Event, EventForm, Identity, Member};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "clubdesk")]
#[command(about = "Clubdesk - batch and permission checks for the club admin console", long_about = None)]
pub struct Cli {
    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the active batch
    CurrentBatch,
    /// List the batches offered to the signed-in admin
    BatchOptions {
        /// Identity snapshot (`/admin/me` response)
        #[arg(short = 'i', long)]
        identity: PathBuf,

        /// Use the admin screen history range
        #[arg(long)]
        admin_screen: bool,
    },
    /// Check one create/edit/delete permission
    Check {
        #[arg(short = 'i', long)]
        identity: PathBuf,

        /// member, event, course, role or admin
        #[arg(short = 'k', long)]
        kind: RecordKind,

        /// create, edit or delete
        #[arg(short = 'a', long)]
        action: Action,

        /// Record snapshot the action applies to
        #[arg(short = 'r', long)]
        record: Option<PathBuf>,

        /// Target batch for create (overrides the record's batch)
        #[arg(short = 'b', long)]
        batch: Option<String>,

        /// Admin list snapshot, used for superadmin emails and creation counts
        #[arg(long)]
        admins: Option<PathBuf>,
    },
    /// Show the admin listing with the caller's controls
    Admins {
        #[arg(short = 'i', long)]
        identity: PathBuf,

        /// Admin list snapshot
        #[arg(long)]
        admins: PathBuf,

        /// Search name or email
        #[arg(short = 's', long)]
        search: Option<String>,

        #[arg(short = 'b', long)]
        batch: Option<String>,
    },
    /// Validate an event form
    ValidateEvent {
        #[arg(short = 'f', long)]
        form: PathBuf,
    },
}

/// Run `command` as of `today` and return what should be printed.
pub fn run(command: &Commands, config: &AppConfig, today: NaiveDate) -> Result<String> {
    let clock = BatchClock::from_config(&config.batch);

    match command {
        Commands::CurrentBatch => Ok(clock.current_batch(&today).to_string()),
        Commands::BatchOptions {
            identity,
            admin_screen,
        } => {
            let me = load_identity(identity)?;
            let first = if *admin_screen {
                config.batch.admin_history_start_year
            } else {
                config.batch.history_start_year
            };
            let labels: Vec<String> = batch_options(&me, &clock, today, first)
                .iter()
                .map(ToString::to_string)
                .collect();
            Ok(labels.join("\n"))
        }
        Commands::Check {
            identity,
            kind,
            action,
            record,
            batch,
            admins,
        } => {
            let me = load_identity(identity)?;
            let directory = match admins {
                Some(path) => load_admins(path)?,
                None => Vec::new(),
            };
            let evaluator = PermissionEvaluator::new(clock, today, &directory);

            let decision = match (action, batch, record) {
                (Action::Create, Some(batch), _) => evaluator.check_create(*kind, &me, batch),
                (_, _, Some(path)) => check_record_file(&evaluator, *kind, *action, &me, path)?,
                (Action::Create, None, None) => bail!("create needs --batch or --record"),
                (_, _, None) => bail!("{} needs --record", action),
            };

            info!(
                permission = kind.permission(*action),
                caller = %me.id,
                allowed = decision.is_ok(),
                "Checked permission"
            );
            Ok(render_decision(&decision))
        }
        Commands::Admins {
            identity,
            admins,
            search,
            batch,
        } => {
            let me = load_identity(identity)?;
            let directory = load_admins(admins)?;
            let evaluator = PermissionEvaluator::new(clock, today, &directory);
            let filter = AdminFilter {
                search: search.clone(),
                batch: batch.clone(),
                ..AdminFilter::default()
            };
            let ordering = FounderOrdering::from_config(&config.listing);
            Ok(render_board(&admin_board(&evaluator, &me, &filter, &ordering)))
        }
        Commands::ValidateEvent { form } => {
            let form: EventForm = load_record(form)?;
            Ok(describe_event_form(&form, today))
        }
    }
}

fn check_record_file(
    evaluator: &PermissionEvaluator<'_>,
    kind: RecordKind,
    action: Action,
    me: &Identity,
    path: &Path,
) -> Result<Decision> {
    Ok(match kind {
        RecordKind::Member => evaluator.check(action, me, &load_record::<Member>(path)?),
        RecordKind::Event => evaluator.check(action, me, &load_record::<Event>(path)?),
        RecordKind::Course => evaluator.check(action, me, &load_record::<Course>(path)?),
        RecordKind::Role => evaluator.check(action, me, &load_record::<ClubRole>(path)?),
        RecordKind::Admin => evaluator.check(action, me, &load_record::<AdminAccount>(path)?),
    })
}
