//! Plain-text rendering of decisions and the admin board.

use clubdesk_access::evaluator::{Decision, Denial};
use clubdesk_access::listing::{AdminFilter, FounderOrdering, ListFilter, split_admins};
use clubdesk_access::PermissionEvaluator;
use clubdesk_core::RecordKind;
use clubdesk_models::{AdminAccount, AdminRole, Identity};
use std::fmt::Write;

pub fn render_decision(decision: &Decision) -> String {
    match decision {
        Ok(()) => "allowed".to_string(),
        Err(denial) => format!("denied: {}", denial),
    }
}

/// One admin account with the controls the caller gets for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow<'a> {
    pub account: &'a AdminAccount,
    pub active: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminBoard<'a> {
    pub superadmins: Vec<AdminRow<'a>>,
    pub admins: Vec<AdminRow<'a>>,
    /// Whether the caller sees the "add admin" control for the filtered batch.
    pub can_create: bool,
    pub create_hint: Option<String>,
}

/// Build the admin listing for `me` from the evaluator's directory.
pub fn admin_board<'a>(
    evaluator: &PermissionEvaluator<'a>,
    me: &Identity,
    filter: &AdminFilter,
    ordering: &FounderOrdering,
) -> AdminBoard<'a> {
    let visible = filter.apply(evaluator.directory());
    let (supers, regular) = split_admins(&visible, ordering);

    let row = |account: &'a AdminAccount| AdminRow {
        account,
        active: evaluator.is_active(account),
        can_edit: evaluator.can_edit(me, account),
        can_delete: evaluator.can_delete(me, account),
    };

    let target_batch = filter.batch.as_deref().filter(|b| !b.trim().is_empty());
    let (can_create, create_hint) = match (me.role, target_batch) {
        (AdminRole::Superadmin, _) => (true, None),
        (AdminRole::Admin, Some(batch)) => {
            match evaluator.check_create(RecordKind::Admin, me, batch) {
                Ok(()) => (true, Some(format!("You can create one admin in {} batch", batch))),
                Err(Denial::AlreadyCreatedInBatch) => (
                    false,
                    Some(format!("Already created an admin in {} batch", batch)),
                ),
                Err(_) => (false, Some(format!("No access to {} batch", batch))),
            }
        }
        _ => (false, None),
    };

    AdminBoard {
        superadmins: supers.into_iter().map(row).collect(),
        admins: regular.into_iter().map(row).collect(),
        can_create,
        create_hint,
    }
}

pub fn render_board(board: &AdminBoard<'_>) -> String {
    let mut out = String::new();

    for (title, rows) in [("Super Admins", &board.superadmins), ("Admins", &board.admins)] {
        if rows.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} ({})", title, rows.len());
        for row in rows.iter() {
            let account = row.account;
            let controls = match (row.can_edit, row.can_delete) {
                (true, true) => "edit,delete",
                (true, false) => "edit",
                (false, true) => "delete",
                (false, false) => "view only",
            };
            let _ = writeln!(
                out,
                "  {:<11} {:<24} {:<32} {:<10} {:<8} {}",
                account.role.display_name(),
                account.name,
                account.email,
                account.batch,
                if row.active { "active" } else { "inactive" },
                controls
            );
        }
    }

    if board.superadmins.is_empty() && board.admins.is_empty() {
        let _ = writeln!(out, "No admins found");
    }
    if let Some(hint) = &board.create_hint {
        let _ = writeln!(out, "{}", hint);
    }
    out
}
