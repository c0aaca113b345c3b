//! Permission evaluation.
//!
//! Decides which create/edit/delete controls the console shows a caller.
//! These checks are advisory: the API enforces the real rules. Every
//! predicate fails closed, so malformed input hides the control instead of
//! raising an error.
//!
//! # Rules
//!
//! Members, events, courses and club roles:
//!
//! - superadmins may do anything
//! - admins may create only while their own batch is the active batch, and
//!   only into the active batch
//! - admins may edit/delete only records of their own batch; courses and
//!   club roles also require that the admin created them, and members whose
//!   email belongs to a superadmin account are off limits
//!
//! Admin accounts:
//!
//! - superadmins may edit any account except another superadmin's, and may
//!   delete any account except their own and superadmin accounts
//! - admins may always edit/delete their own account, and other accounts in
//!   the next batch (start year + 1) that they created
//! - admins may create one account in the next batch, never more
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use clubdesk_access::{BatchClock, PermissionEvaluator};
//! use clubdesk_core::RecordKind;
//! use clubdesk_models::{AdminRole, Identity};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let evaluator = PermissionEvaluator::new(BatchClock::default(), today, &[]);
//! let me = Identity::new("a1", AdminRole::Admin, "2024-2025", "Asha", "asha@club.org");
//!
//! assert!(evaluator.can_create(RecordKind::Event, &me, "2024-2025"));
//! assert!(!evaluator.can_create(RecordKind::Event, &me, "2025-2026"));
//! ```

use crate::batch_clock::BatchClock;
use crate::creator::is_created_by;
use chrono::NaiveDate;
use clubdesk_core::errors::BatchError;
use clubdesk_core::parse_start_year;
use clubdesk_core::permissions::{Action, RecordKind};
use clubdesk_models::{AdminAccount, AdminRole, BatchLabel, Identity, Record};
use thiserror::Error;
use tracing::debug;

/// Why a control is hidden.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Denial {
    #[error("caller role is not recognised")]
    UnknownRole,

    #[error("caller batch is unreadable: {0}")]
    CallerBatch(BatchError),

    #[error("record batch is unreadable: {0}")]
    RecordBatch(BatchError),

    #[error("record belongs to another batch")]
    BatchMismatch,

    #[error("caller's batch is not the active batch")]
    CallerNotCurrent,

    #[error("target batch is not the active batch")]
    TargetNotCurrent,

    #[error("target batch is not the caller's next batch")]
    NotNextBatch,

    #[error("caller did not create this record")]
    NotCreator,

    #[error("record belongs to a superadmin")]
    SuperadminTarget,

    #[error("superadmins cannot delete their own account")]
    OwnAccount,

    #[error("caller already created an admin in this batch")]
    AlreadyCreatedInBatch,
}

pub type Decision = Result<(), Denial>;

/// Evaluates permissions at a fixed point in time against a directory of
/// known admin accounts.
///
/// The directory is the admin list the console already fetched. It is used
/// to recognise superadmin emails on member records and to count the admin
/// accounts a caller has created in a batch.
#[derive(Debug, Clone, Copy)]
pub struct PermissionEvaluator<'a> {
    clock: BatchClock,
    today: NaiveDate,
    directory: &'a [AdminAccount],
}

impl<'a> PermissionEvaluator<'a> {
    pub fn new(clock: BatchClock, today: NaiveDate, directory: &'a [AdminAccount]) -> Self {
        Self {
            clock,
            today,
            directory,
        }
    }

    pub fn clock(&self) -> BatchClock {
        self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn directory(&self) -> &'a [AdminAccount] {
        self.directory
    }

    pub fn current_batch(&self) -> BatchLabel {
        self.clock.current_batch(&self.today)
    }

    pub fn is_active<R: Record>(&self, record: &R) -> bool {
        self.clock.is_active(record, &self.today)
    }

    pub fn can_create(&self, kind: RecordKind, me: &Identity, target_batch: &str) -> bool {
        let decision = self.check_create(kind, me, target_batch);
        log_decision(kind, Action::Create, me, target_batch, &decision);
        decision.is_ok()
    }

    pub fn can_edit<R: Record>(&self, me: &Identity, record: &R) -> bool {
        self.can(Action::Edit, me, record)
    }

    pub fn can_delete<R: Record>(&self, me: &Identity, record: &R) -> bool {
        self.can(Action::Delete, me, record)
    }

    /// Any action on an existing record. `Create` asks whether another
    /// record could be created in the same batch.
    pub fn can<R: Record>(&self, action: Action, me: &Identity, record: &R) -> bool {
        let decision = self.check(action, me, record);
        log_decision(R::KIND, action, me, record.key(), &decision);
        decision.is_ok()
    }

    /// Like [`can`](Self::can) but reports why the action is denied.
    pub fn check<R: Record>(&self, action: Action, me: &Identity, record: &R) -> Decision {
        match action {
            Action::Create => self.check_create(R::KIND, me, record.batch()),
            Action::Edit | Action::Delete if R::KIND == RecordKind::Admin => {
                self.check_admin_account(action, me, record)
            }
            Action::Edit | Action::Delete => self.check_record(me, record),
        }
    }

    pub fn check_create(&self, kind: RecordKind, me: &Identity, target_batch: &str) -> Decision {
        match me.role {
            AdminRole::Superadmin => Ok(()),
            AdminRole::Unknown => Err(Denial::UnknownRole),
            AdminRole::Admin => {
                let mine = parse_start_year(&me.batch).map_err(Denial::CallerBatch)?;
                let target = parse_start_year(target_batch).map_err(Denial::RecordBatch)?;

                if kind == RecordKind::Admin {
                    if mine.checked_add(1) != Some(target) {
                        return Err(Denial::NotNextBatch);
                    }
                    if self.has_created_in_batch(me, target) {
                        return Err(Denial::AlreadyCreatedInBatch);
                    }
                    return Ok(());
                }

                let current = self.clock.current_start_year(&self.today);
                if mine != current {
                    return Err(Denial::CallerNotCurrent);
                }
                if target != current {
                    return Err(Denial::TargetNotCurrent);
                }
                Ok(())
            }
        }
    }

    /// Edit/delete on members, events, courses and club roles.
    fn check_record<R: Record>(&self, me: &Identity, record: &R) -> Decision {
        match me.role {
            AdminRole::Superadmin => Ok(()),
            AdminRole::Unknown => Err(Denial::UnknownRole),
            AdminRole::Admin => {
                let mine = parse_start_year(&me.batch).map_err(Denial::CallerBatch)?;
                let theirs = parse_start_year(record.batch()).map_err(Denial::RecordBatch)?;
                if mine != theirs {
                    return Err(Denial::BatchMismatch);
                }

                if R::KIND.requires_creator() && !is_created_by(record.created_by(), me) {
                    return Err(Denial::NotCreator);
                }

                if R::KIND == RecordKind::Member
                    && record
                        .email()
                        .is_some_and(|email| self.is_superadmin_email(email))
                {
                    return Err(Denial::SuperadminTarget);
                }
                Ok(())
            }
        }
    }

    /// Edit/delete on admin accounts.
    fn check_admin_account<R: Record>(&self, action: Action, me: &Identity, target: &R) -> Decision {
        let is_self = me.id.matches(target.key());
        let target_is_superadmin = target.role() == Some(AdminRole::Superadmin);

        match me.role {
            AdminRole::Unknown => Err(Denial::UnknownRole),
            AdminRole::Superadmin => match action {
                Action::Delete if is_self => Err(Denial::OwnAccount),
                Action::Delete if target_is_superadmin => Err(Denial::SuperadminTarget),
                Action::Edit if target_is_superadmin && !is_self => Err(Denial::SuperadminTarget),
                _ => Ok(()),
            },
            AdminRole::Admin => {
                if is_self {
                    return Ok(());
                }
                let mine = parse_start_year(&me.batch).map_err(Denial::CallerBatch)?;
                let theirs = parse_start_year(target.batch()).map_err(Denial::RecordBatch)?;
                if mine.checked_add(1) != Some(theirs) {
                    return Err(Denial::NotNextBatch);
                }
                if !is_created_by(target.created_by(), me) {
                    return Err(Denial::NotCreator);
                }
                Ok(())
            }
        }
    }

    /// Whether `email` belongs to a superadmin account in the directory.
    pub fn is_superadmin_email(&self, email: &str) -> bool {
        if email.trim().is_empty() {
            return false;
        }
        self.directory
            .iter()
            .any(|admin| admin.role == AdminRole::Superadmin && admin.email == email)
    }

    /// Whether the directory holds an admin account in the batch starting
    /// `start_year` that `me` created.
    pub fn has_created_in_batch(&self, me: &Identity, start_year: i32) -> bool {
        self.directory.iter().any(|admin| {
            parse_start_year(&admin.batch).is_ok_and(|year| year == start_year)
                && is_created_by(admin.created_by(), me)
        })
    }
}

fn log_decision(kind: RecordKind, action: Action, me: &Identity, target: &str, decision: &Decision) {
    if let Err(denial) = decision {
        debug!(
            permission = kind.permission(action),
            caller = %me.id,
            role = %me.role,
            target = %target,
            reason = %denial,
            "Permission denied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdesk_models::{ClubRole, Course, CreatedBy, Event, Member};

    fn today() -> NaiveDate {
        // Active batch is 2024-2025
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn admin(id: &str, batch: &str) -> Identity {
        Identity::new(id, AdminRole::Admin, batch, format!("Admin {id}"), format!("{id}@club.org"))
    }

    fn superadmin(id: &str) -> Identity {
        Identity::new(id, AdminRole::Superadmin, "2019-2020", format!("Super {id}"), format!("{id}@club.org"))
    }

    fn account(id: &str, role: AdminRole, batch: &str, created_by: Option<CreatedBy>) -> AdminAccount {
        AdminAccount {
            id: id.into(),
            name: format!("Account {id}"),
            email: format!("{id}@club.org"),
            role,
            batch: batch.to_string(),
            created_by,
            ..AdminAccount::default()
        }
    }

    #[test]
    fn test_superadmin_create_anything() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = superadmin("s1");
        for kind in RecordKind::all() {
            assert!(evaluator.can_create(kind, &me, "2019-2020"));
        }
    }

    #[test]
    fn test_admin_create_requires_active_batch() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = admin("a1", "2024-2025");
        assert!(evaluator.can_create(RecordKind::Event, &me, "2024-2025"));
        assert_eq!(
            evaluator.check_create(RecordKind::Event, &me, "2025-2026"),
            Err(Denial::TargetNotCurrent)
        );

        let stale = admin("a0", "2023-2024");
        assert_eq!(
            evaluator.check_create(RecordKind::Course, &stale, "2024-2025"),
            Err(Denial::CallerNotCurrent)
        );
    }

    #[test]
    fn test_unknown_role_denied() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = Identity::new("x", AdminRole::Unknown, "2024-2025", "X", "x@club.org");
        let event = Event {
            batch: "2024-2025".to_string(),
            ..Event::default()
        };
        assert!(!evaluator.can_create(RecordKind::Event, &me, "2024-2025"));
        assert!(!evaluator.can_edit(&me, &event));
        assert!(!evaluator.can_delete(&me, &account("y", AdminRole::Admin, "2025-2026", None)));
    }

    #[test]
    fn test_malformed_batches_deny() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = admin("a1", "2024-2025");
        let event = Event {
            batch: "2024".to_string(),
            ..Event::default()
        };
        assert!(matches!(
            evaluator.check(Action::Edit, &me, &event),
            Err(Denial::RecordBatch(_))
        ));

        let broken_me = admin("a1", "");
        assert!(matches!(
            evaluator.check_create(RecordKind::Event, &broken_me, "2024-2025"),
            Err(Denial::CallerBatch(BatchError::Empty))
        ));
    }

    #[test]
    fn test_course_and_role_require_creator() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = admin("a1", "2024-2025");

        let mine = Course {
            batch: "2024-2025".to_string(),
            created_by: Some(CreatedBy::reference("a1", "", "")),
            ..Course::default()
        };
        let theirs = Course {
            created_by: Some(CreatedBy::reference("a2", "", "")),
            ..mine.clone()
        };
        assert!(evaluator.can_delete(&me, &mine));
        assert_eq!(evaluator.check(Action::Delete, &me, &theirs), Err(Denial::NotCreator));

        let orphan = ClubRole {
            batch: "2024-2025".to_string(),
            ..ClubRole::default()
        };
        assert_eq!(evaluator.check(Action::Edit, &me, &orphan), Err(Denial::NotCreator));
    }

    #[test]
    fn test_member_owned_by_superadmin_is_protected() {
        let directory = vec![account("s1", AdminRole::Superadmin, "2019-2020", None)];
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &directory);
        let me = admin("a1", "2024-2025");

        let protected = Member {
            email: "s1@club.org".to_string(),
            batch: "2024-2025".to_string(),
            ..Member::default()
        };
        let regular = Member {
            email: "kid@club.org".to_string(),
            ..protected.clone()
        };
        assert_eq!(
            evaluator.check(Action::Edit, &me, &protected),
            Err(Denial::SuperadminTarget)
        );
        assert!(evaluator.can_edit(&me, &regular));
        assert!(evaluator.can_edit(&superadmin("s9"), &protected));
    }

    #[test]
    fn test_superadmin_on_admin_accounts() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = superadmin("s1");
        let own = account("s1", AdminRole::Superadmin, "2019-2020", None);
        let peer = account("s2", AdminRole::Superadmin, "2019-2020", None);
        let plain = account("a1", AdminRole::Admin, "2024-2025", None);

        assert!(evaluator.can_edit(&me, &own));
        assert!(!evaluator.can_edit(&me, &peer));
        assert!(evaluator.can_edit(&me, &plain));

        assert_eq!(evaluator.check(Action::Delete, &me, &own), Err(Denial::OwnAccount));
        assert!(!evaluator.can_delete(&me, &peer));
        assert!(evaluator.can_delete(&me, &plain));
    }

    #[test]
    fn test_admin_on_admin_accounts() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = admin("a1", "2024-2025");

        let own = account("a1", AdminRole::Admin, "garbage", None);
        assert!(evaluator.can_edit(&me, &own));
        assert!(evaluator.can_delete(&me, &own));

        let junior = account("j1", AdminRole::Admin, "2025-2026", Some(CreatedBy::raw("a1")));
        assert!(evaluator.can_edit(&me, &junior));
        assert!(evaluator.can_delete(&me, &junior));

        let not_mine = account("j2", AdminRole::Admin, "2025-2026", Some(CreatedBy::raw("a9")));
        assert_eq!(evaluator.check(Action::Edit, &me, &not_mine), Err(Denial::NotCreator));

        let peer = account("p1", AdminRole::Admin, "2024-2025", Some(CreatedBy::raw("a1")));
        assert_eq!(evaluator.check(Action::Delete, &me, &peer), Err(Denial::NotNextBatch));
    }

    #[test]
    fn test_admin_creates_one_account_per_next_batch() {
        let me = admin("a1", "2024-2025");

        let empty: Vec<AdminAccount> = Vec::new();
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &empty);
        assert!(evaluator.can_create(RecordKind::Admin, &me, "2025-2026"));
        assert_eq!(
            evaluator.check_create(RecordKind::Admin, &me, "2024-2025"),
            Err(Denial::NotNextBatch)
        );

        let directory = vec![account(
            "j1",
            AdminRole::Admin,
            "2025-2026",
            Some(CreatedBy::reference("a1", "Admin a1", "a1@club.org")),
        )];
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &directory);
        assert_eq!(
            evaluator.check_create(RecordKind::Admin, &me, "2025-2026"),
            Err(Denial::AlreadyCreatedInBatch)
        );
        // Another admin of the same batch is unaffected
        assert!(evaluator.can_create(RecordKind::Admin, &admin("a2", "2024-2025"), "2025-2026"));
    }

    #[test]
    fn test_oversized_caller_year_denies() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = admin("a1", "2147483647-2148");
        let junior = account("j1", AdminRole::Admin, "2025-2026", Some(CreatedBy::raw("a1")));

        assert!(matches!(
            evaluator.check_create(RecordKind::Admin, &me, "2025-2026"),
            Err(Denial::CallerBatch(BatchError::InvalidStartYear(_)))
        ));
        assert!(!evaluator.can_edit(&me, &junior));
        assert!(!evaluator.can_delete(&me, &junior));
    }

    #[test]
    fn test_create_via_record_uses_record_batch() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        let me = admin("a1", "2024-2025");
        let event = Event {
            batch: "2024-2025".to_string(),
            ..Event::default()
        };
        assert!(evaluator.can(Action::Create, &me, &event));
    }

    #[test]
    fn test_current_batch_and_activity() {
        let evaluator = PermissionEvaluator::new(BatchClock::default(), today(), &[]);
        assert_eq!(evaluator.current_batch().as_str(), "2024-2025");
        assert!(evaluator.is_active(&account("a1", AdminRole::Admin, "2024-2025", None)));
        assert!(!evaluator.is_active(&account("a2", AdminRole::Admin, "2023-2024", None)));
    }
}
