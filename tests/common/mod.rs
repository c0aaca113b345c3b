use chrono::NaiveDate;
use clubdesk_models::{AdminAccount, AdminRole, CreatedBy, Identity};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;

/// Active batch on this date is 2024-2025 with the default boundary.
#[allow(dead_code)]
pub fn spring_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

#[allow(dead_code)]
/// Fake email that stays unique per `id`.
pub fn email_for(id: &str) -> String {
    format!("{}.{}", id, SafeEmail().fake::<String>())
}

#[allow(dead_code)]
pub fn create_test_identity(id: &str, role: AdminRole, batch: &str) -> Identity {
    Identity::new(id, role, batch, Name().fake::<String>(), email_for(id))
}

#[allow(dead_code)]
pub fn create_test_account(
    id: &str,
    role: AdminRole,
    batch: &str,
    created_by: Option<CreatedBy>,
) -> AdminAccount {
    AdminAccount {
        id: id.into(),
        name: Name().fake(),
        email: email_for(id),
        role,
        batch: batch.to_string(),
        created_by,
        ..AdminAccount::default()
    }
}

/// The account record for an existing identity.
#[allow(dead_code)]
pub fn account_of(me: &Identity) -> AdminAccount {
    AdminAccount {
        id: me.id.clone(),
        name: me.name.clone(),
        email: me.email.clone(),
        role: me.role,
        batch: me.batch.clone(),
        ..AdminAccount::default()
    }
}
