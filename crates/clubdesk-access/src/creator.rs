//! Creator attribution.
//!
//! A caller created a record when the record's `createdBy` names them. A
//! populated reference that carries a key matches on the key alone. A bare
//! string, or a reference without a key, is checked against the caller's
//! key, then name, then email; the first hit wins. Blank values on either
//! side never match, and a record with no `createdBy` was created by nobody.

use clubdesk_models::{CreatedBy, Identity};

/// Which caller attribute matched the record's creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorMatch {
    Id,
    Name,
    Email,
}

pub fn creator_match(created_by: Option<&CreatedBy>, me: &Identity) -> Option<CreatorMatch> {
    let created_by = created_by?;

    let (id, name, email) = match created_by {
        CreatedBy::Reference { id, name, email } => {
            match id.as_deref().filter(|id| !id.trim().is_empty()) {
                Some(id) => return me.id.matches(id).then_some(CreatorMatch::Id),
                None => (None, name.as_deref(), email.as_deref()),
            }
        }
        // A bare string may hold any of the three
        CreatedBy::RawId(raw) => (Some(raw.as_str()), Some(raw.as_str()), Some(raw.as_str())),
    };

    if id.is_some_and(|id| me.id.matches(id)) {
        return Some(CreatorMatch::Id);
    }
    if name.is_some_and(|name| same_text(name, &me.name)) {
        return Some(CreatorMatch::Name);
    }
    if email.is_some_and(|email| same_text(email, &me.email)) {
        return Some(CreatorMatch::Email);
    }
    None
}

#[inline]
pub fn is_created_by(created_by: Option<&CreatedBy>, me: &Identity) -> bool {
    creator_match(created_by, me).is_some()
}

fn same_text(a: &str, b: &str) -> bool {
    !a.trim().is_empty() && a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubdesk_models::AdminRole;

    fn me() -> Identity {
        Identity::new("a1", AdminRole::Admin, "2024-2025", "Asha", "asha@club.org")
    }

    #[test]
    fn test_reference_by_id() {
        let created = CreatedBy::reference("a1", "Someone Else", "other@club.org");
        assert_eq!(creator_match(Some(&created), &me()), Some(CreatorMatch::Id));
    }

    #[test]
    fn test_reference_falls_back_to_name_then_email() {
        let by_name = CreatedBy::reference("", "Asha", "other@club.org");
        assert_eq!(creator_match(Some(&by_name), &me()), Some(CreatorMatch::Name));

        let by_email = CreatedBy::reference("", "", "asha@club.org");
        assert_eq!(creator_match(Some(&by_email), &me()), Some(CreatorMatch::Email));
    }

    #[test]
    fn test_reference_with_other_key_ignores_name_and_email() {
        let created = CreatedBy::reference("a7", "Asha", "asha@club.org");
        assert_eq!(creator_match(Some(&created), &me()), None);
    }

    #[test]
    fn test_id_wins_over_name() {
        // Both would match; the key is reported
        let created = CreatedBy::reference("a1", "Asha", "asha@club.org");
        assert_eq!(creator_match(Some(&created), &me()), Some(CreatorMatch::Id));
    }

    #[test]
    fn test_raw_string_shapes() {
        assert_eq!(
            creator_match(Some(&CreatedBy::raw("a1")), &me()),
            Some(CreatorMatch::Id)
        );
        assert_eq!(
            creator_match(Some(&CreatedBy::raw("Asha")), &me()),
            Some(CreatorMatch::Name)
        );
        assert_eq!(
            creator_match(Some(&CreatedBy::raw("asha@club.org")), &me()),
            Some(CreatorMatch::Email)
        );
        assert_eq!(creator_match(Some(&CreatedBy::raw("a2")), &me()), None);
    }

    #[test]
    fn test_absent_creator_never_matches() {
        assert_eq!(creator_match(None, &me()), None);
        assert!(!is_created_by(None, &me()));
    }

    #[test]
    fn test_blank_values_never_match() {
        let blank_me = Identity::new("", AdminRole::Admin, "2024-2025", "", "");
        assert!(!is_created_by(Some(&CreatedBy::raw("")), &blank_me));
        let created = CreatedBy::Reference {
            id: Some(String::new()),
            name: Some(String::new()),
            email: None,
        };
        assert!(!is_created_by(Some(&created), &blank_me));
    }
}
