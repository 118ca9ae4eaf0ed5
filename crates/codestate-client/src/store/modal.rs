//! Dialog state as a single tagged union.

/// Entity domain a dialog operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Sessions,
    Scripts,
    TerminalCollections,
}

/// The one dialog that may be open at a time.
///
/// Mutual exclusion across domains is structural here: opening any dialog
/// replaces the previous variant, so there is no combination of flags in
/// which two dialogs are open together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    /// Creation wizard or form for the given domain.
    Creating(Domain),
    /// Edit form for the entity with the given id.
    Editing(Domain, String),
    /// Delete confirmation for the entity with the given id.
    Deleting(Domain, String),
    /// Application configuration editor.
    Configuring,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    /// True when the creation dialog for `domain` is open.
    pub fn is_creating(&self, domain: Domain) -> bool {
        matches!(self, Modal::Creating(open) if *open == domain)
    }

    /// Id under edit for `domain`, if its edit dialog is open.
    pub fn editing_id(&self, domain: Domain) -> Option<&str> {
        match self {
            Modal::Editing(open, id) if *open == domain => Some(id),
            _ => None,
        }
    }

    /// Id pending deletion for `domain`, if its confirmation is open.
    pub fn deleting_id(&self, domain: Domain) -> Option<&str> {
        match self {
            Modal::Deleting(open, id) if *open == domain => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_replaces_previous_dialog() {
        let mut modal = Modal::Creating(Domain::Sessions);
        assert!(modal.is_creating(Domain::Sessions));

        modal = Modal::Editing(Domain::Scripts, "s1".into());
        assert!(!modal.is_creating(Domain::Sessions));
        assert_eq!(modal.editing_id(Domain::Scripts), Some("s1"));
    }

    #[test]
    fn test_accessors_are_domain_scoped() {
        let modal = Modal::Deleting(Domain::Scripts, "s1".into());
        assert_eq!(modal.deleting_id(Domain::Scripts), Some("s1"));
        assert_eq!(modal.deleting_id(Domain::Sessions), None);
        assert_eq!(modal.editing_id(Domain::Scripts), None);
    }

    #[test]
    fn test_default_is_closed() {
        let modal = Modal::default();
        assert!(!modal.is_open());
    }
}
