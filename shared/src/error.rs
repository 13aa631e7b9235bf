use std::fmt;

/// The kind of record an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Item,
    Weapon,
    Armor,
    Consumable,
    Station,
    Train,
    Player,
    HeldItem,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Item => "Item",
            RecordKind::Weapon => "Weapon",
            RecordKind::Armor => "Armor",
            RecordKind::Consumable => "Consumable",
            RecordKind::Station => "Station",
            RecordKind::Train => "Train",
            RecordKind::Player => "Player",
            RecordKind::HeldItem => "Held item",
        };
        f.write_str(name)
    }
}

/// Every way a core operation can reject a call.
///
/// Any error aborts the whole operation. The storage layer is expected to
/// discard the operation's writes, so callers never observe a partial change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A referenced id or identity does not exist (or is not active).
    #[error("{kind} {key} not found")]
    NotFound { kind: RecordKind, key: String },

    /// A caller-supplied primary key is already taken.
    #[error("{kind} {key} already exists")]
    AlreadyExists { kind: RecordKind, key: String },

    /// The player already holds the configured maximum number of copies.
    #[error("Player {key} inventory is full ({limit} items)")]
    InventoryFull { key: String, limit: u32 },

    /// The caller or environment broke an invariant the core relies on.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

impl CoreError {
    pub fn not_found(kind: RecordKind, key: impl fmt::Display) -> Self {
        CoreError::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn already_exists(kind: RecordKind, key: impl fmt::Display) -> Self {
        CoreError::AlreadyExists {
            kind,
            key: key.to_string(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        CoreError::InvariantViolation(message.into())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_key() {
        let err = CoreError::not_found(RecordKind::Item, 11);
        assert_eq!(err.to_string(), "Item 11 not found");
    }

    #[test]
    fn already_exists_message_names_kind_and_key() {
        let err = CoreError::already_exists(RecordKind::Station, "north");
        assert_eq!(err.to_string(), "Station north already exists");
    }

    #[test]
    fn invariant_message_is_prefixed() {
        let err = CoreError::invariant("no active player");
        assert_eq!(err.to_string(), "Invariant violated: no active player");
    }
}
