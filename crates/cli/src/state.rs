//! Session wrapper around an open ledger.
//!
//! Holds the `Ledger` and persists its snapshot after every successful
//! write transaction.

use insurechain_executor::{Command, Ledger, Output, Result};

/// Wraps the ledger handle and tracks where it lives.
pub struct SessionState {
    ledger: Ledger,
    label: String,
}

impl SessionState {
    /// Create a new SessionState; `label` names the world state in the prompt.
    pub fn new(ledger: Ledger, label: String) -> Self {
        Self { ledger, label }
    }

    /// Execute a transaction, flushing the snapshot if it wrote.
    ///
    /// A failed write is not flushed, but whatever it left in memory (the
    /// seeds written by an InitLedger that stopped partway) is saved by the
    /// next successful write of the session.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        let is_write = cmd.is_write();
        let output = self.ledger.executor().execute(cmd)?;
        if is_write {
            self.ledger.flush()?;
        }
        Ok(output)
    }

    /// Generate the REPL prompt string.
    pub fn prompt(&self) -> String {
        if self.ledger.executor().access_mode().allows_writes() {
            format!("insurechain:{}> ", self.label)
        } else {
            format!("insurechain:{}(ro)> ", self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insurechain_executor::{Error, OpenOptions, RecordId};
    use tempfile::TempDir;

    #[test]
    fn test_writes_are_flushed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let ledger = Ledger::open(&path, OpenOptions::new()).unwrap();
        let mut state = SessionState::new(ledger, "state.json".into());

        state
            .execute(Command::CreateBank {
                id: RecordId::new(9),
                role: "Bank".into(),
                name: "nine".into(),
            })
            .unwrap();
        assert!(path.exists());

        let reopened = Ledger::open(&path, OpenOptions::new()).unwrap();
        assert!(reopened.bank_exists(9u64).unwrap());
    }

    #[test]
    fn test_partial_init_saved_by_next_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let ledger = Ledger::open(&path, OpenOptions::new()).unwrap();
        let mut state = SessionState::new(ledger, "state.json".into());

        let bank = |id: u64| Command::CreateBank {
            id: RecordId::new(id),
            role: "Bank".into(),
            name: "preexisting".into(),
        };
        state.execute(bank(1)).unwrap();

        // Banks are seeded last, so every other kind is written before the clash
        assert!(matches!(
            state.execute(Command::InitLedger),
            Err(Error::AlreadyExists { .. })
        ));
        let reopened = Ledger::open(&path, OpenOptions::new()).unwrap();
        assert!(!reopened.customer_exists(1u64).unwrap());

        state.execute(bank(9)).unwrap();
        let reopened = Ledger::open(&path, OpenOptions::new()).unwrap();
        assert!(reopened.customer_exists(1u64).unwrap());
        assert!(reopened.insurance_object_exists(6u64).unwrap());
        assert!(reopened.bank_exists(9u64).unwrap());
    }

    #[test]
    fn test_prompt_marks_read_only() {
        let ro = Ledger::ephemeral_with(
            OpenOptions::new().access_mode(insurechain_executor::AccessMode::ReadOnly),
        )
        .unwrap();
        assert_eq!(
            SessionState::new(ro, "ephemeral".into()).prompt(),
            "insurechain:ephemeral(ro)> "
        );
    }
}
