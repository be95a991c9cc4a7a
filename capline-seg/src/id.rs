//! Segment id generation.

use uuid::Uuid;

/// Supplies unique ids for created segments.
///
/// Ids carry no timing or ordering semantics; any generator that never
/// repeats within one run is valid.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic counter ids (`seg-1`, `seg-2`, ...).
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: usize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("seg-{}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIds::default();

        assert_eq!(ids.next_id(), "seg-1");
        assert_eq!(ids.next_id(), "seg-2");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = UuidIds;

        assert_ne!(ids.next_id(), ids.next_id());
    }
}
