use crate::domain::FormField;

/// Handle for a field validation that has been scheduled but not applied.
///
/// Resolving a ticket after a newer write to its field (or to a field its
/// rule reads) has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationTicket {
    field: FormField,
    generation: u64,
}

impl ValidationTicket {
    pub fn field(&self) -> FormField {
        self.field
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketOutcome {
    Applied { valid: bool },
    Stale,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Generations {
    counters: [u64; 5],
}

impl Generations {
    pub(crate) fn bump(&mut self, field: FormField) {
        self.counters[field.index()] += 1;
    }

    pub(crate) fn bump_all(&mut self) {
        for counter in &mut self.counters {
            *counter += 1;
        }
    }

    pub(crate) fn issue(&self, field: FormField) -> ValidationTicket {
        ValidationTicket {
            field,
            generation: self.counters[field.index()],
        }
    }

    pub(crate) fn is_current(&self, ticket: &ValidationTicket) -> bool {
        self.counters[ticket.field.index()] == ticket.generation
    }
}
