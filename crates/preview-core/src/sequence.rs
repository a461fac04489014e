/// Monotone ticket dispenser deciding which refresh may touch the DOM.
///
/// Refresh responses can complete out of order; without a guard, a slow
/// early response would overwrite the result of a later one. Each refresh
/// takes a ticket at the moment it starts, and only the holder of the most
/// recently issued ticket is allowed to render its outcome.
#[derive(Debug, Default)]
pub struct RefreshSequence {
    issued: u64,
}

/// Proof that a refresh was started; checked against the sequence when its
/// response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

impl RefreshSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next ticket, invalidating all earlier ones.
    pub fn issue(&mut self) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket(self.issued)
    }

    /// Whether `ticket` is still the latest issued.
    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        ticket.0 == self.issued
    }
}
