use super::TodoId;

/// Hands out todo ids for the lifetime of a session. Ids only grow, so an id
/// freed by a removal is never handed out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: TodoId,
}

impl IdAllocator {
    pub fn starting_at(next: TodoId) -> Self {
        Self { next }
    }

    /// Allocator positioned just past a bulk seed of `seed_count` items.
    pub fn after_seed(seed_count: usize) -> Self {
        Self::starting_at(seed_count as TodoId + 1)
    }

    pub fn current(&self) -> TodoId {
        self.next
    }

    pub fn advance(&mut self) {
        self.next += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_seed() {
        assert_eq!(IdAllocator::after_seed(2500).current(), 2501);
        assert_eq!(IdAllocator::after_seed(0).current(), 1);
    }

    #[test]
    fn test_advance() {
        let mut ids = IdAllocator::starting_at(10);
        assert_eq!(ids.current(), 10);
        assert_eq!(ids.current(), 10);
        ids.advance();
        ids.advance();
        assert_eq!(ids.current(), 12);
    }
}
