use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockExpiry {
    Until(Instant),
    Indefinite,
}
