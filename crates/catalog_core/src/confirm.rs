pub const DELETE_QUESTION: &str = "Are you sure you want to delete this product?";

/// Synchronous yes/no prompt consulted before destructive operations.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}
