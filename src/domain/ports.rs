use crate::utils::error::Result;

/// Anything that can turn a positive integer into the text printed for it.
pub trait Classifier {
    fn render(&self, n: i64) -> Result<String>;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn render(&self, n: i64) -> Result<String> {
        (**self).render(n)
    }
}
