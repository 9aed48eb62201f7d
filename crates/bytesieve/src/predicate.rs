use alloc::sync::Arc;
use core::fmt;

/// A byte predicate shared between a view and every iterator it lends.
///
/// `Predicate` wraps an arbitrary closure behind an `Arc`, so cloning is an
/// atomic reference-count bump. Predicates are expected to be pure: the
/// [`FilteredView`](crate::FilteredView) size, emptiness and iteration
/// contracts assume repeated calls with the same byte agree.
///
/// # Examples
///
/// ```rust
/// use bytesieve::Predicate;
///
/// let digits = Predicate::new(|b: u8| b.is_ascii_digit());
/// assert!(digits.test(b'7'));
/// assert!(!digits.test(b'x'));
/// ```
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(u8) -> bool + Send + Sync>);

impl Predicate {
    /// Wraps a closure as a predicate.
    pub fn new(f: impl Fn(u8) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// The default predicate: accepts every byte.
    ///
    /// Stateless and pure; two `accept_all` predicates are interchangeable.
    #[must_use]
    pub fn accept_all() -> Self {
        Self::new(|_| true)
    }

    /// Applies the predicate to a single byte.
    #[must_use]
    pub fn test(&self, byte: u8) -> bool {
        (self.0)(byte)
    }

    /// Conjunction of two predicates, short-circuiting on the left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bytesieve::Predicate;
    ///
    /// let alpha = Predicate::new(|b: u8| b.is_ascii_alphabetic());
    /// let lower = Predicate::new(|b: u8| b.is_ascii_lowercase());
    /// assert!(alpha.and(&lower).test(b'a'));
    /// assert!(!alpha.and(&lower).test(b'A'));
    /// ```
    #[must_use]
    pub fn and(&self, other: &Predicate) -> Predicate {
        let (lhs, rhs) = (self.clone(), other.clone());
        Predicate::new(move |b| lhs.test(b) && rhs.test(b))
    }
}

impl Default for Predicate {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl From<fn(u8) -> bool> for Predicate {
    fn from(f: fn(u8) -> bool) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
