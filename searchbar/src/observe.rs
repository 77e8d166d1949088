//! Value-based change detection.

/// Remembers the last value seen and reports when a new one differs.
///
/// This is the explicit form of "run when this field changes": call
/// [`Observed::changed`] once per incoming update. Comparison is by value,
/// so handing over an equal value from a different source is not a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observed<T> {
    last: T,
}

impl<T: PartialEq + Clone> Observed<T> {
    pub fn new(initial: T) -> Self {
        Self { last: initial }
    }

    /// Compare-and-set. Returns `true` and remembers `next` only when it
    /// differs from the last observed value.
    pub fn changed(&mut self, next: &T) -> bool {
        if *next == self.last {
            return false;
        }
        self.last = next.clone();
        true
    }

    pub fn get(&self) -> &T {
        &self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_distinct_value_once() {
        let mut seen = Observed::new("abc".to_string());
        assert!(!seen.changed(&"abc".to_string()));
        assert!(seen.changed(&"xyz".to_string()));
        assert!(!seen.changed(&"xyz".to_string()));
        assert_eq!(seen.get(), "xyz");
    }

    #[test]
    fn change_back_to_earlier_value_counts() {
        let mut seen = Observed::new(1);
        assert!(seen.changed(&2));
        assert!(seen.changed(&1));
    }
}
