/// An owned primality table: `is_prime(i)` for every `i` below [`PrimeTable::len`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimeTable {
    marks: Vec<bool>,
}

impl PrimeTable {
    pub(crate) fn from_marks(marks: Vec<bool>) -> Self {
        Self { marks }
    }

    /// The number of integers covered, i.e. the table answers for `0..len`.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns `false` for indices outside the table.
    #[inline]
    pub fn is_prime(&self, i: usize) -> bool {
        self.marks.get(i).copied().unwrap_or(false)
    }

    /// The primes covered by the table, in increasing order.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks.iter().enumerate().filter_map(|(i, &prime)| prime.then_some(i))
    }

    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&prime| prime).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.marks
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.marks
    }
}

impl From<PrimeTable> for Vec<bool> {
    fn from(table: PrimeTable) -> Self {
        table.into_inner()
    }
}
