/// A named workload for the wrapped-call benchmarks.
#[derive(Debug, Copy, Clone)]
pub struct BenchCase {
    name: &'static str,
    group: BenchGroup,
    num_times: u64,
}

impl BenchCase {
    pub fn new(name: &'static str, group: BenchGroup, num_times: u64) -> Self {
        Self { name, group, num_times }
    }

    pub fn small(name: &'static str, num_times: u64) -> Self {
        Self::new(name, BenchGroup::Small, num_times)
    }

    pub fn large(name: &'static str, num_times: u64) -> Self {
        Self::new(name, BenchGroup::Large, num_times)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> BenchGroup {
        self.group
    }

    pub fn num_times(&self) -> u64 {
        self.num_times
    }
}

#[derive(Clone, Copy, Debug)]
pub enum BenchGroup {
    Small,
    Large,
}

/// Squares and sums the first ten thousand numbers, `num_times` over.
pub fn waste_some_time(num_times: u64) -> u64 {
    (0..num_times).map(|_| (0..10_000u64).map(|number| number * number).sum::<u64>()).sum()
}
