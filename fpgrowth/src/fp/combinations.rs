/// Enumerates every non-empty subset of a single-path tree, smallest subsets
/// first, each k-subset in lexicographic index order.
///
/// Counts along a path never increase with depth, so a subset's support is the
/// count of its deepest node.
#[derive(Debug, Clone)]
pub struct PathSubsets<I> {
    path: Vec<(I, usize)>,
    indices: Vec<usize>,
    started: bool,
}

impl<I: Clone> PathSubsets<I> {
    pub fn new(path: Vec<(I, usize)>) -> Self {
        Self {
            path,
            indices: Vec::new(),
            started: false,
        }
    }

    fn advance(&mut self) -> bool {
        let n = self.path.len();
        if !self.started {
            self.started = true;
            if n == 0 {
                return false;
            }
            self.indices.push(0);
            return true;
        }

        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                true
            }
            None if k < n => {
                self.indices = (0..=k).collect();
                true
            }
            None => false,
        }
    }
}

impl<I: Clone> Iterator for PathSubsets<I> {
    type Item = (Vec<I>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.advance() {
            return None;
        }

        let items = self
            .indices
            .iter()
            .map(|&idx| self.path[idx].0.clone())
            .collect();
        let support = self
            .indices
            .iter()
            .map(|&idx| self.path[idx].1)
            .min()
            .unwrap_or(0);
        Some((items, support))
    }
}
