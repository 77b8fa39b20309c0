use bit_set::BitSet;

use crate::color::{Color, VertexId};

/** copy of every domain of a [`DomainStore`], taken by [`DomainStore::snapshot`]. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSnapshot {
    /// domains[v]: colors admissible for v at snapshot time
    domains: Vec<BitSet>,
}

/**
Domains of a CSP search: domains[v] is the set of colors (within 1..=nb_colors) still
admissible for vertex v. Forward checking removes colors with [`DomainStore::restrict`],
backtracking undoes it with [`DomainStore::restore`].
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    /// size of the color alphabet
    nb_colors: usize,
    /// domains[v]: admissible colors of vertex v
    domains: Vec<BitSet>,
}

impl DomainStore {
    /** creates a domain store where every vertex may take any color in 1..=nb_colors */
    pub fn new(nb_vertices:usize, nb_colors:usize) -> Self {
        let mut full = BitSet::with_capacity(nb_colors+1);
        for c in 1..=nb_colors { full.insert(c); }
        Self { nb_colors, domains: vec![full ; nb_vertices] }
    }

    /// size of the color alphabet
    pub fn nb_colors(&self) -> usize { self.nb_colors }

    /// number of vertices covered
    pub fn nb_vertices(&self) -> usize { self.domains.len() }

    /// domain of v (None if v is not covered by the store)
    pub fn domain(&self, v:VertexId) -> Option<&BitSet> { self.domains.get(v) }

    /// number of colors still admissible for v
    pub fn domain_size(&self, v:VertexId) -> usize { self.domains[v].len() }

    /// true if c is still admissible for v
    pub fn contains(&self, v:VertexId, c:Color) -> bool { self.domains[v].contains(c) }

    /// admissible colors of v, in ascending order
    pub fn colors(&self, v:VertexId) -> impl Iterator<Item=Color> + '_ {
        self.domains[v].iter()
    }

    /// removes c from the domain of v (no-op if absent)
    pub fn restrict(&mut self, v:VertexId, c:Color) {
        self.domains[v].remove(c);
    }

    /// deep copy of all domains
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot { domains: self.domains.clone() }
    }

    /// replaces all domains by a previously taken snapshot
    pub fn restore(&mut self, snapshot:&DomainSnapshot) {
        self.domains.clone_from(&snapshot.domains);
    }

    /// true if the current domains are exactly the ones saved in the snapshot
    pub fn matches(&self, snapshot:&DomainSnapshot) -> bool {
        self.domains == snapshot.domains
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_domains() {
        let d = DomainStore::new(3, 4);
        assert_eq!(d.nb_vertices(), 3);
        assert_eq!(d.nb_colors(), 4);
        for v in 0..3 {
            assert_eq!(d.colors(v).collect::<Vec<_>>(), vec![1,2,3,4]);
            assert!(!d.contains(v, 0));
            assert!(!d.contains(v, 5));
        }
        assert!(d.domain(3).is_none());
    }

    #[test]
    fn test_restrict() {
        let mut d = DomainStore::new(2, 3);
        d.restrict(0, 2);
        assert_eq!(d.colors(0).collect::<Vec<_>>(), vec![1,3]);
        d.restrict(0, 2); // already removed
        d.restrict(0, 7); // never admissible
        assert_eq!(d.domain_size(0), 2);
        assert_eq!(d.domain_size(1), 3);
        d.restrict(0, 1);
        d.restrict(0, 3);
        assert_eq!(d.domain_size(0), 0);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut d = DomainStore::new(3, 3);
        d.restrict(1, 1);
        let snapshot = d.snapshot();
        assert!(d.matches(&snapshot));
        d.restrict(0, 2);
        d.restrict(1, 3);
        d.restrict(2, 1);
        assert!(!d.matches(&snapshot));
        let nested = d.snapshot();
        d.restrict(2, 2);
        d.restore(&nested);
        assert!(d.matches(&nested));
        d.restore(&snapshot);
        assert!(d.matches(&snapshot));
        assert_eq!(d.colors(0).collect::<Vec<_>>(), vec![1,2,3]);
        assert_eq!(d.colors(1).collect::<Vec<_>>(), vec![2,3]);
        assert_eq!(d.colors(2).collect::<Vec<_>>(), vec![1,2,3]);
    }

    #[test]
    fn test_zero_colors() {
        let d = DomainStore::new(2, 0);
        assert_eq!(d.domain_size(0), 0);
        assert_eq!(d.colors(1).count(), 0);
    }
}
