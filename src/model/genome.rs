use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gene {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl Gene {
    pub fn length(&self) -> u32 {
        self.end - self.start
    }

    /// True when `site` lies inside the gene body after dropping
    /// `trim_fraction` of the length at each end. Both bounds are inclusive.
    pub fn trimmed_body_contains(&self, site: u32, trim_fraction: f64) -> bool {
        let margin = trim_fraction * self.length() as f64;
        let site = site as f64;
        self.start as f64 + margin <= site && site <= self.end as f64 - margin
    }
}

/// Position -> owner map. Writing a range overwrites whatever owned those
/// positions before.
#[derive(Debug, Clone)]
pub struct PositionIndex<T> {
    slots: HashMap<u32, T>,
}

impl<T> Default for PositionIndex<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<T: Clone> PositionIndex<T> {
    pub fn assign(&mut self, start: u32, end: u32, owner: T) {
        for pos in start..end {
            self.slots.insert(pos, owner.clone());
        }
    }

    pub fn get(&self, pos: u32) -> Option<&T> {
        self.slots.get(&pos)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Genome {
    name: String,
    genes: Vec<Gene>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
    #[serde(skip)]
    index: PositionIndex<usize>,
}

impl Genome {
    pub fn builder(name: impl Into<String>) -> GenomeBuilder {
        GenomeBuilder {
            genome: Genome {
                name: name.into(),
                genes: Vec::new(),
                by_name: HashMap::new(),
                index: PositionIndex::default(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the named gene within [`Genome::genes`].
    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Genes in first-seen annotation order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn gene_at(&self, pos: u32) -> Option<&Gene> {
        self.index.get(pos).map(|&idx| &self.genes[idx])
    }

    pub fn indexed_positions(&self) -> usize {
        self.index.len()
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

pub struct GenomeBuilder {
    genome: Genome,
}

impl GenomeBuilder {
    /// A gene whose name was already seen replaces the earlier entry; the
    /// positions the earlier entry claimed keep resolving to that name.
    pub fn push(&mut self, gene: Gene) -> &mut Self {
        let g = &mut self.genome;
        let idx = match g.by_name.get(&gene.name) {
            Some(&idx) => {
                g.genes[idx] = gene;
                idx
            }
            None => {
                let idx = g.genes.len();
                g.by_name.insert(gene.name.clone(), idx);
                g.genes.push(gene);
                idx
            }
        };
        let (start, end) = (g.genes[idx].start, g.genes[idx].end);
        g.index.assign(start, end, idx);
        self
    }

    pub fn build(self) -> Genome {
        self.genome
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/genome.rs"]
mod tests;
