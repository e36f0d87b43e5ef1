//! Mapping between global vertex indices and a segment's local vertex buffer.

/// Marks a global vertex that has no slot in the local buffer.
const UNMAPPED: u32 = u32::MAX;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReassignmentTable {
    /// global -> local
    forward: Vec<u32>,
    /// local -> global
    sources: Vec<u32>,
}

/// A global index the table has no slot for, found at `position` in the remapped slice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Unmapped {
    pub position: usize,
    pub vertex: u32,
}

impl ReassignmentTable {
    /// Every global index maps to itself.
    pub fn identity(vertex_count: usize) -> Self {
        let sources: Vec<u32> = (0..vertex_count as u32).collect();
        Self {
            forward: sources.clone(),
            sources,
        }
    }

    /// Packs the given vertices into `0..referenced.len()`, keeping their relative order.
    ///
    /// `referenced` must be free of duplicates. Indices outside the model are
    /// left unmapped.
    pub fn compact(vertex_count: usize, referenced: &[u32]) -> Self {
        let mut forward = vec![UNMAPPED; vertex_count];
        let mut sources = Vec::with_capacity(referenced.len());
        for &global in referenced {
            if let Some(slot) = forward.get_mut(global as usize) {
                *slot = sources.len() as u32;
                sources.push(global);
            }
        }
        Self { forward, sources }
    }

    pub fn get(&self, global: u32) -> Option<u32> {
        self.forward
            .get(global as usize)
            .copied()
            .filter(|&local| local != UNMAPPED)
    }

    pub fn remap(&self, indices: &[u32]) -> Result<Vec<u32>, Unmapped> {
        indices
            .iter()
            .enumerate()
            .map(|(position, &vertex)| self.get(vertex).ok_or(Unmapped { position, vertex }))
            .collect()
    }

    /// Global index for every local slot, in local order.
    pub fn sources(&self) -> &[u32] {
        &self.sources
    }
}
