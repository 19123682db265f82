/*!
An index from literals to the positions of clauses containing them.

The index is a cache over the clause database, not an independent structure.
Any structural change to the database --- a clause added, removed, reordered, or a literal removed
from a clause --- invalidates the index, and the index is always rebuilt from scratch rather than
patched incrementally.
This keeps the passes free to remove clauses by swap with the final clause, at the cost of a full
rebuild per structural change.

Lists are indexed by [literal index](crate::structures::literal::Literal::index), so lookup is an
array access rather than a hash.
*/

use crate::structures::{
    clause::CClause,
    literal::{CLiteral, Literal},
};

/// An index from literals to the positions of clauses containing them.
pub struct OccurrenceIndex {
    /// For each literal, by literal index, the positions of clauses containing the literal.
    lists: Vec<Vec<usize>>,
}

impl OccurrenceIndex {
    /// Builds an index over the given clauses by a single pass over the database.
    pub fn build(clauses: &[CClause], atom_count: usize) -> Self {
        let mut lists = vec![Vec::default(); atom_count * 2];

        for (position, clause) in clauses.iter().enumerate() {
            for literal in clause {
                lists[literal.index()].push(position);
            }
        }

        OccurrenceIndex { lists }
    }

    /// The positions of clauses containing the given literal.
    pub fn of(&self, literal: CLiteral) -> &[usize] {
        &self.lists[literal.index()]
    }
}
