//! Test fixtures: hand-built game trees and a counting board wrapper

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::board::Board;
use crate::state::GameState;
use crate::types::{Score, Side};

struct Edge {
    label: char,
    child: usize,
    again: bool,
}

struct Node {
    score: Score,
    is_final: bool,
    edges: Vec<Edge>,
}

struct Tree {
    nodes: Vec<Node>,
    expanded: RefCell<Vec<usize>>,
}

/// Builder for explicit game trees
///
/// Every node carries its own static score, so the orderer's keys (the
/// scores of the children) can be chosen independently of the values the
/// search backs up from deeper leaves.
pub(crate) struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Final position with the given score
    pub(crate) fn leaf(&mut self, score: Score) -> usize {
        self.push(score, true, Vec::new())
    }

    /// Non-final position that nevertheless offers no moves
    pub(crate) fn dead_end(&mut self, score: Score) -> usize {
        self.push(score, false, Vec::new())
    }

    /// Inner position; each edge is `(label, child, grants_extra_turn)`
    pub(crate) fn node(&mut self, score: Score, edges: &[(char, usize, bool)]) -> usize {
        let edges = edges
            .iter()
            .map(|&(label, child, again)| Edge { label, child, again })
            .collect();
        self.push(score, false, edges)
    }

    pub(crate) fn build(self, root: usize) -> TreeState {
        let count = self.nodes.len();
        TreeState {
            tree: Rc::new(Tree {
                nodes: self.nodes,
                expanded: RefCell::new(vec![0; count]),
            }),
            node: root,
        }
    }

    fn push(&mut self, score: Score, is_final: bool, edges: Vec<Edge>) -> usize {
        self.nodes.push(Node {
            score,
            is_final,
            edges,
        });
        self.nodes.len() - 1
    }
}

/// Position inside a [`TreeBuilder`] tree
///
/// Moves are single characters and ignore the side to move. Every call to
/// `legal_moves` is recorded, so tests can tell which nodes the search
/// actually expanded.
#[derive(Clone)]
pub(crate) struct TreeState {
    tree: Rc<Tree>,
    node: usize,
}

impl TreeState {
    /// How often the search expanded `node`
    pub(crate) fn expansions(&self, node: usize) -> usize {
        self.tree.expanded.borrow()[node]
    }

    fn current(&self) -> &Node {
        &self.tree.nodes[self.node]
    }
}

impl GameState for TreeState {
    type Move = char;

    fn legal_moves(&self, _side: Side) -> Vec<char> {
        self.tree.expanded.borrow_mut()[self.node] += 1;
        self.current().edges.iter().map(|edge| edge.label).collect()
    }

    fn sow(&self, _side: Side, mv: &char) -> (Self, bool) {
        let edge = self
            .current()
            .edges
            .iter()
            .find(|edge| edge.label == *mv)
            .unwrap_or_else(|| panic!("no move {:?} at node {}", mv, self.node));
        let next = TreeState {
            tree: Rc::clone(&self.tree),
            node: edge.child,
        };
        (next, edge.again)
    }

    fn is_final(&self) -> bool {
        self.current().is_final
    }

    fn store(&self, side: Side) -> u32 {
        let score = self.current().score;
        match side {
            Side::Near => score.max(0) as u32,
            Side::Far => (-score).max(0) as u32,
        }
    }
}

/// Board wrapper counting move generations across all derived states
#[derive(Clone)]
pub(crate) struct CountingBoard {
    board: Board,
    generated: Rc<Cell<usize>>,
}

impl CountingBoard {
    pub(crate) fn new(board: Board) -> Self {
        Self {
            board,
            generated: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn generated(&self) -> usize {
        self.generated.get()
    }
}

impl GameState for CountingBoard {
    type Move = usize;

    fn legal_moves(&self, side: Side) -> Vec<usize> {
        self.generated.set(self.generated.get() + 1);
        self.board.legal_moves(side)
    }

    fn sow(&self, side: Side, mv: &usize) -> (Self, bool) {
        let (board, again) = self.board.sow(side, mv);
        let next = Self {
            board,
            generated: Rc::clone(&self.generated),
        };
        (next, again)
    }

    fn is_final(&self) -> bool {
        self.board.is_final()
    }

    fn store(&self, side: Side) -> u32 {
        self.board.store(side)
    }
}
