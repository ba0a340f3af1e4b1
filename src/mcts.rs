//! Monte Carlo Tree Search (MCTS) with UCT selection.
//!
//! Each decision builds a fresh tree rooted at the current position and runs
//! a fixed number of rounds of:
//! - **Selection**: descend from the root along the child with the highest
//!   UCT score until a leaf is reached. Unvisited children score infinity.
//! - **Expansion**: add one child per legal move of the side to act at the
//!   leaf, then continue from one of them chosen uniformly at random.
//! - **Simulation**: play uniformly random legal moves to the end of the
//!   game and check whether the searching side comes out ahead on the
//!   positional weights.
//! - **Backpropagation**: walk the parent chain, bumping visits and, for a
//!   won playout, wins.
//!
//! Nodes live in an arena ([`SearchTree`]) and refer to their parent by
//! index, so parents own their children through the arena and no node
//! holds a reference to another. Visit and win counts are always from the
//! point of view of the side searching at the root.

use fastrand::Rng;
use tracing::{debug, trace};

use crate::board::{Board, Color, str_coord};
use crate::constants::{EXPLORATION_PARAM, N_ITERATIONS};
use crate::eval::is_winning;
use crate::player::Player;
use crate::rules::{Move, has_legal_move, is_terminal, legal_moves, play_on_board};
use crate::strategy::Strategy;

/// Index of a node inside a [`SearchTree`].
pub type NodeId = usize;

/// A node in the MCTS search tree.
#[derive(Clone, Debug)]
pub struct TreeNode {
    /// The position at this node
    pub board: Board,
    /// Side to act in `board`
    pub to_move: Color,
    /// Parent node, `None` for the root
    pub parent: Option<NodeId>,
    /// Child nodes (one per legal move once expanded)
    pub children: Vec<NodeId>,
    /// Move that produced this node from its parent
    pub mv: Option<Move>,
    /// Number of visits
    pub v: u32,
    /// Number of wins for the root side (winrate = w/v)
    pub w: u32,
}

impl TreeNode {
    fn new(board: Board, to_move: Color, parent: Option<NodeId>, mv: Option<Move>) -> Self {
        Self {
            board,
            to_move,
            parent,
            children: Vec::new(),
            mv,
            v: 0,
            w: 0,
        }
    }

    /// Fraction of playouts through this node won by the root side.
    /// Unvisited nodes report 0.
    #[inline]
    pub fn winrate(&self) -> f64 {
        if self.v > 0 {
            self.w as f64 / self.v as f64
        } else {
            0.0
        }
    }
}

/// Arena holding every node of one search. Node 0 is the root.
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<TreeNode>,
    me: Color,
}

impl SearchTree {
    pub const ROOT: NodeId = 0;

    /// A tree holding only the root: `board` with `me` to act.
    pub fn new(board: &Board, me: Color) -> Self {
        Self {
            nodes: vec![TreeNode::new(board.clone(), me, None, None)],
            me,
        }
    }

    /// The side the search is deciding for.
    pub fn me(&self) -> Color {
        self.me
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn add_child(&mut self, parent: NodeId, board: Board, to_move: Color, mv: Move) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(TreeNode::new(board, to_move, Some(parent), Some(mv)));
        self.nodes[parent].children.push(id);
        id
    }
}

/// Who acts after `mover` has played on `board`: normally the opponent,
/// but the mover again when the opponent has to pass.
fn next_to_move(board: &Board, mover: Color) -> Color {
    let opp = mover.opponent();
    if !has_legal_move(board, opp) && has_legal_move(board, mover) {
        mover
    } else {
        opp
    }
}

/// UCT score of `child` under a parent visited `parent_visits` times.
///
/// An unvisited child, or any child of an unvisited parent, scores
/// infinity so it is explored before anything is exploited.
pub fn uct_score(parent_visits: u32, child: &TreeNode, exploration: f64) -> f64 {
    if child.v == 0 || parent_visits == 0 {
        return f64::INFINITY;
    }
    let exploit = child.w as f64 / child.v as f64;
    let explore = ((parent_visits as f64).ln() / child.v as f64).sqrt();
    exploit + exploration * explore
}

/// The child of `id` with the highest UCT score; the first one wins ties.
/// Returns `id` itself when it has no children.
pub fn most_urgent(tree: &SearchTree, id: NodeId, exploration: f64) -> NodeId {
    let node = tree.node(id);
    let mut best = id;
    let mut best_score = f64::NEG_INFINITY;
    for &child in &node.children {
        let score = uct_score(node.v, tree.node(child), exploration);
        if best == id || score > best_score {
            best = child;
            best_score = score;
        }
    }
    best
}

/// Descend from the root to a leaf following [`most_urgent`].
pub fn select(tree: &SearchTree, exploration: f64) -> NodeId {
    let mut id = SearchTree::ROOT;
    while !tree.node(id).children.is_empty() {
        id = most_urgent(tree, id, exploration);
    }
    id
}

/// Expand a leaf with one child per legal move of its side to act and
/// return a uniformly random new child. A node without legal moves is
/// returned unchanged.
pub fn expand(tree: &mut SearchTree, id: NodeId, rng: &mut Rng) -> NodeId {
    if tree.node(id).children.is_empty() {
        let mover = tree.node(id).to_move;
        let moves = legal_moves(&tree.node(id).board, mover);
        for (dest, origins) in moves {
            let mut board = tree.node(id).board.clone();
            play_on_board(&mut board, mover, dest, &origins);
            let to_move = next_to_move(&board, mover);
            tree.add_child(id, board, to_move, Move::new(dest, origins));
        }
    }

    let children = &tree.node(id).children;
    if children.is_empty() {
        return id;
    }
    children[rng.usize(..children.len())]
}

/// Play random legal moves from `board` (with `to_move` acting) until the
/// game ends. Returns true if `me` finishes ahead on positional weights.
///
/// A side with no legal move passes.
pub fn simulate(board: &Board, to_move: Color, me: Color, rng: &mut Rng) -> bool {
    let mut board = board.clone();
    let mut current = to_move;

    while !is_terminal(&board) {
        let moves = legal_moves(&board, current);
        if moves.is_empty() {
            current = current.opponent();
            continue;
        }
        let pick = rng.usize(..moves.len());
        if let Some((dest, origins)) = moves.into_iter().nth(pick) {
            play_on_board(&mut board, current, dest, &origins);
        }
        current = current.opponent();
    }

    is_winning(&board, me)
}

/// Add one visit (and a win if `win`) to `id` and every ancestor.
pub fn backpropagate(tree: &mut SearchTree, id: NodeId, win: bool) {
    let mut cursor = Some(id);
    while let Some(id) = cursor {
        let node = tree.node_mut(id);
        node.v += 1;
        if win {
            node.w += 1;
        }
        cursor = node.parent;
    }
}

/// The visited root child with the highest winrate; the first one wins ties.
pub fn best_child(tree: &SearchTree) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for &child in &tree.root().children {
        let node = tree.node(child);
        if node.v == 0 {
            continue;
        }
        let wr = node.winrate();
        if best.is_none_or(|(_, b)| wr > b) {
            best = Some((child, wr));
        }
    }
    best.map(|(id, _)| id)
}

/// Run `iterations` rounds of MCTS and return the chosen root move.
///
/// Every round visits exactly one root child, so a visited child exists
/// as soon as one round has run. With zero rounds a uniformly random legal
/// move is returned instead. `None` means the root side has no legal move.
pub fn tree_search(
    tree: &mut SearchTree,
    iterations: usize,
    exploration: f64,
    rng: &mut Rng,
) -> Option<Move> {
    let me = tree.me();
    for i in 0..iterations {
        let leaf = select(tree, exploration);
        let node = expand(tree, leaf, rng);
        let win = {
            let n = tree.node(node);
            simulate(&n.board, n.to_move, me, rng)
        };
        backpropagate(tree, node, win);
        trace!(iteration = i, leaf, node, win, "mcts round");
    }

    if let Some(id) = best_child(tree) {
        return tree.node(id).mv.clone();
    }

    let moves = legal_moves(&tree.root().board, me);
    if moves.is_empty() {
        return None;
    }
    debug!("no visited root child, falling back to a random legal move");
    let pick = rng.usize(..moves.len());
    moves
        .into_iter()
        .nth(pick)
        .map(|(dest, origins)| Move::new(dest, origins))
}

/// Log statistics for the root's children.
pub fn dump_children(tree: &SearchTree) {
    for &child in &tree.root().children {
        let node = tree.node(child);
        if let Some(mv) = &node.mv {
            trace!(
                dest = %str_coord(mv.dest),
                v = node.v,
                w = node.w,
                wr = format_args!("{:.3}", node.winrate()),
                "root child"
            );
        }
    }
}

/// MCTS player. Owns its random source so runs can be seeded.
#[derive(Clone, Debug)]
pub struct MctsStrategy {
    iterations: usize,
    exploration: f64,
    rng: Rng,
}

impl Default for MctsStrategy {
    fn default() -> Self {
        Self::new(N_ITERATIONS, EXPLORATION_PARAM, None)
    }
}

impl MctsStrategy {
    /// `seed` makes every decision reproducible; `None` seeds randomly.
    pub fn new(iterations: usize, exploration: f64, seed: Option<u64>) -> Self {
        Self {
            iterations,
            exploration,
            rng: seed.map_or_else(Rng::new, Rng::with_seed),
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Run a full search and hand back the tree along with the decision,
    /// for callers that want to inspect the statistics.
    pub fn search(&mut self, board: &Board, me: Color) -> (Option<Move>, SearchTree) {
        let mut tree = SearchTree::new(board, me);
        if !has_legal_move(board, me) {
            return (None, tree);
        }
        let mv = tree_search(&mut tree, self.iterations, self.exploration, &mut self.rng);
        (mv, tree)
    }
}

impl Strategy for MctsStrategy {
    fn select_move(&mut self, board: &Board, player: &Player, _opponent: &Player) -> Option<Move> {
        let (mv, tree) = self.search(board, player.color());
        if let Some(mv) = &mv {
            debug!(
                color = %player.color(),
                dest = %str_coord(mv.dest),
                nodes = tree.len(),
                root_visits = tree.root().v,
                root_winrate = format_args!("{:.3}", tree.root().winrate()),
                "mcts decision"
            );
            dump_children(&tree);
        }
        mv
    }
}
