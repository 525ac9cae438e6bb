//! Navigation graph over the walkable tiles of a [`Geometry`].
//!
//! # Data layout
//!
//! Nodes live in a dense arena indexed by `NodeId = column * rows + row`; a
//! blocked cell is an empty slot.  Edges live in a flat slab indexed by
//! `EdgeId`.  Every edge is one half of a two-way pair and stores the id of
//! its other half in `inverse`, so the cross-links are plain indices rather
//! than references.  Severed edges leave a hole in the slab; ids are never
//! reused, so a stale `EdgeId` held by an agent resolves to `None` instead of
//! a different edge.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds one rectangle per live node, the extent of
//! its tile.  [`Graph::find`] answers point queries through it and the tree is
//! kept in step with [`Graph::add_node`] / [`Graph::remove_node`].

use rand::Rng;
use rand::seq::SliceRandom;
use rstar::{Envelope, PointDistance, RTree, RTreeObject, AABB};

use chase_core::{Direction, EdgeId, NodeId, Surface, Vector};

use crate::grid::{Geometry, Tile, TileCoord};

/// Radius used when drawing a node.
const NODE_RADIUS: f64 = 10.0;

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the spatial index: the tile rectangle of one node.
#[derive(Clone, Debug, PartialEq)]
struct NodeEntry {
    min: [f64; 2],
    max: [f64; 2],
    id:  NodeId,
}

impl NodeEntry {
    fn new(tile: &Tile, id: NodeId) -> Self {
        Self {
            min: [tile.x, tile.y],
            max: [tile.x + tile.width, tile.y + tile.height],
            id,
        }
    }
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        Envelope::distance_2(&self.envelope(), point)
    }

    /// Half-open like [`Tile::contains`], so a point on a shared border
    /// belongs to exactly one node.
    fn contains_point(&self, point: &[f64; 2]) -> bool {
        point[0] >= self.min[0]
            && point[0] < self.max[0]
            && point[1] >= self.min[1]
            && point[1] < self.max[1]
    }
}

// ── Node / Edge ───────────────────────────────────────────────────────────────

/// Graph vertex over one walkable tile.
#[derive(Clone, Debug)]
pub struct Node {
    pub id:   NodeId,
    pub tile: Tile,
    edges:    Vec<EdgeId>,
}

impl Node {
    #[inline]
    pub fn coord(&self) -> TileCoord {
        self.tile.coord
    }

    #[inline]
    pub fn center(&self) -> Vector {
        self.tile.center()
    }

    /// Outgoing edges, one per live orthogonal neighbour.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// More than two live edges.
    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.edges.len() > 2
    }
}

/// Directed half of a two-way connection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub distance: u32,
    pub from:     NodeId,
    pub to:       NodeId,
    /// The matching half on `to`, pointing back at `from`.
    pub inverse:  EdgeId,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Planar 4-connected graph with uniform edge weight.
#[derive(Clone, Debug)]
pub struct Graph {
    columns: u32,
    rows:    u32,
    nodes:   Vec<Option<Node>>,
    edges:   Vec<Option<Edge>>,
    root:    Option<NodeId>,
    live:    usize,
    index:   RTree<NodeEntry>,
}

impl Graph {
    /// A graph with the dimensions of a `columns × rows` grid and no nodes.
    pub fn empty(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            nodes: vec![None; columns as usize * rows as usize],
            edges: Vec::new(),
            root: None,
            live: 0,
            index: RTree::new(),
        }
    }

    /// Build the graph of `geometry`: one node per unblocked tile, then a
    /// two-way edge from every node to its right and lower neighbour.
    pub fn new(geometry: &dyn Geometry) -> Self {
        let mut graph = Graph::empty(geometry.columns(), geometry.rows());

        let mut entries = Vec::new();
        for column in 0..graph.columns {
            for row in 0..graph.rows {
                let Some(tile) = geometry.tile(TileCoord::new(column, row)) else {
                    continue;
                };
                if tile.blocked {
                    continue;
                }
                let id = graph.id_of(tile.coord);
                graph.nodes[id.index()] = Some(Node { id, tile: *tile, edges: Vec::new() });
                entries.push(NodeEntry::new(tile, id));
                graph.live += 1;
            }
        }

        for column in 0..graph.columns {
            for row in 0..graph.rows {
                let coord = TileCoord::new(column, row);
                let Some(a) = graph.node_at(coord) else {
                    continue;
                };
                for direction in [Direction::Right, Direction::Down] {
                    if let Some(b) = coord.step(direction).and_then(|c| graph.node_at(c)) {
                        graph.create_two_way(a, b);
                    }
                }
            }
        }

        graph.index = RTree::bulk_load(entries);
        graph.root = graph.first_node();
        graph
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Number of live directed edges (twice the number of connections).
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Slot count of the node arena; every `NodeId` is below this.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// First live node in column-major order.  `None` only when the graph has
    /// no nodes.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline]
    fn id_of(&self, coord: TileCoord) -> NodeId {
        NodeId(coord.column * self.rows + coord.row)
    }

    #[inline]
    fn in_bounds(&self, coord: TileCoord) -> bool {
        coord.column < self.columns && coord.row < self.rows
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index()).and_then(Option::as_ref)
    }

    /// The live node occupying `coord`.
    pub fn node_at(&self, coord: TileCoord) -> Option<NodeId> {
        if !self.in_bounds(coord) {
            return None;
        }
        let id = self.id_of(coord);
        self.node(id).map(|n| n.id)
    }

    /// Center of a node's tile.
    pub fn center(&self, id: NodeId) -> Option<Vector> {
        self.node(id).map(Node::center)
    }

    /// Outgoing edges of `id`, empty when the node does not exist.
    pub fn edges_of(&self, id: NodeId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.node(id)
            .map(Node::edges)
            .unwrap_or(&[])
            .iter()
            .filter_map(|&e| self.edge(e).map(|edge| (e, edge)))
    }

    /// The edge leading from `from` directly to `to`.
    pub fn edge_to(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.edges_of(from).find(|(_, e)| e.to == to).map(|(id, _)| id)
    }

    /// The inverse half of `edge`, if both halves are still live.
    pub fn inverse(&self, edge: EdgeId) -> Option<EdgeId> {
        self.edge(edge).map(|e| e.inverse).filter(|&inv| self.edge(inv).is_some())
    }

    pub fn is_intersection(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_intersection)
    }

    /// The node whose tile contains `point`.
    pub fn find(&self, point: Vector) -> Option<NodeId> {
        if !point.is_finite() {
            return None;
        }
        self.index.locate_at_point(&[point.x, point.y]).map(|e| e.id)
    }

    /// Live nodes in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().flatten()
    }

    /// Pick a non-empty column uniformly, then a node within it uniformly.
    pub fn random_node<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<NodeId> {
        let rows = self.rows as usize;
        if rows == 0 {
            return None;
        }
        let columns: Vec<&[Option<Node>]> = self
            .nodes
            .chunks(rows)
            .filter(|c| c.iter().any(Option::is_some))
            .collect();
        let column = columns.choose(rng)?;
        let ids: Vec<NodeId> = column.iter().flatten().map(|n| n.id).collect();
        ids.choose(rng).copied()
    }

    /// A random outgoing edge of `node` not listed in `except`.
    pub fn random_edge<R: Rng + ?Sized>(
        &self,
        node: NodeId,
        except: &[EdgeId],
        rng: &mut R,
    ) -> Option<EdgeId> {
        let candidates: Vec<EdgeId> = self
            .edges_of(node)
            .map(|(id, _)| id)
            .filter(|id| !except.contains(id))
            .collect();
        candidates.choose(rng).copied()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    fn create_two_way(&mut self, a: NodeId, b: NodeId) {
        let ab = EdgeId(self.edges.len() as u32);
        let ba = EdgeId(ab.0 + 1);
        self.edges.push(Some(Edge { distance: 1, from: a, to: b, inverse: ba }));
        self.edges.push(Some(Edge { distance: 1, from: b, to: a, inverse: ab }));
        if let Some(node) = self.nodes[a.index()].as_mut() {
            node.edges.push(ab);
        }
        if let Some(node) = self.nodes[b.index()].as_mut() {
            node.edges.push(ba);
        }
    }

    /// Insert a node for `tile` and link it to its live orthogonal neighbours.
    ///
    /// Returns `None` without touching the graph when the cell is occupied
    /// or outside the grid.
    pub fn add_node(&mut self, tile: &Tile) -> Option<NodeId> {
        let coord = tile.coord;
        if !self.in_bounds(coord) || self.node_at(coord).is_some() {
            return None;
        }
        let id = self.id_of(coord);
        self.nodes[id.index()] = Some(Node { id, tile: *tile, edges: Vec::new() });
        self.live += 1;
        self.index.insert(NodeEntry::new(tile, id));

        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            if let Some(other) = coord.step(direction).and_then(|c| self.node_at(c)) {
                self.create_two_way(id, other);
            }
        }

        if self.root.is_none() || self.root.is_some_and(|r| id < r) {
            self.root = Some(id);
        }
        Some(id)
    }

    /// Remove the node at `coord`, severing both halves of every incident
    /// edge.  Returns the removed node, or `None` when the cell was empty.
    pub fn remove_node(&mut self, coord: TileCoord) -> Option<Node> {
        let id = self.node_at(coord)?;
        let node = self.nodes[id.index()].take()?;
        self.live -= 1;
        self.index.remove(&NodeEntry::new(&node.tile, id));

        for &e in &node.edges {
            let Some(edge) = self.edges[e.index()].take() else {
                continue;
            };
            if let Some(neighbor) = self.nodes[edge.to.index()].as_mut() {
                neighbor.edges.retain(|&x| x != edge.inverse);
            }
            if let Some(slot) = self.edges.get_mut(edge.inverse.index()) {
                *slot = None;
            }
        }

        if self.root == Some(id) {
            self.root = self.first_node();
        }
        Some(node)
    }

    fn first_node(&self) -> Option<NodeId> {
        self.iter().next().map(|n| n.id)
    }

    // ── Drawing ───────────────────────────────────────────────────────────

    /// Every node as a point and every connection once as a line.
    pub fn draw(&self, surface: &mut dyn Surface) {
        for node in self.iter() {
            surface.point(node.center(), NODE_RADIUS);
        }
        for edge in self.edges.iter().flatten() {
            if edge.from < edge.to {
                if let (Some(a), Some(b)) = (self.center(edge.from), self.center(edge.to)) {
                    surface.line(a, b);
                }
            }
        }
    }
}
