//! 2D tree over points, with a bounding cell attached to every subtree.
//!
//! Each node splits the plane by its point: nodes at even depth split on x,
//! nodes at odd depth on y. Ties on the splitting coordinate are broken by the
//! other coordinate, so the ordering used at every node is total on distinct
//! points. A node's cell is its parent's cell clipped at the parent's
//! coordinate on the parent's splitting axis; every point in a subtree lies in
//! the subtree root's cell, which is what lets `range` and `nearest` skip
//! whole subtrees.
//!
//! The tree is never rebalanced. Points arriving in random order give
//! logarithmic expected height; monotonic arrival degrades it to linear.

use crate::config::TreeConfig;
use crate::error::Result;
use crate::index::PointIndex;
use crate::validation::{validate_point, validate_rectangle};
use kdspace_types::{Point, Rectangle};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Coordinate a node splits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Splitting axis for a node at `depth`: x at even depths, y at odd ones.
    #[inline]
    pub fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Axis::X } else { Axis::Y }
    }

    /// The coordinate of `point` on this axis.
    #[inline]
    pub fn coordinate(self, point: &Point) -> f64 {
        match self {
            Axis::X => point.x(),
            Axis::Y => point.y(),
        }
    }
}

#[inline]
fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Order `a` against `b` as a node at `depth` does.
///
/// Even depths compare x first and break ties on y; odd depths compare y first
/// and break ties on x. For finite points the result is `Equal` exactly when
/// `a == b`.
///
/// # Examples
///
/// ```
/// use kdspace::{Point, tree::axis_order};
/// use std::cmp::Ordering;
///
/// let a = Point::new(0.5, 0.2);
/// let b = Point::new(0.5, 0.8);
/// // same x, so the x-level ordering falls back to y
/// assert_eq!(axis_order(0, &a, &b), Ordering::Less);
/// assert_eq!(axis_order(1, &a, &b), Ordering::Less);
/// ```
pub fn axis_order(depth: usize, a: &Point, b: &Point) -> Ordering {
    match Axis::at_depth(depth) {
        Axis::X => cmp_coord(a.x(), b.x()).then_with(|| cmp_coord(a.y(), b.y())),
        Axis::Y => cmp_coord(a.y(), b.y()).then_with(|| cmp_coord(a.x(), b.x())),
    }
}

#[derive(Debug)]
struct TreeNode {
    point: Point,
    depth: usize,
    /// Number of points in this subtree, this node included.
    size: usize,
    cell: Rectangle,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(point: Point, cell: Rectangle, depth: usize) -> Self {
        Self {
            point,
            depth,
            size: 1,
            cell,
            left: None,
            right: None,
        }
    }

    fn axis(&self) -> Axis {
        Axis::at_depth(self.depth)
    }

    /// Cell for the child on the given side of this node.
    fn child_cell(&self, left: bool) -> Rectangle {
        let split = self.axis().coordinate(&self.point);
        match (self.axis(), left) {
            (Axis::X, true) => self.cell.with_xmax(split),
            (Axis::X, false) => self.cell.with_xmin(split),
            (Axis::Y, true) => self.cell.with_ymax(split),
            (Axis::Y, false) => self.cell.with_ymin(split),
        }
    }
}

fn size(node: &Option<Box<TreeNode>>) -> usize {
    node.as_ref().map_or(0, |n| n.size)
}

/// Link `point` as a new leaf below `root`, bumping subtree sizes on the way
/// down.
///
/// Stops at the first node holding an equal point and returns that node's
/// depth, with the sizes of its ancestors already bumped.
fn descend_and_link(
    root: &mut Option<Box<TreeNode>>,
    point: Point,
    domain: Rectangle,
) -> Option<usize> {
    let mut cell = domain;
    let mut depth = 0;
    let mut slot = root;
    while let Some(node) = slot {
        let order = axis_order(node.depth, &point, &node.point);
        if order == Ordering::Equal {
            return Some(node.depth);
        }
        node.size += 1;
        let left = order == Ordering::Less;
        cell = node.child_cell(left);
        depth = node.depth + 1;
        slot = if left { &mut node.left } else { &mut node.right };
    }

    log::trace!("Inserting {} at depth {}", point, depth);
    *slot = Some(Box::new(TreeNode::leaf(point, cell, depth)));
    None
}

/// Undo the size bumps made above the node equal to `point`.
fn unwind_sizes(root: &mut Option<Box<TreeNode>>, point: &Point) {
    let mut current = root.as_deref_mut();
    while let Some(node) = current {
        current = match axis_order(node.depth, point, &node.point) {
            Ordering::Less => {
                node.size -= 1;
                node.left.as_deref_mut()
            }
            Ordering::Greater => {
                node.size -= 1;
                node.right.as_deref_mut()
            }
            Ordering::Equal => None,
        };
    }
}

enum Visit<'a> {
    /// Search this subtree unless its cell is farther than the champion.
    Near(&'a TreeNode),
    /// Far child of a node whose near side is done; gate it on the champion.
    Far(&'a TreeNode),
}

/// Branch-and-bound search below `root`.
///
/// Walks near side first with an explicit stack, so a far subtree is only
/// considered once everything pushed after it has been searched.
fn nearest_below(root: &TreeNode, query: &Point) -> Point {
    let mut champion = root.point;
    let mut best = champion.squared_distance_to(query);
    let mut stack = vec![Visit::Near(root)];

    while let Some(visit) = stack.pop() {
        let node = match visit {
            Visit::Near(node) => node,
            Visit::Far(node) => {
                if node.cell.squared_distance_to(query) < best {
                    stack.push(Visit::Near(node));
                }
                continue;
            }
        };

        // nothing in this cell can beat the champion
        if best < node.cell.squared_distance_to(query) {
            continue;
        }

        let dist = node.point.squared_distance_to(query);
        if dist < best {
            champion = node.point;
            best = dist;
        }

        let (near, far) = if axis_order(node.depth, query, &node.point) == Ordering::Greater {
            (node.right.as_deref(), node.left.as_deref())
        } else {
            (node.left.as_deref(), node.right.as_deref())
        };

        if let Some(far) = far {
            stack.push(Visit::Far(far));
        }
        if let Some(near) = near {
            stack.push(Visit::Near(near));
        }
    }

    champion
}

/// Free a subtree without recursing once per level.
fn dismantle(root: Option<Box<TreeNode>>) {
    let mut stack: Vec<Box<TreeNode>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Point index backed by a 2D tree.
///
/// # Examples
///
/// ```
/// use kdspace::{Point, PointIndex, Rectangle, SpatialTree};
///
/// let mut tree = SpatialTree::new();
/// for (x, y) in [(0.2, 0.3), (0.4, 0.7), (0.9, 0.6), (0.1, 0.1)] {
///     tree.insert(Point::new(x, y))?;
/// }
///
/// assert_eq!(tree.len(), 4);
/// assert!(tree.contains(&Point::new(0.4, 0.7))?);
/// assert_eq!(tree.nearest(&Point::new(0.0, 0.0))?, Some(Point::new(0.1, 0.1)));
///
/// let lower_left = tree.range(&Rectangle::new(0.0, 0.0, 0.5, 0.5))?;
/// assert_eq!(lower_left.len(), 2);
/// # Ok::<(), kdspace::KdError>(())
/// ```
#[derive(Debug, Default)]
pub struct SpatialTree {
    root: Option<Box<TreeNode>>,
    config: TreeConfig,
}

impl SpatialTree {
    /// Create an empty tree over the unit square.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tree with a custom configuration.
    pub fn with_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { root: None, config })
    }

    /// The root cell.
    pub fn domain(&self) -> &Rectangle {
        &self.config.domain
    }

    /// Get the configuration the tree was built with.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of nodes on the longest root-to-leaf path; 0 when empty.
    pub fn height(&self) -> usize {
        self.nodes().map(|node| node.depth + 1).max().unwrap_or(0)
    }

    /// Stored points in pre-order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: self.nodes(),
        }
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats {
            size: size(&self.root),
            height: self.height(),
        }
    }

    /// The splitting geometry of every node, in pre-order.
    ///
    /// A node at an x-level cuts its cell with the vertical line through its
    /// point; a y-level node cuts with the horizontal line.
    pub fn partitions(&self) -> Vec<Partition> {
        self.nodes()
            .map(|node| Partition {
                point: node.point,
                cell: node.cell,
                axis: node.axis(),
                depth: node.depth,
            })
            .collect()
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        dismantle(self.root.take());
    }

    fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl Drop for SpatialTree {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl PointIndex for SpatialTree {
    fn insert(&mut self, point: Point) -> Result<bool> {
        validate_point(&point)?;

        if !self.config.domain.contains(&point) {
            log::warn!(
                "Point {} lies outside the index domain {}; queries may miss it",
                point,
                self.config.domain
            );
        }

        if let Some(depth) = descend_and_link(&mut self.root, point, self.config.domain) {
            unwind_sizes(&mut self.root, &point);
            log::debug!("Ignoring duplicate insert of {} (held at depth {})", point, depth);
            return Ok(false);
        }
        Ok(true)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        validate_point(point)?;

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match axis_order(node.depth, point, &node.point) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Ok(true),
            };
        }
        Ok(false)
    }

    fn len(&self) -> usize {
        size(&self.root)
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn range(&self, rect: &Rectangle) -> Result<Vec<Point>> {
        validate_rectangle(rect)?;

        let mut found = Vec::new();
        let mut stack: Vec<&TreeNode> = self
            .root
            .as_deref()
            .filter(|root| root.cell.intersects(rect))
            .into_iter()
            .collect();

        while let Some(node) = stack.pop() {
            if rect.contains(&node.point) {
                found.push(node.point);
            }

            // right goes on first so the left subtree is visited first
            if let Some(right) = node.right.as_deref()
                && right.cell.intersects(rect)
            {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref()
                && left.cell.intersects(rect)
            {
                stack.push(left);
            }
        }

        Ok(found)
    }

    fn nearest(&self, query: &Point) -> Result<Option<Point>> {
        validate_point(query)?;

        Ok(self
            .root
            .as_deref()
            .map(|root| nearest_below(root, query)))
    }
}

/// Size and shape summary of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of stored points
    pub size: usize,
    /// Nodes on the longest root-to-leaf path
    pub height: usize,
}

/// One node's split: its point, its cell and the axis it divides on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub point: Point,
    pub cell: Rectangle,
    pub axis: Axis,
    pub depth: usize,
}

/// Pre-order walk over the nodes.
struct Nodes<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(node)
    }
}

/// Iterator over the points of a [`SpatialTree`], in pre-order.
pub struct Iter<'a> {
    nodes: Nodes<'a>,
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.nodes.next().map(|node| node.point)
    }
}

impl<'a> IntoIterator for &'a SpatialTree {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
