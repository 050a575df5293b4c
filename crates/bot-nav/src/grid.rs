use core::cmp::Ordering;
use std::collections::BinaryHeap;

use bot_core::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TravelEstimator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Cell {
    x: i32,
    y: i32,
}

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: Cell,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, Cell, u64) {
        (self.f, self.g, self.cell, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// Blocked-cell grid that answers travel-time queries with 4-connected A*.
///
/// Points are projected onto the ground plane (`x`/`y`); `z` is ignored. This
/// is the reference [`TravelEstimator`] backend used by tests and benches;
/// production games plug their own navigation system in behind the same
/// trait.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavGrid {
    width: i32,
    height: i32,
    cell_size: f32,
    speed_ups: f32,
    blocked: Vec<bool>,
}

impl NavGrid {
    /// `speed_ups` is the assumed agent ground speed in world units per
    /// second; travel estimates scale inversely with it.
    pub fn new(width: u32, height: u32, cell_size: f32, speed_ups: f32) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty");
        assert!(cell_size > 0.0, "cell_size must be > 0");
        assert!(speed_ups > 0.0, "speed must be positive");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            cell_size,
            speed_ups,
            blocked: vec![false; (width * height) as usize],
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) {
        if let Some(idx) = self.idx(Cell { x, y }) {
            self.blocked[idx] = blocked;
        }
    }

    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.idx(Cell { x, y })
            .map(|idx| self.blocked[idx])
            .unwrap_or(true)
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }

    fn cell_of(&self, p: Vec3) -> Option<Cell> {
        let x = (p.x / self.cell_size).floor() as i32;
        let y = (p.y / self.cell_size).floor() as i32;
        let cell = Cell { x, y };
        if self.in_bounds(cell) {
            Some(cell)
        } else {
            None
        }
    }

    fn heuristic(a: Cell, b: Cell) -> u32 {
        ((a.x - b.x).abs() + (a.y - b.y).abs()) as u32
    }

    fn neighbors(cell: Cell) -> [Cell; 4] {
        // Fixed order for determinism: N, E, S, W.
        [
            Cell {
                x: cell.x,
                y: cell.y - 1,
            },
            Cell {
                x: cell.x + 1,
                y: cell.y,
            },
            Cell {
                x: cell.x,
                y: cell.y + 1,
            },
            Cell {
                x: cell.x - 1,
                y: cell.y,
            },
        ]
    }

    /// Number of cell steps on the cheapest path, or `None` if disconnected.
    fn steps_between(&self, start: Cell, goal: Cell) -> Option<u32> {
        let start_idx = self.idx(start)?;
        let goal_idx = self.idx(goal)?;
        if self.blocked[start_idx] || self.blocked[goal_idx] {
            return None;
        }
        if start == goal {
            return Some(0);
        }

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut tie: u64 = 0;

        let grid_len = (self.width * self.height) as usize;
        let mut g_score = vec![u32::MAX; grid_len];

        g_score[start_idx] = 0;
        open.push(OpenNode {
            f: Self::heuristic(start, goal),
            g: 0,
            cell: start,
            tie,
        });
        tie += 1;

        while let Some(node) = open.pop() {
            if node.cell == goal {
                return Some(node.g);
            }

            let node_idx = self.idx(node.cell)?;
            if node.g != g_score[node_idx] {
                // Stale heap entry.
                continue;
            }

            for n in Self::neighbors(node.cell) {
                let Some(n_idx) = self.idx(n) else { continue };
                if self.blocked[n_idx] {
                    continue;
                }

                let tentative_g = node.g.saturating_add(1);
                if tentative_g >= g_score[n_idx] {
                    continue;
                }

                g_score[n_idx] = tentative_g;
                open.push(OpenNode {
                    f: tentative_g.saturating_add(Self::heuristic(n, goal)),
                    g: tentative_g,
                    cell: n,
                    tie,
                });
                tie += 1;
            }
        }

        None
    }
}

impl TravelEstimator for NavGrid {
    fn travel_time_millis(&self, from: Vec3, to: Vec3) -> u32 {
        let (Some(start), Some(goal)) = (self.cell_of(from), self.cell_of(to)) else {
            return 0;
        };
        let Some(steps) = self.steps_between(start, goal) else {
            return 0;
        };

        let distance = if steps == 0 {
            from.distance(to)
        } else {
            steps as f32 * self.cell_size
        };
        let millis = distance / self.speed_ups * 1000.0;
        (millis.ceil() as u32).max(1)
    }
}
