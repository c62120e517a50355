//! Snake body - ordered segments, head first.
//!
//! The body only ever changes by pushing a new head or popping the tail.

use std::collections::VecDeque;

use crate::error::EngineError;
use crate::types::{Direction, Point};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Point>,
    max_segments: usize,
}

impl Snake {
    /// Create a snake of `length` segments with its head at `head`.
    ///
    /// Body segments trail behind the head, opposite to `direction`.
    pub fn new(head: Point, direction: Direction, length: usize, max_segments: usize) -> Self {
        let length = length.max(1);
        let back = direction.opposite();
        let mut segments = VecDeque::with_capacity(length);
        let mut p = head;
        segments.push_back(p);
        for _ in 1..length {
            p = p.step(back);
            segments.push_back(p);
        }
        Self {
            segments,
            max_segments: max_segments.max(length),
        }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_segments(segments: &[Point], max_segments: usize) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            segments: segments.iter().copied().collect(),
            max_segments: max_segments.max(segments.len()),
        })
    }

    pub fn head(&self) -> Point {
        // Never empty: constructors require one segment and `pop_tail` keeps it.
        self.segments[0]
    }

    pub fn tail(&self) -> Point {
        self.segments[self.segments.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.segments.contains(&p)
    }

    /// Make room for one more segment without touching the body.
    ///
    /// Fails when the configured capacity is reached or the allocator refuses.
    pub fn reserve_growth(&mut self) -> Result<(), EngineError> {
        if self.segments.len() >= self.max_segments {
            return Err(EngineError::SegmentCapacity {
                max: self.max_segments,
            });
        }
        self.segments
            .try_reserve(1)
            .map_err(|source| EngineError::SegmentAlloc { source })
    }

    pub(crate) fn push_head(&mut self, p: Point) {
        self.segments.push_front(p);
    }

    /// Remove the tail. A single-segment snake keeps its last segment.
    pub(crate) fn pop_tail(&mut self) -> Option<Point> {
        if self.segments.len() <= 1 {
            return None;
        }
        self.segments.pop_back()
    }
}
