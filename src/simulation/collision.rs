use crate::axis::Axis;
use crate::block::Block;
use crate::geometry::Rect;

/// Mutable view over every block except the one being updated.
///
/// The driver splits its block list around the current index, so the block
/// under update is never part of its own peer set. Indices run over `before`
/// first, then `after`.
pub struct Peers<'a> {
    before: &'a mut [Block],
    after: &'a mut [Block],
}

impl<'a> Peers<'a> {
    pub fn new(before: &'a mut [Block], after: &'a mut [Block]) -> Self {
        Self { before, after }
    }

    /// Peer set made of a single slice
    pub fn from_slice(blocks: &'a mut [Block]) -> Self {
        Self {
            before: blocks,
            after: &mut [],
        }
    }

    #[inline]
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Block> {
        match idx.checked_sub(self.before.len()) {
            None => self.before.get_mut(idx),
            Some(i) => self.after.get_mut(i),
        }
    }

    /// First live peer whose box overlaps `rect`, in iteration order
    pub fn first_overlapping(&self, rect: &Rect) -> Option<(usize, &Block)> {
        self.before
            .iter()
            .chain(self.after.iter())
            .enumerate()
            .find(|(_, other)| other.is_alive() && other.rect().collides(rect))
    }
}

/// Axis along which two separated blocks exchange velocity.
///
/// Only vertical stacking is detected explicitly: if `a` sits fully above or
/// fully below `b` the contact is vertical, anything else counts as
/// horizontal even when the blocks met diagonally.
#[inline]
pub fn contact_axis(a: &Rect, b: &Rect) -> Axis {
    let on_bottom = a.bottom() <= b.top();
    let on_top = a.top() >= b.bottom();
    if on_bottom || on_top {
        Axis::Y
    } else {
        Axis::X
    }
}

/// Swap one velocity component between two blocks and refresh both directions
pub fn exchange(a: &mut Block, b: &mut Block, axis: Axis) {
    let i = axis.index();
    let mut va = a.velocity();
    let mut vb = b.velocity();
    std::mem::swap(&mut va[i], &mut vb[i]);
    a.set_velocity(va);
    b.set_velocity(vb);
}
