//! Specialized collection types

pub use slotmap::DenseSlotMap;

slotmap::new_key_type! {
    /// Stable generational handle to a body owned by a physics world
    pub struct BodyHandle;
}

/// Dense handle-addressed storage.
///
/// Iteration follows insertion order until a removal, which swaps the last
/// element into the vacated slot and invalidates the removed handle.
pub type BodyMap<T> = DenseSlotMap<BodyHandle, T>;
