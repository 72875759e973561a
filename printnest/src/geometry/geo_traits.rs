/// Trait for types that can detect collisions between `Self` and `T`.
///
/// Collisions are evaluated with a float tolerance: two primitives that merely touch
/// (within tolerance) are not considered colliding.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}
