mod geo_enums;
mod geo_traits;
mod rect;

#[doc(inline)]
pub use geo_enums::GeoRelation;
#[doc(inline)]
pub use geo_enums::Rotation;
#[doc(inline)]
pub use geo_traits::CollidesWith;
#[doc(inline)]
pub use rect::Rect;
