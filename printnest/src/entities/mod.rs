mod instance;
mod item;
mod layout;
mod problem;
mod sheet;
mod solution;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use instance::RejectedItem;
#[doc(inline)]
pub use item::DesignItem;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use layout::PlacedItem;
#[doc(inline)]
pub use problem::Problem;
#[doc(inline)]
pub use problem::SheetKey;
#[doc(inline)]
pub use sheet::Sheet;
#[doc(inline)]
pub use sheet::SheetParams;
#[doc(inline)]
pub use sheet::SheetSize;
#[doc(inline)]
pub use solution::Solution;
