pub mod genre;

mod tags;
pub use tags::TagField;
pub use tags::Tags;
