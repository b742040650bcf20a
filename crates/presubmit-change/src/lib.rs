mod description;

pub use description::ChangeDescription;
