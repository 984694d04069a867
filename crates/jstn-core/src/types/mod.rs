mod kind;
mod schema_type;

pub use kind::Kind;
pub use schema_type::Type;
