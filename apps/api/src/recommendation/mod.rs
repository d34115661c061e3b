// Job recommendations: typed inputs, the pure ranking engine, and the thin HTTP layer around it.
// The engine never touches storage; handlers fetch through the store traits and pass values in.

pub mod engine;
pub mod experience;
pub mod handlers;
pub mod presenter;
pub mod profile;
pub mod skills;
pub mod store;
