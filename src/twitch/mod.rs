pub mod roles;
pub mod user_state;

pub use roles::ChatterRole;
pub use user_state::RawUserState;
