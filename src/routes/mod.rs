pub mod health;
pub mod links;
pub mod login;
pub mod pause;
pub mod queue;
pub mod register;
pub mod summon;

pub use health::health_check;
pub use links::list_summon_links;
pub use login::login;
pub use pause::set_paused;
pub use queue::{clear_table, get_queue};
pub use register::register;
pub use summon::summon_table;
