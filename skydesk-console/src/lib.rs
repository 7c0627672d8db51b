pub mod console;
pub mod delete_flow;
pub mod detail;
pub mod present;
pub mod stats;
pub mod view_state;

#[cfg(test)]
mod mock_backend;

pub use console::{BookingConsole, ConsoleState};
pub use delete_flow::DeleteFlow;
pub use detail::{DetailSlot, DetailView};
pub use present::{StatsCard, TableBody};
pub use stats::BookingStats;
pub use view_state::{ViewState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
