pub mod member;

// Re-export commonly used types
pub use member::{TeamMember, TeamState, WorkingHours};
