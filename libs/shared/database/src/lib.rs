pub mod memory;
pub mod supabase;

pub use memory::{MemoryTable, Record};
pub use supabase::{null_as_default, SupabaseClient};
