pub mod hash_map_open_addressing;

pub use hash_map_open_addressing::HashMapOpenAddressing;
