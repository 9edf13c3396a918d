pub mod range_map;
