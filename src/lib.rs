pub mod cacheable;
