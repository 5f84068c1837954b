pub mod hash_comparer;
