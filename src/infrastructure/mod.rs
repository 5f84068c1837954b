pub mod argon2_hash_comparer;
pub mod bcrypt_hash_comparer;
