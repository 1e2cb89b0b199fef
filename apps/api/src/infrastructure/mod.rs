pub mod assets;
pub mod imaging;
pub mod storage;
pub mod verification;
