//! # smartstay-adapter-storage-memory
//!
//! The only storage adapter: plain in-process memory behind `std::sync`
//! mutexes. State is created at startup, mutated by every request, and lost
//! on restart — exactly the lifecycle the system promises.

mod home_repo;
mod newsletter_repo;

pub use home_repo::MemoryHomeStateRepository;
pub use newsletter_repo::MemoryNewsletterRepository;
