mod lru;
mod unbounded;

pub use self::lru::Lru;
pub use self::unbounded::Unbounded;
