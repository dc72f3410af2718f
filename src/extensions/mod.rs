mod themed;
pub use themed::*;
