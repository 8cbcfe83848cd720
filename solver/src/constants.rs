//! File layout and defaults shared by the library and the `chartable` binary.

/// Directory (relative to `SYMCHAR_BASE_PATH`) holding saved tables.
pub const TABLE_DIR: &str = "data/char_tables";

/// Default rayon pool size when neither `RAYON_NUM_THREADS` nor `OMP_NUM_THREADS` is set.
pub const DEFAULT_NUM_THREADS: usize = 8;

