//! Demonstration entry point: reads a file two levels above a fixed directory through
//! the unchecked join. The contents are computed and dropped.

use dirread::constants::{DEMO_DIR, DEMO_FILENAME};

fn main() {
    let _file = dirread::read_file_from_dir(DEMO_FILENAME, DEMO_DIR);
}
