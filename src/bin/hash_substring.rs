use std::io::{self, BufWriter};

use strhash::query::process_search_feed;

fn main() -> strhash::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    process_search_feed(stdin.lock(), BufWriter::new(stdout.lock()))
}
