use all_pairs_sssp::shell::Shell;
use all_pairs_sssp::{AllPairs, Dijkstra, Selection};
use std::env;
use std::io::{self, IsTerminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // `--parallel` spreads all-pairs runs over threads with heap selection
    let parallel = env::args().skip(1).any(|arg| arg == "--parallel");
    let all_pairs = if parallel {
        AllPairs::new(Dijkstra::new().with_selection(Selection::BinaryHeap)).with_parallel(true)
    } else {
        AllPairs::new(Dijkstra::new())
    };

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    Shell::new()
        .with_all_pairs(all_pairs)
        .run(stdin.lock(), &mut stdout, prompt)?;

    Ok(())
}
