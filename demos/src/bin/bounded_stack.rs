use clap::Parser;
use covenant::validity_check;
use covenant_demos::{BoundedStack, init_tracing};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "bounded_stack",
    version,
    about = "Push values onto a stack whose invariant is its capacity"
)]
struct Cli {
    /// Values to push, in order
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Maximum number of items the stack may hold
    #[arg(long, default_value_t = 4)]
    capacity: usize,

    /// Overfill the stack before the first push
    #[arg(long)]
    corrupt: bool,

    /// Push without the invariant check
    #[arg(long)]
    unchecked_push: bool,

    /// Number of items to pop after pushing
    #[arg(long, value_name = "N", default_value_t = 0)]
    pop: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stack = BoundedStack::new(cli.capacity);
    if cli.corrupt {
        stack.corrupt();
    }

    for value in cli.values {
        if cli.unchecked_push {
            stack.push_unchecked(value);
        } else {
            stack.push(value);
        }
    }
    validity_check!(stack);

    for _ in 0..cli.pop {
        let popped = stack.pop();
        info!(?popped, "popped");
    }

    println!("{stack}");
}
