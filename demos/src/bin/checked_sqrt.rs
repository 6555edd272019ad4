use clap::Parser;
use covenant_demos::{checked_sqrt, init_tracing};

#[derive(Parser)]
#[command(
    name = "checked_sqrt",
    version,
    about = "Take square roots under a contract; a negative input aborts"
)]
struct Cli {
    /// Values to take the square root of, in order
    #[arg(
        value_name = "X",
        allow_negative_numbers = true,
        default_values_t = vec![10.0, -10.0]
    )]
    values: Vec<f32>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    for x in cli.values {
        println!("sqrt({x}) {}", checked_sqrt(x));
    }
}
