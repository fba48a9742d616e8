use clap::Parser;

mod cli;

use cli::args::Cli;
use cli::commands::{dispatch, exit_codes};

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    // Best-effort .env loading; absence is not an error.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let code = match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {e:?}");
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}
