use clap::Parser;

#[derive(Parser)]
#[command(name = "lemmy-setup")]
#[command(version)]
#[command(
    about = "Prepare the inventory and templates for a Lemmy Ansible deployment",
    long_about = None
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = lemmy_setup::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
