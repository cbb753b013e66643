use clap::Parser;
use diocese_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Run the main command, interruptible by Ctrl+C
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(diocese_importer::Error::processing_interrupted(
                    "Import interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(_outcome) => {
            // Success - the outcome has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Diocese Importer - Pastoral Zone Directory Converter");
    println!("====================================================");
    println!();
    println!("Convert a diocesan pastoral-zone directory document from flat text");
    println!("into structured zone, parish and staff records held in a JSON store.");
    println!();
    println!("USAGE:");
    println!("    diocese-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Parse directory text and commit the records (main command)");
    println!("    inspect     Parse directory text and report what was recognized");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Import a directory document into ./store:");
    println!("    diocese-importer import annuaire.txt");
    println!();
    println!("    # Replace the catalog from a folder of documents:");
    println!("    diocese-importer import /path/to/documents --store /srv/catalog --replace");
    println!();
    println!("    # Preview what a document yields, parish by parish:");
    println!("    diocese-importer inspect annuaire.txt --detailed");
    println!();
    println!("For detailed help on any command, use:");
    println!("    diocese-importer <COMMAND> --help");
}
