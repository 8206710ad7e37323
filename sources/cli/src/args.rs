use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
/// Print where classes on a class path were loaded from
pub struct Cli {
    /// The classes to locate, by binary name (com.example.Hoge)
    #[arg(required = true)]
    pub classes: Vec<String>,

    #[arg(long("cp"))]
    /// A list of paths to add to the classpath, directories or jar files
    pub classpath: Vec<String>,

    #[arg(long)]
    /// Print the directory or archive file rather than its URL
    pub file: bool,

    #[arg(long, short)]
    /// Emit debug logs
    pub verbose: bool,
}
