use std::process::exit;

use anyhow::Result;
use args::Cli;
use clap::Parser;
use location::ClassLocation;
use runtime::object::loader::ClassLoader;
use tracing::{debug, info, Level};
use tracing_subscriber::fmt;

mod args;

fn locate(class_loader: &mut ClassLoader, class_name: &str, as_file: bool) -> Result<String> {
    let cls = class_loader.for_name(class_name)?;
    let location = ClassLocation::new(&cls);

    if as_file {
        Ok(location.to_file()?.display().to_string())
    } else {
        Ok(location.to_url()?.to_string())
    }
}

fn main() {
    let args = Cli::parse();

    let format = fmt::format()
        .with_ansi(false)
        .without_time()
        .with_level(true)
        .with_target(false)
        .with_thread_names(false)
        .with_source_location(args.verbose)
        .compact();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .event_format(format)
        .with_writer(std::io::stderr)
        .init();

    let mut class_loader = ClassLoader::new();
    for cp in &args.classpath {
        class_loader.add_path(cp);
    }

    debug!("Class path: {:?}", class_loader.class_path().entries());
    info!("Locating {} class(es)", args.classes.len());

    for class_name in &args.classes {
        match locate(&mut class_loader, class_name, args.file) {
            Ok(location) => println!("{} {}", class_name, location),
            Err(e) => {
                println!("Could not locate {}: {}", class_name, e);
                exit(1);
            }
        }
    }
}
