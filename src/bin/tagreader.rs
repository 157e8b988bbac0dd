use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

use id3_tagreader::Tags;

fn show(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

fn print_tags(path: &str, tags: &Tags) {
    println!("{}", path);
    match tags.header {
        Some(ref h) => println!("Header\t{}", h),
        None => println!("Header\t"),
    }
    println!("Name\t{}", show(&tags.name));
    println!("Artist\t{}", show(&tags.artist));
    println!("Album\t{}", show(&tags.album));
    println!("Year\t{}", show(&tags.year));
    println!("Track\t{}", show(&tags.track));
    println!("Disc\t{}", show(&tags.disc));
    println!("Genre\t{}", show(&tags.genre));
    println!("Length\t{}", show(&tags.length));
    println!();
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        let name = args.get(0).map_or("tagreader", String::as_str);
        println!("Usage: {} [path to mp3s]", name);
        return;
    }

    for path in &args[1..] {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Could not open {}: {}", path, e);
                process::exit(1);
            }
        };

        match id3_tagreader::read_from(BufReader::new(file)) {
            Ok(Some(tags)) => print_tags(path, &tags),
            Ok(None) => eprintln!("Could not read ID3 information from {}", path),
            Err(e) => eprintln!("Failed to parse {}: {}", path, e),
        }
    }
}
