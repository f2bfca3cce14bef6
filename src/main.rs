use std::path::Path;
use std::process::ExitCode;

use vecdraw::{Document, DrawResult, EditorConfig, file_handler};

const USAGE: &str = "usage: vecdraw export <input.jvd> <output[.jpg|.jpeg|.gif|.png]>\n       vecdraw check <input.jvd>";

/// Settings file read from the working directory when present
const CONFIG_FILE: &str = "vecdraw.json";

fn export(input: &Path, output: &Path, config: &EditorConfig) -> DrawResult<()> {
    let document = Document::new();
    file_handler::load_document(&document, input, config)?;
    let written = file_handler::export_document(&document, output, config)?;
    println!("{}", written.display());
    Ok(())
}

fn check(input: &Path, config: &EditorConfig) -> DrawResult<()> {
    let document = Document::new();
    let count = file_handler::load_document(&document, input, config)?;
    match document.bounding_box() {
        Some(bounds) => println!(
            "{count} shapes, bounding box {}x{} at ({},{})",
            bounds.width, bounds.height, bounds.x, bounds.y
        ),
        None => println!("{count} shapes"),
    }
    Ok(())
}

fn run(args: &[String]) -> DrawResult<bool> {
    let config = EditorConfig::load_or_default(CONFIG_FILE)?;
    match args {
        [command, input, output] if command == "export" => {
            export(Path::new(input), Path::new(output), &config)?;
        }
        [command, input] if command == "check" => check(Path::new(input), &config)?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("{USAGE}");
            ExitCode::from(2)
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
