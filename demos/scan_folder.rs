use date_taken::utils::{analyze_filenames, list_files_walkdir_filtered};
use std::env;
use std::path::PathBuf;

/// Print every file under a folder whose name holds a timestamp.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let start_dir = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("assets"), PathBuf::from);
    let all_files = list_files_walkdir_filtered(&start_dir, false)?;
    println!("Found {} total files.", all_files.len());

    for scan in analyze_filenames(&all_files) {
        match scan.result {
            Ok(Some(datetime)) => println!("{datetime}\t{}", scan.path.display()),
            Ok(None) => {}
            Err(e) => println!("invalid\t{}\t{e}", scan.path.display()),
        }
    }

    Ok(())
}
