use date_taken::DateTakenExtractor;
use std::path::Path;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let path = Path::new("assets/IMG_20210320_175909.jpg");
    let mut extractor = DateTakenExtractor::builder().build()?;
    let date_taken = extractor.date_taken(path)?;
    println!("{}", serde_json::to_string_pretty(&date_taken)?);

    Ok(())
}
