mod document;
mod replace;
mod update;

use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    update::update_document(
        Path::new(update::DOCUMENT_PATH),
        Path::new(update::FRAGMENT_PATH),
    )?;

    println!("✅ Our Story section updated successfully!");
    Ok(())
}
