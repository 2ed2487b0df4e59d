use std::{fs::File, io::BufReader, path::Path};

use otter_qbf::{
    structures::formula::Formula,
    types::err::{self},
};

/// Reads a formula from the QDIMACS file at `path`, decompressing `.xz` files if supported.
pub fn read_formula(path: &Path) -> Result<Formula, err::ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open {path:?}");
            std::process::exit(1);
        }
    };

    match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            Formula::read_qdimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if *extension == "xz" => {
            println!("c Reading xz compressed files requires the 'xz' feature");
            std::process::exit(1);
        }

        _ => Formula::read_qdimacs(BufReader::new(&file)),
    }
}
